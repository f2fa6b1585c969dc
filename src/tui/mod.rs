// Module declarations
pub mod components;
pub mod widgets;

pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod selectors;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod testing;


pub use action::{Action, ListAction, PickerAction};
pub use component::{Component, Effect, Element};
pub use effects::DataEffects;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::View;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::CovidDataProvider;

/// Main entry point for TUI mode
pub async fn run(client: Arc<dyn CovidDataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));
    let mut runtime = Runtime::new(AppState::with_config(config), data_effects);

    // Mounting triggers the initial fetch
    runtime.dispatch(Action::Mount);

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            let element = runtime.build();
            let config = &runtime.state().system.config.display;
            Renderer::new().render(element, area, f.buffer_mut(), config);
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key, runtime.state()) else {
            continue;
        };
        if matches!(action, Action::Quit) {
            tracing::debug!("ACTION: Quitting application");
            return Ok(());
        }
        runtime.dispatch(action);
    }
}
