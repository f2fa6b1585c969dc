use ratatui::style::Color;

use crate::formatting::number_with_commas;
use crate::locale::Locale;
use crate::panel::GlobalStats;
use crate::tui::component::{horizontal, vertical, Component, Constraint, Element};
use crate::tui::widgets::stat_box::STAT_BOX_HEIGHT;
use crate::tui::widgets::StatBox;

const CASES_COLOR: Color = Color::Rgb(3, 157, 252);
const DEATHS_COLOR: Color = Color::Red;
const RECOVERED_COLOR: Color = Color::Green;

/// Props for the global tab
#[derive(Debug, Clone)]
pub struct GlobalTabProps {
    pub stats: GlobalStats,
    pub locale: Locale,
}

/// Global tab - worldwide cases, deaths and recoveries side by side
///
/// Deaths and recoveries also show their share of all cases.
pub struct GlobalTab;

impl Component for GlobalTab {
    type Props = GlobalTabProps;

    fn view(&self, props: &Self::Props) -> Element {
        let strings = props.locale.strings();
        let stats = &props.stats;

        let boxes = vec![
            StatBox {
                title: strings.cases.to_string(),
                value: number_with_commas(stats.cases),
                rate: None,
                color: CASES_COLOR,
            },
            StatBox {
                title: strings.deaths.to_string(),
                value: number_with_commas(stats.deaths),
                rate: Some(stats.death_rate_text()),
                color: DEATHS_COLOR,
            },
            StatBox {
                title: strings.recovered.to_string(),
                value: number_with_commas(stats.recovered),
                rate: Some(stats.recovered_rate_text()),
                color: RECOVERED_COLOR,
            },
        ];

        let row = horizontal(
            [
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ],
            boxes
                .into_iter()
                .map(|b| Element::Widget(Box::new(b)))
                .collect(),
        );

        vertical(
            [
                Constraint::Length(1), // Top padding
                Constraint::Length(STAT_BOX_HEIGHT),
                Constraint::Min(0),
            ],
            vec![Element::None, row, Element::None],
        )
    }
}
