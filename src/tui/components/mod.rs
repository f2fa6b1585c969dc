// Component library exports

pub mod app;
pub mod countries_tab;
pub mod global_tab;
pub mod header;
pub mod own_list_tab;
pub mod status_bar;
pub mod tabbed_panel;

pub use app::App;
pub use countries_tab::{CountriesTab, CountriesTabProps};
pub use global_tab::{GlobalTab, GlobalTabProps};
pub use header::{Header, HeaderProps};
pub use own_list_tab::{OwnListTab, OwnListTabProps};
pub use status_bar::{StatusBar, StatusBarProps};
pub use tabbed_panel::{TabItem, TabbedPanel, TabbedPanelProps};
