pub mod data_loading;
pub mod list;
pub mod navigation;
pub mod selection;

pub use data_loading::reduce_data_loading;
pub use list::reduce_list;
pub use navigation::reduce_navigation;
pub use selection::reduce_selection;
