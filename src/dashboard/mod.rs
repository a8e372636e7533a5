mod components;
pub mod selection;

pub use components::Dashboard;
pub use selection::Selection;
