mod components;
mod types;

pub use components::LogisticsScene;
