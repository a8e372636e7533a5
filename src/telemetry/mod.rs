mod components;
mod create_telemetry;
pub mod simulator;
pub mod types;

pub use components::LiveTracking;
