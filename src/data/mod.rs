pub mod geo;
pub mod journey;
pub mod sample;
pub mod types;

pub use sample::{sample_data, SampleData};
pub use types::*;
