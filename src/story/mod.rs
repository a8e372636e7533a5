mod components;

pub use components::ShipmentStory;
