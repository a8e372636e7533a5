mod components;

pub use components::SupplyChainMap;
