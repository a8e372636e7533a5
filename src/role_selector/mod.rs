mod components;

pub use components::RoleSelector;
