mod canvas;
mod components;
mod create_route_map;

pub use components::RouteMap;
