mod components;
pub mod route;
pub mod types;

pub use components::RoleSwitcher;
pub use route::{dashboard_path, resolve_dashboard_route, DashboardRoute};
pub use types::{DashboardTab, MetricKind, Role, RoleConfig};
