use tracing::warn;

use crate::config::ROLE_SELECTOR_PATH;

use super::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRoute {
    Dashboard(Role),
    Redirect(&'static str),
}

/// Decides what `/dashboard/{role}` shows for a raw route segment
pub fn resolve_dashboard_route(segment: Option<&str>) -> DashboardRoute {
    let Some(segment) = segment else {
        warn!("dashboard requested without a role");
        return DashboardRoute::Redirect(ROLE_SELECTOR_PATH);
    };

    match segment.parse::<Role>() {
        Ok(role) => DashboardRoute::Dashboard(role),
        Err(err) => {
            warn!(segment, "{err}, redirecting to the role selector");
            DashboardRoute::Redirect(ROLE_SELECTOR_PATH)
        }
    }
}

pub fn dashboard_path(role: Role) -> String {
    format!("/dashboard/{role}")
}

/// Where switching from `current` to `requested` leads, `None` when nothing changes
pub fn role_switch_target(current: Role, requested: Role) -> Option<String> {
    (current != requested).then(|| dashboard_path(requested))
}

/// The role a selector click commits to, `None` while an earlier choice is pending
pub fn role_selection(pending: Option<Role>, requested: Role) -> Option<Role> {
    match pending {
        Some(_) => None,
        None => Some(requested),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        dashboard_path, resolve_dashboard_route, role_selection, role_switch_target,
        DashboardRoute,
    };
    use crate::role::types::{DashboardTab, Role};

    #[test]
    fn known_roles_open_their_dashboard() {
        assert_eq!(
            resolve_dashboard_route(Some("shipper")),
            DashboardRoute::Dashboard(Role::Shipper)
        );
        assert_eq!(
            resolve_dashboard_route(Some("recipient")),
            DashboardRoute::Dashboard(Role::Recipient)
        );
        assert_eq!(
            resolve_dashboard_route(Some("operations")),
            DashboardRoute::Dashboard(Role::Operations)
        );
    }

    #[test]
    fn shipper_dashboard_layout() {
        let DashboardRoute::Dashboard(role) = resolve_dashboard_route(Some("shipper")) else {
            panic!("shipper should resolve to a dashboard");
        };

        let config = role.config();
        assert_eq!(
            config.tabs.map(|tab| tab.id),
            [DashboardTab::Story, DashboardTab::Tracking, DashboardTab::Network]
        );
        assert_eq!(config.metrics.len(), 4);
    }

    #[test]
    fn unknown_role_redirects_to_the_selector() {
        assert_eq!(
            resolve_dashboard_route(Some("unknown-role")),
            DashboardRoute::Redirect("/role-selector")
        );
        assert_eq!(
            resolve_dashboard_route(None),
            DashboardRoute::Redirect("/role-selector")
        );
    }

    #[test]
    fn dashboard_paths() {
        assert_eq!(dashboard_path(Role::Operations), "/dashboard/operations");
    }

    #[test]
    fn switching_to_the_current_role_stays() {
        assert_eq!(role_switch_target(Role::Shipper, Role::Shipper), None);
        assert_eq!(
            role_switch_target(Role::Shipper, Role::Recipient),
            Some("/dashboard/recipient".to_string())
        );
    }

    #[test]
    fn first_selector_choice_wins() {
        assert_eq!(role_selection(None, Role::Recipient), Some(Role::Recipient));
        assert_eq!(role_selection(Some(Role::Recipient), Role::Operations), None);
        assert_eq!(role_selection(Some(Role::Recipient), Role::Recipient), None);
    }
}
