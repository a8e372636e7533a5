use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::data::SampleData;
use crate::data::Shipment;
use crate::datetime::display_date;
use crate::format::{format_currency, format_decimal, format_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Shipper,
    Recipient,
    Operations,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct RoleParseError(pub String);

impl Role {
    pub const ALL: [Self; 3] = [Self::Shipper, Self::Recipient, Self::Operations];

    pub fn key(self) -> &'static str {
        match self {
            Self::Shipper => "shipper",
            Self::Recipient => "recipient",
            Self::Operations => "operations",
        }
    }

    pub fn config(self) -> &'static RoleConfig {
        match self {
            Self::Shipper => &SHIPPER,
            Self::Recipient => &RECIPIENT,
            Self::Operations => &OPERATIONS,
        }
    }

    pub fn profile(self) -> &'static RoleProfile {
        match self {
            Self::Shipper => &SHIPPER_PROFILE,
            Self::Recipient => &RECIPIENT_PROFILE,
            Self::Operations => &OPERATIONS_PROFILE,
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.key() == value)
            .ok_or_else(|| RoleParseError(value.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Story,
    Tracking,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: DashboardTab,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: &'static str,
    pub gradient: &'static str,
    pub ring: &'static str,
    pub tab_active: &'static str,
    pub footer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    ActiveShipments,
    CustomerSatisfaction,
    OnTimeDelivery,
    CostSavings,
    PackageStatus,
    Progress,
    Eta,
    DistanceTraveled,
    TotalShipments,
    NetworkEfficiency,
    ActiveRoutes,
    CarbonSaved,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::ActiveShipments => "Active Shipments",
            Self::CustomerSatisfaction => "Customer Satisfaction",
            Self::OnTimeDelivery => "On-Time Delivery",
            Self::CostSavings => "Cost Savings",
            Self::PackageStatus => "Package Status",
            Self::Progress => "Progress",
            Self::Eta => "ETA",
            Self::DistanceTraveled => "Distance Traveled",
            Self::TotalShipments => "Total Shipments",
            Self::NetworkEfficiency => "Network Efficiency",
            Self::ActiveRoutes => "Active Routes",
            Self::CarbonSaved => "Carbon Saved",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::ActiveShipments | Self::TotalShipments | Self::PackageStatus => "📦",
            Self::CustomerSatisfaction
            | Self::CostSavings
            | Self::Progress
            | Self::NetworkEfficiency
            | Self::CarbonSaved => "📊",
            Self::OnTimeDelivery | Self::Eta | Self::ActiveRoutes => "🚚",
            Self::DistanceTraveled => "📍",
        }
    }

    /// Display value, only the shipment centric metrics depend on `shipment`
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value(self, data: &SampleData, shipment: &Shipment) -> String {
        let metrics = &data.metrics;

        match self {
            Self::ActiveShipments | Self::TotalShipments => {
                format_thousands(metrics.total_shipments)
            }
            Self::CustomerSatisfaction => {
                format!("{}/5", format_decimal(metrics.customer_satisfaction))
            }
            Self::OnTimeDelivery => format!("{}%", format_decimal(metrics.on_time_delivery.value())),
            Self::CostSavings => format_currency(metrics.cost_savings),
            Self::PackageStatus => shipment.status.label().to_string(),
            Self::Progress => format!("{}%", format_decimal(shipment.progress.value())),
            Self::Eta => display_date(shipment.estimated_delivery),
            Self::DistanceTraveled => format!(
                "{} km",
                format_thousands(shipment.distance_traveled_km().round().max(0.0) as u64)
            ),
            Self::NetworkEfficiency => data.network_efficiency().map_or_else(
                || "n/a".to_string(),
                |efficiency| format!("{}%", format_decimal(efficiency.value())),
            ),
            Self::ActiveRoutes => format_thousands(metrics.route_optimizations),
            Self::CarbonSaved => format!("{}kg", format_thousands(metrics.carbon_saved)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub theme: Theme,
    pub tabs: [Tab; 3],
    pub metrics: [MetricKind; 4],
    /// Heading of the shipment picker, roles without one follow a single package
    pub shipment_list_title: Option<&'static str>,
    pub footer_title: &'static str,
    pub footer_body: &'static str,
}

/// How a role presents itself on the selector and the switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub image: &'static str,
}

const fn tabs(story: &'static str, tracking: &'static str, network: &'static str) -> [Tab; 3] {
    [
        Tab {
            id: DashboardTab::Story,
            label: story,
            icon: "📦",
        },
        Tab {
            id: DashboardTab::Tracking,
            label: tracking,
            icon: "🚚",
        },
        Tab {
            id: DashboardTab::Network,
            label: network,
            icon: "📍",
        },
    ]
}

static SHIPPER: RoleConfig = RoleConfig {
    title: "Shipper Dashboard",
    subtitle: "Manage your shipments and customer satisfaction",
    icon: "🏢",
    theme: Theme {
        color: "blue",
        gradient: "from-blue-500 to-blue-700",
        ring: "ring-blue-500",
        tab_active: "bg-blue-600 text-white shadow-md",
        footer: "from-blue-50 to-blue-100",
    },
    tabs: tabs("Shipment Stories", "Live Tracking", "Supply Network"),
    metrics: [
        MetricKind::ActiveShipments,
        MetricKind::CustomerSatisfaction,
        MetricKind::OnTimeDelivery,
        MetricKind::CostSavings,
    ],
    shipment_list_title: Some("Your Shipments"),
    footer_title: "Shipper Insights",
    footer_body: "Monitor your brand reputation through transparent logistics storytelling. \
                  Every shipment is an opportunity to delight customers and build trust.",
};

static RECIPIENT: RoleConfig = RoleConfig {
    title: "My Package Journey",
    subtitle: "Follow your package's exciting adventure",
    icon: "📦",
    theme: Theme {
        color: "green",
        gradient: "from-green-500 to-green-700",
        ring: "ring-green-500",
        tab_active: "bg-green-600 text-white shadow-md",
        footer: "from-green-50 to-green-100",
    },
    tabs: tabs("My Package Story", "Live Updates", "Journey Map"),
    metrics: [
        MetricKind::PackageStatus,
        MetricKind::Progress,
        MetricKind::Eta,
        MetricKind::DistanceTraveled,
    ],
    shipment_list_title: None,
    footer_title: "Your Package's Story",
    footer_body: "Every package has a journey worth telling. From the moment it leaves the \
                  warehouse to the final delivery, we make sure you're part of the adventure.",
};

static OPERATIONS: RoleConfig = RoleConfig {
    title: "Operations Command Center",
    subtitle: "Monitor and optimize your supply network",
    icon: "⚙️",
    theme: Theme {
        color: "orange",
        gradient: "from-orange-500 to-orange-700",
        ring: "ring-orange-500",
        tab_active: "bg-orange-600 text-white shadow-md",
        footer: "from-orange-50 to-orange-100",
    },
    tabs: tabs("Network Stories", "Live Monitoring", "Supply Network"),
    metrics: [
        MetricKind::TotalShipments,
        MetricKind::NetworkEfficiency,
        MetricKind::ActiveRoutes,
        MetricKind::CarbonSaved,
    ],
    shipment_list_title: Some("Network Shipments"),
    footer_title: "Network Optimization",
    footer_body: "Data-driven insights help you optimize routes, reduce costs, and improve \
                  customer satisfaction across your entire supply network.",
};

static SHIPPER_PROFILE: RoleProfile = RoleProfile {
    label: "Shipper",
    title: "Shipper",
    subtitle: "Companies sending goods",
    summary: "Manage shipments",
    description: "Track your shipments, monitor customer satisfaction, and optimize your \
                  logistics operations.",
    features: [
        "Real-time shipment tracking",
        "Customer impact analytics",
        "Sustainability metrics",
        "Brand storytelling tools",
    ],
    image: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?auto=format&fit=crop&w=500&q=80",
};

static RECIPIENT_PROFILE: RoleProfile = RoleProfile {
    label: "Recipient",
    title: "Recipient",
    subtitle: "End customers receiving packages",
    summary: "Track packages",
    description: "Follow your package's journey with engaging stories and transparent updates.",
    features: [
        "Cinematic package stories",
        "Real-time delivery updates",
        "Transparent delay explanations",
        "Exciting delivery anticipation",
    ],
    image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?auto=format&fit=crop&w=500&q=80",
};

static OPERATIONS_PROFILE: RoleProfile = RoleProfile {
    label: "Operations",
    title: "Operations Team",
    subtitle: "Logistics managers and coordinators",
    summary: "Monitor network",
    description: "Monitor your entire supply network, optimize performance, and make \
                  data-driven decisions.",
    features: [
        "Network-wide visibility",
        "Performance analytics",
        "Bottleneck identification",
        "Resource optimization",
    ],
    image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=500&q=80",
};

#[cfg(test)]
mod tests {
    use super::{DashboardTab, MetricKind, Role, RoleParseError};
    use crate::data::SampleData;

    #[test]
    fn roles_parse_from_their_keys() {
        for role in Role::ALL {
            assert_eq!(role.key().parse::<Role>(), Ok(role));
            assert_eq!(role.to_string(), role.key());
        }
    }

    #[test]
    fn unknown_role_is_an_error() {
        assert_eq!(
            "unknown-role".parse::<Role>(),
            Err(RoleParseError("unknown-role".to_string()))
        );
        assert!("Shipper".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn config_lookup_is_pure() {
        for role in Role::ALL {
            assert!(std::ptr::eq(role.config(), role.config()));
            assert_eq!(*role.config(), *role.config());
        }
    }

    #[test]
    fn every_role_has_tabs_in_order() {
        for role in Role::ALL {
            let ids = role.config().tabs.map(|tab| tab.id);
            assert_eq!(
                ids,
                [DashboardTab::Story, DashboardTab::Tracking, DashboardTab::Network]
            );
        }
    }

    #[test]
    fn shipper_config() {
        let config = Role::Shipper.config();

        assert_eq!(config.title, "Shipper Dashboard");
        assert_eq!(config.tabs.len(), 3);
        assert_eq!(config.metrics.len(), 4);
        assert_eq!(config.shipment_list_title, Some("Your Shipments"));
        assert!(Role::Recipient.config().shipment_list_title.is_none());
    }

    #[test]
    fn metric_values() {
        let data = SampleData::load().unwrap();
        let shipment = &data.shipments[0];

        let values = Role::Shipper
            .config()
            .metrics
            .map(|metric| metric.value(&data, shipment));
        assert_eq!(values, ["1,247", "4.8/5", "94.2%", "$45,000"].map(String::from));

        assert_eq!(MetricKind::Progress.value(&data, shipment), "65%");
        assert_eq!(MetricKind::PackageStatus.value(&data, shipment), "In Transit");
        assert_eq!(MetricKind::CarbonSaved.value(&data, shipment), "1,250kg");
        assert_eq!(MetricKind::ActiveRoutes.value(&data, shipment), "156");
        assert_eq!(MetricKind::NetworkEfficiency.value(&data, shipment), "87.8%");
    }

    #[test]
    fn shipment_metrics_follow_the_selection() {
        let data = SampleData::load().unwrap();

        assert_eq!(MetricKind::Progress.value(&data, &data.shipments[1]), "95%");
        assert_eq!(
            MetricKind::PackageStatus.value(&data, &data.shipments[1]),
            "Out For Delivery"
        );
    }
}
