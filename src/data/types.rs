use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::{path_length_km, Coordinates};

/// A percentage, always within `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Percent(f64);

impl Percent {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }

        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    PickedUp,
    InTransit,
    AtFacility,
    OutForDelivery,
    Delivered,
    Delayed,
    Exception,
    Returned,
}

impl ShipmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::PickedUp => "Picked Up",
            Self::InTransit => "In Transit",
            Self::AtFacility => "At Facility",
            Self::OutForDelivery => "Out For Delivery",
            Self::Delivered => "Delivered",
            Self::Delayed => "Delayed",
            Self::Exception => "Exception",
            Self::Returned => "Returned",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Delivered => "bg-green-100 text-green-800",
            Self::OutForDelivery => "bg-yellow-100 text-yellow-800",
            Self::InTransit => "bg-blue-100 text-blue-800",
            Self::Delayed | Self::Exception => "bg-red-100 text-red-800",
            Self::Pending | Self::PickedUp | Self::AtFacility | Self::Returned => {
                "bg-gray-100 text-gray-800"
            }
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Delivered => "✅",
            Self::OutForDelivery => "🚚",
            Self::InTransit => "⏳",
            Self::Delayed | Self::Exception => "⚠️",
            Self::Pending | Self::PickedUp | Self::AtFacility | Self::Returned => "📦",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Warehouse,
    DistributionCenter,
    Airport,
    Port,
    Customs,
    FinalDestination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    /// `[longitude, latitude]`
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub address: String,
    pub city: String,
    pub country: String,
    pub timezone: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub current_load: Option<u32>,
}

impl Location {
    pub fn place(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityMetrics {
    /// Kilograms of CO2
    pub carbon_footprint: f64,
    pub renewable_energy: Percent,
    pub packaging_efficiency: Percent,
    pub route_optimization: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentStory {
    pub title: String,
    pub description: String,
    pub hero_moment: String,
    pub challenges: Vec<String>,
    pub milestones: Vec<String>,
    pub customer_impact: String,
    pub sustainability: SustainabilityMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Excitement,
    Concern,
    Relief,
    Anticipation,
    Satisfaction,
}

impl Emotion {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Excitement => "🎉",
            Self::Concern => "😟",
            Self::Relief => "😌",
            Self::Anticipation => "⏳",
            Self::Satisfaction => "😊",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<Percent>,
    #[serde(default)]
    pub vibration: Option<f64>,
    #[serde(default)]
    pub light: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub location: Location,
    pub status: ShipmentStatus,
    pub description: String,
    pub icon: String,
    pub emotion: Emotion,
    #[serde(default)]
    pub data: SensorData,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Standard,
    Express,
    Urgent,
    Critical,
}

impl Priority {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🚨",
            Self::Urgent => "⚡",
            Self::Standard | Self::Express => "📦",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Express => "EXPRESS",
            Self::Urgent => "URGENT",
            Self::Critical => "CRITICAL",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Critical => "badge-destructive",
            Self::Urgent => "badge-default",
            Self::Standard | Self::Express => "badge-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    None,
    Minor,
    Major,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    Clear,
    Rain,
    Snow,
    Storm,
    Fog,
}

impl WeatherKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Storm => "⛈️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Fog => "🌫️",
            Self::Clear => "☀️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Light,
    Moderate,
    Severe,
}

impl Severity {
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Severe => "border-red-500 bg-red-50",
            Self::Moderate => "border-yellow-500 bg-yellow-50",
            Self::Light => "border-blue-500 bg-blue-50",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    #[serde(rename = "type")]
    pub kind: WeatherKind,
    pub severity: Severity,
    pub impact: Impact,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficImpact {
    pub level: TrafficLevel,
    pub incidents: u32,
    pub average_speed: f64,
    pub impact: Impact,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Cm,
    In,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: LengthUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub tracking_number: String,
    pub status: ShipmentStatus,
    pub origin: Location,
    pub destination: Location,
    pub current_location: Location,
    pub progress: Percent,
    pub estimated_delivery: DateTime<Utc>,
    #[serde(default)]
    pub actual_delivery: Option<DateTime<Utc>>,
    pub story: ShipmentStory,
    pub timeline: Vec<TimelineEvent>,
    pub priority: Priority,
    pub value: f64,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub special_handling: Vec<String>,
    #[serde(default)]
    pub weather_impact: Option<WeatherImpact>,
    #[serde(default)]
    pub traffic_impact: Option<TrafficImpact>,
}

impl Shipment {
    /// Origin, every timeline stop, then the destination
    pub fn checkpoints(&self) -> Vec<&Location> {
        std::iter::once(&self.origin)
            .chain(self.timeline.iter().map(|event| &event.location))
            .chain(std::iter::once(&self.destination))
            .collect()
    }

    /// Great circle length of the path walked so far, up to the current location
    pub fn distance_traveled_km(&self) -> f64 {
        let path = std::iter::once(self.origin.coordinates)
            .chain(self.timeline.iter().map(|event| event.location.coordinates))
            .chain(std::iter::once(self.current_location.coordinates))
            .collect::<Vec<_>>();

        path_length_km(&path)
    }

    /// Weather worth surfacing, `None` when absent or without impact
    pub fn weather_alert(&self) -> Option<&WeatherImpact> {
        self.weather_impact
            .as_ref()
            .filter(|weather| weather.impact != Impact::None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_shipments: u64,
    pub on_time_delivery: Percent,
    /// Days
    pub average_transit_time: f64,
    /// Out of 5
    pub customer_satisfaction: f64,
    /// Kilograms
    pub carbon_saved: u64,
    pub cost_savings: u64,
    pub route_optimizations: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Supplier,
    Manufacturer,
    Warehouse,
    Distributor,
    Retailer,
    Customer,
}

impl NodeKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Supplier => "🏭",
            Self::Manufacturer => "⚙️",
            Self::Warehouse => "🏬",
            Self::Distributor => "🚛",
            Self::Retailer => "🏪",
            Self::Customer => "👤",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Supplier => "SUPPLIER",
            Self::Manufacturer => "MANUFACTURER",
            Self::Warehouse => "WAREHOUSE",
            Self::Distributor => "DISTRIBUTOR",
            Self::Retailer => "RETAILER",
            Self::Customer => "CUSTOMER",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            Self::Supplier => "bg-blue-100 text-blue-600 border-blue-200",
            Self::Manufacturer => "bg-purple-100 text-purple-600 border-purple-200",
            Self::Warehouse => "bg-green-100 text-green-600 border-green-200",
            Self::Distributor => "bg-orange-100 text-orange-600 border-orange-200",
            Self::Retailer => "bg-pink-100 text-pink-600 border-pink-200",
            Self::Customer => "bg-gray-100 text-gray-600 border-gray-200",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Operational,
    Maintenance,
    Overloaded,
    Offline,
}

impl NodeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Maintenance => "maintenance",
            Self::Overloaded => "overloaded",
            Self::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyGrade {
    High,
    Medium,
    Low,
}

impl EfficiencyGrade {
    pub fn of(efficiency: Percent) -> Self {
        let efficiency = efficiency.value();
        if efficiency >= 90.0 {
            Self::High
        } else if efficiency >= 70.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::High => "text-green-600",
            Self::Medium => "text-yellow-600",
            Self::Low => "text-red-600",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Self::High => "bg-green-500",
            Self::Medium => "bg-yellow-500",
            Self::Low => "bg-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub location: Location,
    pub capacity: u32,
    pub current_load: u32,
    pub efficiency: Percent,
    pub connections: Vec<String>,
    pub status: NodeStatus,
}

impl SupplyChainNode {
    /// Share of the capacity currently in use
    pub fn utilization(&self) -> Percent {
        if self.capacity == 0 {
            return Percent::new(0.0);
        }

        Percent::new(f64::from(self.current_load) / f64::from(self.capacity) * 100.0)
    }
}
