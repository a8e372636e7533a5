use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{error, info, warn};

use super::types::{DashboardMetrics, Percent, Shipment, SupplyChainNode};

const SAMPLE_DATA_JSON: &str = include_str!("logistics.json");

static SAMPLE_DATA: OnceLock<SampleData> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SampleData {
    pub shipments: Vec<Shipment>,
    pub metrics: DashboardMetrics,
    pub nodes: Vec<SupplyChainNode>,
}

impl SampleData {
    pub fn load() -> Result<Self> {
        Self::from_json(SAMPLE_DATA_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("sample logistics data is malformed")
    }

    pub fn shipment(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|shipment| shipment.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&SupplyChainNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn connected_nodes<'a>(
        &'a self,
        node: &'a SupplyChainNode,
    ) -> impl Iterator<Item = &'a SupplyChainNode> + 'a {
        node.connections.iter().filter_map(|id| self.node(id))
    }

    /// `(node id, missing connection id)` pairs
    pub fn dangling_connections(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.connections
                    .iter()
                    .filter(|id| self.node(id).is_none())
                    .map(|id| (node.id.as_str(), id.as_str()))
            })
            .collect()
    }

    /// Mean efficiency across the network, `None` without nodes
    #[expect(clippy::cast_precision_loss)]
    pub fn network_efficiency(&self) -> Option<Percent> {
        if self.nodes.is_empty() {
            return None;
        }

        let total = self
            .nodes
            .iter()
            .map(|node| node.efficiency.value())
            .sum::<f64>();

        Some(Percent::new(total / self.nodes.len() as f64))
    }
}

/// Bundled sample data, parsed on first access
pub fn sample_data() -> &'static SampleData {
    SAMPLE_DATA.get_or_init(|| match SampleData::load() {
        Ok(data) => {
            for (node, connection) in data.dangling_connections() {
                warn!(node, connection, "supply chain connection to an unknown node");
            }

            info!(
                shipments = data.shipments.len(),
                nodes = data.nodes.len(),
                "sample data loaded"
            );

            data
        }
        Err(err) => {
            error!("sample data loading error: {err:#}");
            SampleData::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::SampleData;
    use crate::data::types::{Impact, NodeKind, ShipmentStatus};

    #[test]
    fn bundled_data_parses() {
        let data = SampleData::load().unwrap();

        assert_eq!(data.shipments.len(), 2);
        assert_eq!(data.nodes.len(), 4);
        assert_eq!(data.metrics.total_shipments, 1247);
        assert_eq!(data.metrics.cost_savings, 45_000);

        let first = &data.shipments[0];
        assert_eq!(first.tracking_number, "LV2024HERO001");
        assert_eq!(first.status, ShipmentStatus::InTransit);
        assert!((first.progress.value() - 65.0).abs() < f64::EPSILON);
        assert_eq!(first.timeline.len(), 2);
        assert_eq!(
            first.weather_impact.as_ref().map(|weather| weather.impact),
            Some(Impact::Major)
        );
    }

    #[test]
    fn bundled_network_has_no_dangling_connections() {
        let data = SampleData::load().unwrap();

        assert!(data.dangling_connections().is_empty());
    }

    #[test]
    fn dangling_connections_are_reported() {
        let mut data = SampleData::load().unwrap();
        data.nodes.retain(|node| node.id != "node-004");

        assert_eq!(
            data.dangling_connections(),
            vec![("node-002", "node-004"), ("node-003", "node-004")]
        );
    }

    #[test]
    fn connected_nodes_follow_references() {
        let data = SampleData::load().unwrap();
        let hub = data.node("node-001").unwrap();

        let kinds = data
            .connected_nodes(hub)
            .map(|node| node.kind)
            .collect::<Vec<_>>();

        assert_eq!(kinds, vec![NodeKind::Distributor, NodeKind::Warehouse]);
    }

    #[test]
    fn network_efficiency_is_the_mean() {
        let data = SampleData::load().unwrap();
        let efficiency = data.network_efficiency().unwrap();

        assert!((efficiency.value() - 87.75).abs() < 1e-9);
        assert!(SampleData::default().network_efficiency().is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SampleData::from_json("{\"shipments\": 3}").is_err());
    }

    #[test]
    fn checkpoints_and_distance() {
        let data = SampleData::load().unwrap();
        let shipment = data.shipment("ship-002").unwrap();

        let names = shipment
            .checkpoints()
            .iter()
            .map(|location| location.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Amsterdam Green Hub", "Amsterdam Green Hub", "Berlin Eco Center"]
        );

        let traveled = shipment.distance_traveled_km();
        assert!((570.0..585.0).contains(&traveled), "{traveled}");
    }

    #[test]
    fn weather_alert_requires_impact() {
        let data = SampleData::load().unwrap();
        let mut shipment = data.shipments[0].clone();
        assert!(shipment.weather_alert().is_some());

        if let Some(weather) = shipment.weather_impact.as_mut() {
            weather.impact = Impact::None;
        }
        assert!(shipment.weather_alert().is_none());
        assert!(data.shipments[1].weather_alert().is_none());
    }
}
