use crate::data::{SampleData, Shipment, SupplyChainNode};
use crate::role::DashboardTab;

/// What the dashboard currently focuses on, every change is last write wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub shipment_id: Option<String>,
    pub tab: DashboardTab,
    pub node_id: Option<String>,
}

impl Selection {
    /// First shipment selected, story tab open, no node
    pub fn initial(data: &SampleData) -> Self {
        Self {
            shipment_id: data.shipments.first().map(|shipment| shipment.id.clone()),
            ..Self::default()
        }
    }

    pub fn select_shipment(&mut self, shipment: &Shipment) {
        self.shipment_id = Some(shipment.id.clone());
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn select_node(&mut self, node: &SupplyChainNode) {
        self.node_id = Some(node.id.clone());
    }

    pub fn is_shipment_selected(&self, shipment: &Shipment) -> bool {
        self.shipment_id.as_deref() == Some(shipment.id.as_str())
    }

    pub fn shipment<'a>(&self, data: &'a SampleData) -> Option<&'a Shipment> {
        self.shipment_id.as_deref().and_then(|id| data.shipment(id))
    }

    pub fn node<'a>(&self, data: &'a SampleData) -> Option<&'a SupplyChainNode> {
        self.node_id.as_deref().and_then(|id| data.node(id))
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use crate::data::SampleData;
    use crate::role::DashboardTab;

    #[test]
    fn starts_on_the_first_shipment_and_story() {
        let data = SampleData::load().unwrap();
        let selection = Selection::initial(&data);

        assert_eq!(selection.shipment_id.as_deref(), Some("ship-001"));
        assert_eq!(selection.tab, DashboardTab::Story);
        assert!(selection.node_id.is_none());
        assert!(Selection::initial(&SampleData::default()).shipment_id.is_none());
    }

    #[test]
    fn selecting_a_shipment_points_at_exactly_that_shipment() {
        let data = SampleData::load().unwrap();
        let mut selection = Selection::initial(&data);

        selection.select_shipment(&data.shipments[1]);

        assert_eq!(selection.shipment(&data), Some(&data.shipments[1]));
        assert!(selection.is_shipment_selected(&data.shipments[1]));
        assert!(!selection.is_shipment_selected(&data.shipments[0]));
    }

    #[test]
    fn last_selection_wins() {
        let data = SampleData::load().unwrap();
        let mut selection = Selection::initial(&data);

        selection.select_tab(DashboardTab::Network);
        selection.select_tab(DashboardTab::Tracking);
        selection.select_shipment(&data.shipments[1]);
        selection.select_shipment(&data.shipments[0]);

        assert_eq!(selection.tab, DashboardTab::Tracking);
        assert_eq!(selection.shipment_id.as_deref(), Some("ship-001"));
    }

    #[test]
    fn tab_changes_keep_the_shipment() {
        let data = SampleData::load().unwrap();
        let mut selection = Selection::initial(&data);
        selection.select_shipment(&data.shipments[1]);

        selection.select_tab(DashboardTab::Network);

        assert_eq!(selection.shipment_id.as_deref(), Some("ship-002"));
    }

    #[test]
    fn node_selection() {
        let data = SampleData::load().unwrap();
        let mut selection = Selection::initial(&data);
        assert!(selection.node(&data).is_none());

        selection.select_node(&data.nodes[2]);

        assert_eq!(
            selection.node(&data).map(|node| node.id.as_str()),
            Some("node-003")
        );
    }
}
