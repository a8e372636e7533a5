use super::types::{Shipment, ShipmentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Active => "In Progress",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JourneyStage {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub place: String,
    pub status: StageStatus,
}

pub fn journey_stages(shipment: &Shipment) -> [JourneyStage; 3] {
    use StageStatus::{Active, Completed, Pending};

    let [received, transit, delivered] = match shipment.status {
        ShipmentStatus::Pending => [Active, Pending, Pending],
        ShipmentStatus::Delivered => [Completed, Completed, Completed],
        ShipmentStatus::OutForDelivery => [Completed, Completed, Active],
        ShipmentStatus::PickedUp
        | ShipmentStatus::InTransit
        | ShipmentStatus::AtFacility
        | ShipmentStatus::Delayed
        | ShipmentStatus::Exception
        | ShipmentStatus::Returned => [Completed, Active, Pending],
    };

    [
        JourneyStage {
            title: "Package Received",
            description: "Shipment initiated at origin facility",
            icon: "📦",
            place: shipment.origin.place(),
            status: received,
        },
        JourneyStage {
            title: "In Transit",
            description: "En route via the transport network",
            icon: "🚚",
            place: shipment.current_location.place(),
            status: transit,
        },
        JourneyStage {
            title: "Delivered",
            description: "Package ready for final handoff",
            icon: "✅",
            place: shipment.destination.place(),
            status: delivered,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{journey_stages, StageStatus};
    use crate::data::sample::SampleData;
    use crate::data::types::ShipmentStatus;

    #[test]
    fn in_transit_shipment_is_mid_journey() {
        let data = SampleData::load().unwrap();
        let shipment = data.shipment("ship-001").unwrap();
        assert_eq!(shipment.status, ShipmentStatus::InTransit);

        let stages = journey_stages(shipment);
        let statuses = stages.iter().map(|stage| stage.status).collect::<Vec<_>>();

        assert_eq!(
            statuses,
            vec![StageStatus::Completed, StageStatus::Active, StageStatus::Pending]
        );
        assert_eq!(stages[0].place, "Shanghai, China");
        assert_eq!(stages[2].place, "New York, USA");
    }

    #[test]
    fn delivered_shipment_completes_every_stage() {
        let data = SampleData::load().unwrap();
        let mut shipment = data.shipments[1].clone();
        shipment.status = ShipmentStatus::Delivered;

        assert!(journey_stages(&shipment)
            .iter()
            .all(|stage| stage.status == StageStatus::Completed));
    }
}
