use leptos::{component, view, IntoView};

use crate::data::Shipment;

use super::create_route_map::{create_route_map, CreateRouteMapReturn};

#[component]
pub fn RouteMap(shipment: Shipment) -> impl IntoView {
    let CreateRouteMapReturn {
        node_ref,
        actual_width,
        actual_height,
    } = create_route_map(&shipment);

    view! {
        <canvas
            class="rounded-lg w-full"
            node_ref=node_ref
            width=actual_width
            height=actual_height
            style:width="100%"
            style:height="320px"
        />
    }
}
