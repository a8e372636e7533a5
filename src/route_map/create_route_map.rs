use std::{cell::RefCell, rc::Rc};

use leptos::html::Canvas;
use leptos::{
    create_effect, create_node_ref, create_signal, NodeRef, Signal, SignalGet, SignalSet,
};
use leptos_use::{use_device_pixel_ratio, use_element_size, UseElementSizeReturn};
use tracing::error;

use crate::data::{geo::Coordinates, Shipment};

use super::canvas::RouteCanvas;

pub struct CreateRouteMapReturn {
    pub node_ref: NodeRef<Canvas>,
    pub actual_width: Signal<f64>,
    pub actual_height: Signal<f64>,
}

pub fn create_route_map(shipment: &Shipment) -> CreateRouteMapReturn {
    let node_ref = create_node_ref::<Canvas>();
    let dpr = use_device_pixel_ratio();
    let UseElementSizeReturn { width, height } = use_element_size(node_ref);
    let actual_width = move || width.get() * dpr.get();
    let actual_height = move || height.get() * dpr.get();

    let checkpoints = shipment
        .checkpoints()
        .into_iter()
        .map(|location| (location.coordinates, location.city.clone()))
        .collect::<Vec<(Coordinates, String)>>();
    let current = shipment.current_location.coordinates;

    let (canvas, set_canvas) = create_signal::<Option<Rc<RefCell<RouteCanvas>>>>(None);

    create_effect(move |_| {
        let Some(node) = node_ref.get() else {
            return;
        };

        match RouteCanvas::try_new(&node) {
            Ok(route_canvas) => set_canvas.set(Some(Rc::new(RefCell::new(route_canvas)))),
            Err(err) => error!("route canvas failed to initialize: {err}"),
        }
    });

    create_effect(move |_| {
        let Some(canvas) = canvas.get() else {
            return;
        };

        canvas.borrow_mut().render(
            &checkpoints,
            current,
            width.get(),
            height.get(),
            dpr.get(),
        );
    });

    CreateRouteMapReturn {
        node_ref,
        actual_width: actual_width.into(),
        actual_height: actual_height.into(),
    }
}
