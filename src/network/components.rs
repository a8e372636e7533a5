use leptos::{component, view, For, IntoView, RwSignal, SignalUpdate, SignalWith};

use crate::dashboard::Selection;
use crate::data::{sample_data, EfficiencyGrade, SupplyChainNode};
use crate::format::{format_currency, format_decimal, format_thousands};

#[component]
pub fn SupplyChainMap(selection: RwSignal<Selection>) -> impl IntoView {
    let data = sample_data();
    let metrics = &data.metrics;
    let efficiency = data
        .network_efficiency()
        .map_or_else(|| "n/a".to_string(), |efficiency| format!("{}%", format_decimal(efficiency.value())));

    view! {
        <div class="space-y-6">
            <article>
                <header>
                    <h3>"📍 Supply Chain Network"</h3>
                    <p class="text-gray-600">"Interactive visualization of your global supply chain network"</p>
                </header>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?auto=format&fit=crop&w=600&q=80"
                            alt="Supply chain network map"
                            class="rounded-lg w-full h-64 object-cover"
                        />
                        <div class="absolute top-4 left-4 text-white">
                            <h4>"Global Network"</h4>
                            <p class="text-sm">"Real-time supply chain visualization"</p>
                        </div>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <Stat value=data.nodes.len().to_string() label="Active Nodes" tone="blue" />
                        <Stat value=format!("{}%", format_decimal(metrics.on_time_delivery.value())) label="On-Time Rate" tone="green" />
                        <Stat value=format_thousands(metrics.total_shipments) label="Total Shipments" tone="purple" />
                        <Stat value=efficiency label="Efficiency" tone="orange" />
                    </div>
                </div>
            </article>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                <For each=move || data.nodes.clone() key=|node| node.id.clone() let:node>
                    <NodeCard node selection />
                </For>
            </div>

            {move || {
                selection
                    .with(|selection| selection.node(data).cloned())
                    .map(|node| view! { <NodeDetails node /> })
            }}

            <article>
                <h3>"📈 Network Analytics"</h3>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    <Stat value=format_thousands(metrics.total_shipments) label="Total Shipments" tone="blue" />
                    <Stat value=format!("{}%", format_decimal(metrics.on_time_delivery.value())) label="On-Time Delivery" tone="green" />
                    <Stat value=format_currency(metrics.cost_savings) label="Cost Savings" tone="purple" />
                    <Stat value=format!("{}kg", format_thousands(metrics.carbon_saved)) label="Carbon Saved" tone="orange" />
                </div>
            </article>
        </div>
    }
}

#[component]
fn Stat(value: String, label: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("text-center p-4 rounded-lg bg-{tone}-50 text-{tone}-600")>
            <div class="text-2xl font-bold">{value}</div>
            <div class="text-sm">{label}</div>
        </div>
    }
}

#[component]
fn NodeCard(node: SupplyChainNode, selection: RwSignal<Selection>) -> impl IntoView {
    let id = node.id.clone();
    let is_selected = move || selection.with(|selection| selection.node_id.as_deref() == Some(id.as_str()));
    let grade = EfficiencyGrade::of(node.efficiency);
    let clicked = node.clone();

    view! {
        <article
            class="cursor-pointer"
            class:ring-2=is_selected
            on:click=move |_| selection.update(|selection| selection.select_node(&clicked))
        >
            <header class="flex items-center justify-between">
                <span class=format!("p-2 rounded-lg {}", node.kind.color_class())>{node.kind.icon()}</span>
                <span class="badge badge-outline">{node.kind.label()}</span>
            </header>
            <h4>{node.name.clone()}</h4>
            <p class="text-sm text-gray-600">"📍 " {node.location.place()}</p>
            <dl class="text-sm">
                <dt>"Efficiency"</dt>
                <dd class=grade.text_class()>{format!("{}%", format_decimal(node.efficiency.value()))}</dd>
                <dt>"Utilization"</dt>
                <dd>{format!("{}%", format_decimal(node.utilization().value().round()))}</dd>
                <dt>"Status"</dt>
                <dd>{node.status.label()}</dd>
                <dt>"Current Load"</dt>
                <dd>{format!("{} / {}", format_thousands(u64::from(node.current_load)), format_thousands(u64::from(node.capacity)))}</dd>
                <dt>"Connections"</dt>
                <dd>{node.connections.len()}</dd>
            </dl>
        </article>
    }
}

#[component]
fn NodeDetails(node: SupplyChainNode) -> impl IntoView {
    let data = sample_data();
    let grade = EfficiencyGrade::of(node.efficiency);
    let connected = data
        .connected_nodes(&node)
        .map(|connected| connected.name.clone())
        .collect::<Vec<_>>();

    view! {
        <article>
            <header class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class=format!("p-3 rounded-lg {}", node.kind.color_class())>{node.kind.icon()}</span>
                    <div>
                        <h3>{node.name.clone()}</h3>
                        <p>"📍 " {node.location.place()}</p>
                    </div>
                </div>
                <span class="badge badge-outline">{node.kind.label()}</span>
            </header>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div>
                    <h4>"Performance Metrics"</h4>
                    <div class="flex items-center justify-between">
                        <span>"Efficiency"</span>
                        <div class="w-20 bg-gray-200 rounded-full h-2">
                            <div
                                class=format!("h-2 rounded-full {}", grade.bar_class())
                                style:width=format!("{}%", node.efficiency.value())
                            ></div>
                        </div>
                    </div>
                    <div class="flex items-center justify-between">
                        <span>"Utilization"</span>
                        <div class="w-20 bg-gray-200 rounded-full h-2">
                            <div class="bg-blue-500 h-2 rounded-full" style:width=format!("{}%", node.utilization().value())></div>
                        </div>
                    </div>
                </div>
                <div>
                    <h4>"Operational Data"</h4>
                    <p>"Status: " {node.status.label()}</p>
                    <p>"Capacity: " {format_thousands(u64::from(node.capacity))}</p>
                    <p>"Current Load: " {format_thousands(u64::from(node.current_load))}</p>
                </div>
                <div>
                    <h4>"Network Impact"</h4>
                    <p>"Connected Nodes: " {connected.len()}</p>
                    <ul>
                        {connected.into_iter().map(|name| view! { <li>{name}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </article>
    }
}
