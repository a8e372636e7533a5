use leptos::{
    component, create_memo, create_rw_signal, view, CollectView, IntoView, Params, RwSignal,
    Signal, SignalGet, SignalUpdate, SignalWith,
};
use leptos_router::{use_params, Params, Redirect, A};
use tracing::debug;

use crate::data::{sample_data, Shipment};
use crate::network::SupplyChainMap;
use crate::role::{resolve_dashboard_route, DashboardRoute, DashboardTab, Role, RoleConfig, RoleSwitcher};
use crate::story::ShipmentStory;
use crate::telemetry::LiveTracking;

use super::selection::Selection;

#[derive(Params, PartialEq)]
struct DashboardParams {
    role: Option<String>,
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let params = use_params::<DashboardParams>();
    let route = create_memo(move |_| {
        params.with(|params| {
            let segment = params.as_ref().ok().and_then(|params| params.role.as_deref());
            resolve_dashboard_route(segment)
        })
    });

    move || match route.get() {
        DashboardRoute::Dashboard(role) => view! { <RoleDashboard role /> }.into_view(),
        DashboardRoute::Redirect(path) => view! { <Redirect path /> }.into_view(),
    }
}

#[component]
fn RoleDashboard(role: Role) -> impl IntoView {
    let data = sample_data();
    let config = role.config();
    let selection = create_rw_signal(Selection::initial(data));

    let tab = create_memo(move |_| selection.with(|selection| selection.tab));
    let shipment = create_memo(move |_| selection.with(|selection| selection.shipment(data).cloned()));

    debug!(%role, shipments = data.shipments.len(), "opening dashboard");

    let content = move || match tab.get() {
        DashboardTab::Network => view! { <SupplyChainMap selection /> }.into_view(),
        tab => match shipment.get() {
            Some(shipment) if tab == DashboardTab::Tracking => {
                view! { <LiveTracking shipment /> }.into_view()
            }
            Some(shipment) => view! { <ShipmentStory shipment /> }.into_view(),
            None => view! { <p class="text-center text-gray-500">"No shipments to show"</p> }.into_view(),
        },
    };

    view! {
        <div class="min-h-screen">
            <header class=format!("bg-gradient-to-r {} text-white p-6", config.theme.gradient)>
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <A href="/">"🏠"</A>
                        <span class="text-3xl">{config.icon}</span>
                        <div>
                            <h1>{config.title}</h1>
                            <p class="opacity-90">{config.subtitle}</p>
                        </div>
                    </div>
                    <RoleSwitcher current=role />
                </div>
                <Metrics config shipment />
            </header>

            <section class="p-6 space-y-6">
                <ShipmentPicker config selection />
                <Tabs config selection />
                {content}
            </section>

            <footer class=format!("bg-gradient-to-r {} p-6", config.theme.footer)>
                <h3>{config.footer_title}</h3>
                <p>{config.footer_body}</p>
            </footer>
        </div>
    }
}

#[component]
fn Metrics(
    config: &'static RoleConfig,
    #[prop(into)] shipment: Signal<Option<Shipment>>,
) -> impl IntoView {
    let data = sample_data();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-6">
            {config
                .metrics
                .into_iter()
                .map(|metric| {
                    let value = move || {
                        shipment.with(|shipment| {
                            shipment
                                .as_ref()
                                .map_or_else(|| "n/a".to_string(), |shipment| metric.value(data, shipment))
                        })
                    };

                    view! {
                        <div class="bg-white/10 rounded-lg p-4">
                            <div class="text-sm opacity-80">{metric.icon()} " " {metric.label()}</div>
                            <div class="text-2xl font-bold">{value}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ShipmentPicker(config: &'static RoleConfig, selection: RwSignal<Selection>) -> impl IntoView {
    let data = sample_data();

    match config.shipment_list_title {
        Some(title) => view! {
            <article>
                <h3>{title}</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {data
                        .shipments
                        .iter()
                        .map(|shipment| {
                            let is_selected = move || {
                                selection.with(|selection| selection.is_shipment_selected(shipment))
                            };

                            view! {
                                <button
                                    class=move || {
                                        let ring = if is_selected() { format!("ring-2 {}", config.theme.ring) } else { String::new() };
                                        format!("text-left p-4 rounded-lg border {ring}")
                                    }
                                    on:click=move |_| selection.update(|selection| selection.select_shipment(shipment))
                                >
                                    <div class="flex items-center justify-between">
                                        <strong>{shipment.tracking_number.clone()}</strong>
                                        <span class=format!("badge {}", shipment.status.badge_class())>
                                            {shipment.status.icon()} " " {shipment.status.label()}
                                        </span>
                                    </div>
                                    <p class="text-sm">{shipment.story.title.clone()}</p>
                                    <p class="text-xs text-gray-500">
                                        {shipment.origin.city.clone()} " → " {shipment.destination.city.clone()}
                                    </p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </article>
        }
        .into_view(),
        None => {
            let banner = move || {
                selection.with(|selection| {
                    selection.shipment(data).map(|shipment| {
                        view! {
                            <article class="text-center">
                                <p class="text-sm text-gray-500">"Tracking number"</p>
                                <h3>{shipment.tracking_number.clone()}</h3>
                                <span class=format!("badge {}", shipment.status.badge_class())>
                                    {shipment.status.icon()} " " {shipment.status.label()}
                                </span>
                            </article>
                        }
                    })
                })
            };

            banner.into_view()
        }
    }
}

#[component]
fn Tabs(config: &'static RoleConfig, selection: RwSignal<Selection>) -> impl IntoView {
    view! {
        <nav class="flex gap-2" role="tablist">
            {config
                .tabs
                .into_iter()
                .map(|tab| {
                    let is_active = move || selection.with(|selection| selection.tab == tab.id);

                    view! {
                        <button
                            role="tab"
                            class=move || {
                                let state = if is_active() { config.theme.tab_active } else { "outline" };
                                format!("px-4 py-2 rounded-lg {state}")
                            }
                            on:click=move |_| selection.update(|selection| selection.select_tab(tab.id))
                        >
                            {tab.icon} " " {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
