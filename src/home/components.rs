use leptos::{component, view, CollectView, IntoView};
use leptos_router::A;

use crate::config::ROLE_SELECTOR_PATH;
use crate::data::sample_data;
use crate::format::{format_decimal, format_thousands};
use crate::role::Role;
use crate::scene::LogisticsScene;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📖",
        "Shipment Stories",
        "Every package carries a narrative, from the warehouse floor to the doorstep.",
    ),
    (
        "📡",
        "Live Telemetry",
        "Temperature, vibration, fuel and signal readings streamed while the package moves.",
    ),
    (
        "🌐",
        "Supply Network",
        "Ports, warehouses and hubs with their load and efficiency at a glance.",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    let metrics = &sample_data().metrics;

    view! {
        <div class="space-y-12 p-6">
            <section class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                <div class="space-y-4">
                    <h1>"Every shipment tells a story"</h1>
                    <p class="text-lg text-gray-600">
                        "Follow packages across the globe, watch live telemetry and keep the whole supply network in view, "
                        "whether you send, receive or operate."
                    </p>
                    <A href=ROLE_SELECTOR_PATH class="button">"Get started →"</A>
                </div>
                <LogisticsScene asset_id="global-network" />
            </section>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                <div>
                    <div class="text-3xl font-bold">{format_thousands(metrics.total_shipments)}</div>
                    <div class="text-gray-600">"Shipments tracked"</div>
                </div>
                <div>
                    <div class="text-3xl font-bold">
                        {format!("{}%", format_decimal(metrics.on_time_delivery.value()))}
                    </div>
                    <div class="text-gray-600">"On-time delivery"</div>
                </div>
                <div>
                    <div class="text-3xl font-bold">{format!("{}/5", format_decimal(metrics.customer_satisfaction))}</div>
                    <div class="text-gray-600">"Customer satisfaction"</div>
                </div>
                <div>
                    <div class="text-3xl font-bold">{format!("{}kg", format_thousands(metrics.carbon_saved))}</div>
                    <div class="text-gray-600">"Carbon saved"</div>
                </div>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, body)| {
                        view! {
                            <article>
                                <div class="text-3xl">{icon}</div>
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="grid grid-cols-1 md:grid-cols-2 gap-6 items-center">
                <LogisticsScene asset_id="smart-warehouse" />
                <div>
                    <h2>"Built for everyone on the route"</h2>
                    <ul>
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                let profile = role.profile();
                                view! {
                                    <li>
                                        {role.config().icon} " " <strong>{profile.title}</strong> ": " {profile.description}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>
        </div>
    }
}
