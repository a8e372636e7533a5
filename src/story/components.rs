use leptos::{component, view, CollectView, For, IntoView};

use crate::components::ProgressBar;
use crate::data::{Shipment, SustainabilityMetrics, TimelineEvent, TrafficImpact, WeatherImpact};
use crate::datetime::display_datetime;
use crate::format::format_decimal;

#[component]
pub fn ShipmentStory(shipment: Shipment) -> impl IntoView {
    let weather = shipment.weather_alert().cloned();
    let traffic = shipment.traffic_impact.clone();
    let story = shipment.story.clone();
    let progress = shipment.progress.value();

    view! {
        <div class="space-y-6">
            {weather.map(|weather| view! { <WeatherAlert weather /> })}
            {traffic.map(|traffic| view! { <TrafficNote traffic /> })}

            <article>
                <header class="flex items-center justify-between">
                    <div>
                        <h2>{story.title.clone()}</h2>
                        <p class="text-gray-600">{story.description.clone()}</p>
                    </div>
                    <span class=format!("badge {}", shipment.priority.badge_class())>
                        {shipment.priority.icon()} " " {shipment.priority.label()}
                    </span>
                </header>
                <blockquote>"⭐ " {story.hero_moment.clone()}</blockquote>
                <div class="space-y-1">
                    <div class="flex justify-between text-sm">
                        <span>{shipment.origin.city.clone()}</span>
                        <span>{format!("{}%", format_decimal(progress))}</span>
                        <span>{shipment.destination.city.clone()}</span>
                    </div>
                    <ProgressBar value=progress />
                </div>
                <div class="flex gap-2 mt-2">
                    {shipment
                        .special_handling
                        .iter()
                        .map(|tag| view! { <span class="badge badge-outline">{tag.replace('_', " ")}</span> })
                        .collect_view()}
                </div>
            </article>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <article>
                    <h3>"Challenges Overcome"</h3>
                    <ul>
                        {story.challenges.iter().map(|challenge| view! { <li>"⚠️ " {challenge.clone()}</li> }).collect_view()}
                    </ul>
                </article>
                <article>
                    <h3>"Milestones"</h3>
                    <ul>
                        {story.milestones.iter().map(|milestone| view! { <li>"✅ " {milestone.clone()}</li> }).collect_view()}
                    </ul>
                </article>
            </div>

            <article>
                <h3>"Customer Impact"</h3>
                <p>{story.customer_impact.clone()}</p>
            </article>

            <Sustainability metrics=story.sustainability.clone() />

            <Timeline events=shipment.timeline.clone() />
        </div>
    }
}

#[component]
fn WeatherAlert(weather: WeatherImpact) -> impl IntoView {
    view! {
        <article class=format!("border-l-4 {}", weather.severity.alert_class())>
            <div class="flex items-center gap-3">
                <span class="text-2xl">{weather.kind.icon()}</span>
                <div>
                    <h4>"Weather Alert"</h4>
                    <p>{weather.description}</p>
                </div>
            </div>
        </article>
    }
}

#[component]
fn TrafficNote(traffic: TrafficImpact) -> impl IntoView {
    view! {
        <article class="border-l-4 border-yellow-500">
            <h4>"🚦 Traffic"</h4>
            <p>{traffic.description}</p>
            <small>
                {format!(
                    "{} incident(s), average speed {} km/h",
                    traffic.incidents,
                    format_decimal(traffic.average_speed),
                )}
            </small>
        </article>
    }
}

#[component]
fn Sustainability(metrics: SustainabilityMetrics) -> impl IntoView {
    let bars = [
        ("Renewable Energy", metrics.renewable_energy.value()),
        ("Packaging Efficiency", metrics.packaging_efficiency.value()),
        ("Route Optimization", metrics.route_optimization.value()),
    ];

    view! {
        <article>
            <h3>"🌱 Sustainability"</h3>
            <p>
                <strong>{format!("{}kg", format_decimal(metrics.carbon_footprint))}</strong>
                " CO₂ footprint"
            </p>
            {bars
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="flex justify-between text-sm">
                            <span>{label}</span>
                            <span>{format!("{}%", format_decimal(value))}</span>
                        </div>
                        <ProgressBar value />
                    }
                })
                .collect_view()}
        </article>
    }
}

#[component]
fn Timeline(events: Vec<TimelineEvent>) -> impl IntoView {
    view! {
        <article>
            <h3>"Journey Timeline"</h3>
            <ol class="timeline">
                <For each=move || events.clone() key=|event| event.id.clone() let:event>
                    <TimelineEntry event />
                </For>
            </ol>
        </article>
    }
}

#[component]
fn TimelineEntry(event: TimelineEvent) -> impl IntoView {
    let readings = [
        event.data.temperature.map(|value| format!("🌡️ {}°C", format_decimal(value))),
        event.data.humidity.map(|value| format!("💧 {}%", format_decimal(value.value()))),
        event.data.vibration.map(|value| format!("📳 {value:.1}g")),
    ];

    view! {
        <li class="flex gap-3">
            <span class="text-2xl">{event.icon.clone()}</span>
            <div>
                <strong>{event.description.clone()}</strong>
                {event.notes.clone().map(|notes| view! { <p class="text-sm italic">{notes}</p> })}
                <div class="text-sm text-gray-600">
                    {event.location.name.clone()} " · " {display_datetime(event.timestamp)}
                </div>
                <span class=format!("badge {}", event.status.badge_class())>{event.status.label()}</span>
                <span title="mood">{event.emotion.icon()}</span>
                <div class="flex gap-2 text-xs">
                    {readings.into_iter().flatten().map(|reading| view! { <span>{reading}</span> }).collect_view()}
                </div>
            </div>
        </li>
    }
}
