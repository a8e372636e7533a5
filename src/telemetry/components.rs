use chrono::Utc;
use leptos::{
    component, create_memo, create_signal, view, Callable, Callback, CollectView, IntoView, Signal,
    SignalGet, SignalSet, SignalUpdate, SignalWith,
};

use crate::components::ProgressBar;
use crate::config::SimulatorConfig;
use crate::data::geo::haversine_km;
use crate::data::journey::{journey_stages, JourneyStage, StageStatus};
use crate::data::Shipment;
use crate::datetime::{display_clock, display_countdown};
use crate::format::{format_decimal, format_thousands};
use crate::route_map::RouteMap;

use super::create_telemetry::{create_telemetry, CreateTelemetryReturn};
use super::types::{Channel, Readings, Trends};

#[component]
pub fn LiveTracking(
    shipment: Shipment,
    #[prop(optional)] config: SimulatorConfig,
) -> impl IntoView {
    let CreateTelemetryReturn {
        set_live,
        refresh,
        readings,
        previous,
        trends,
        ticks,
        now,
        is_live,
        is_ticking,
    } = create_telemetry(config);

    let (selected_channel, set_selected_channel) = create_signal(None::<Channel>);

    let eta = shipment.estimated_delivery;
    let countdown = move || display_countdown(now.get().with_timezone(&Utc), eta);

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let remaining_km = haversine_km(
        shipment.current_location.coordinates,
        shipment.destination.coordinates,
    )
    .round() as u64;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let traveled_km = shipment.distance_traveled_km().round() as u64;

    let stages = journey_stages(&shipment);
    let progress = shipment.progress.value();

    view! {
        <div class="space-y-6">
            <article>
                <header class="flex items-center justify-between">
                    <div>
                        <h3>"📡 Live Tracking"</h3>
                        <p class="text-sm text-gray-600">
                            {move || display_clock(now.get())} " · " {move || ticks.get()} " updates"
                        </p>
                    </div>
                    <div class="flex items-center gap-2">
                        <button
                            class:outline=move || !is_live.get()
                            on:click=move |_| set_live.update(|live| *live = !*live)
                        >
                            {move || if is_live.get() { "🟢 LIVE" } else { "⏸ PAUSED" }}
                        </button>
                        <button class="secondary" on:click=move |_| refresh.call(())>
                            "🔄 Refresh"
                        </button>
                    </div>
                </header>
                <p class="font-medium">"⏱ " {countdown}</p>
                <p class="text-sm text-gray-500" class:hidden=move || is_ticking.get()>
                    "Readings are on hold until tracking goes live again"
                </p>
            </article>

            <JourneyProgress stages />

            <article>
                <h4>"🚚 Route Progress"</h4>
                <div class="flex justify-between text-sm">
                    <span>{shipment.origin.city.clone()}</span>
                    <span>{format!("{}%", format_decimal(progress))}</span>
                    <span>{shipment.destination.city.clone()}</span>
                </div>
                <ProgressBar value=progress />
                <div class="grid grid-cols-3 gap-4 text-center text-sm">
                    <div>
                        <div class="font-bold">
                            {move || Channel::Speed.display(readings.with(|readings| readings.speed))}
                        </div>
                        <div class="text-gray-600">"Current Speed"</div>
                    </div>
                    <div>
                        <div class="font-bold">{format!("{} km", format_thousands(traveled_km))}</div>
                        <div class="text-gray-600">"Traveled"</div>
                    </div>
                    <div>
                        <div class="font-bold">{format!("{} km", format_thousands(remaining_km))}</div>
                        <div class="text-gray-600">"Remaining"</div>
                    </div>
                </div>
                <RouteMap shipment=shipment.clone() />
            </article>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {Channel::ALL
                    .into_iter()
                    .map(|channel| {
                        view! {
                            <ChannelCard
                                channel
                                readings
                                trends
                                is_selected=Signal::derive(move || selected_channel.get() == Some(channel))
                                on_select=Callback::new(move |()| {
                                    set_selected_channel.update(|selected| {
                                        *selected = if *selected == Some(channel) { None } else { Some(channel) };
                                    });
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                selected_channel
                    .get()
                    .map(|channel| {
                        view! {
                            <ChannelDetails
                                channel
                                readings
                                previous
                                on_close=Callback::new(move |()| set_selected_channel.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn JourneyProgress(stages: [JourneyStage; 3]) -> impl IntoView {
    view! {
        <article>
            <h4>"🧭 Journey"</h4>
            <ol class="grid grid-cols-3 gap-4">
                {stages
                    .into_iter()
                    .map(|stage| {
                        let class = match stage.status {
                            StageStatus::Completed => "text-green-600",
                            StageStatus::Active => "text-blue-600 font-semibold",
                            StageStatus::Pending => "text-gray-400",
                        };

                        view! {
                            <li class=class>
                                <div class="text-2xl">{stage.icon}</div>
                                <div>{stage.title}</div>
                                <div class="text-xs">{stage.description}</div>
                                <div class="text-xs">"📍 " {stage.place}</div>
                                <span class="badge badge-outline">{stage.status.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </article>
    }
}

#[component]
fn ChannelCard(
    channel: Channel,
    readings: Signal<Readings>,
    trends: Signal<Trends>,
    is_selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let value = create_memo(move |_| readings.with(|readings| readings[channel]));
    let trend = move || trends.with(|trends| trends[channel]);

    view! {
        <article class="cursor-pointer" class:ring-2=move || is_selected.get() on:click=move |_| on_select.call(())>
            <header class="flex items-center justify-between">
                <span>{channel.icon()} " " {channel.label()}</span>
                <span class=move || trend().class()>{move || trend().icon()}</span>
            </header>
            <div class=move || format!("text-2xl font-bold {}", channel.level(value.get()).class())>
                {move || channel.display(value.get())}
            </div>
        </article>
    }
}

#[component]
fn ChannelDetails(
    channel: Channel,
    readings: Signal<Readings>,
    previous: Signal<Readings>,
    on_close: Callback<()>,
) -> impl IntoView {
    let spec = channel.spec();
    let current = move || readings.with(|readings| readings[channel]);
    let before = move || previous.with(|previous| previous[channel]);

    view! {
        <article>
            <header class="flex items-center justify-between">
                <h4>{channel.icon()} " " {channel.label()} " details"</h4>
                <button class="outline" on:click=move |_| on_close.call(())>"✕"</button>
            </header>
            <dl class="grid grid-cols-2 gap-2 text-sm">
                <dt>"Current"</dt>
                <dd class=move || channel.level(current()).class()>{move || channel.display(current())}</dd>
                <dt>"Previous"</dt>
                <dd>{move || channel.display(before())}</dd>
                <dt>"Change"</dt>
                <dd>{move || format!("{:+.2}{}", current() - before(), channel.unit())}</dd>
                <dt>"Range"</dt>
                <dd>{format!("{} to {}", channel.display(spec.min), channel.display(spec.max))}</dd>
            </dl>
        </article>
    }
}
