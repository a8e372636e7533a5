use chrono::{DateTime, Local};
use leptos::{
    create_effect, create_rw_signal, create_signal, on_cleanup, Callback, Signal, SignalGet,
    SignalSet, SignalUpdate, SignalUpdateUntracked, SignalWith, WriteSignal,
};
use leptos_use::{use_interval_fn, utils::Pausable};
use tracing::{debug, info};

use crate::config::{SimulatorConfig, CLOCK_TICK_MS};

use super::simulator::{RandomDeltas, TelemetrySimulator};
use super::types::{Readings, Trends};

pub struct CreateTelemetryReturn {
    pub set_live: WriteSignal<bool>,
    pub refresh: Callback<()>,

    pub readings: Signal<Readings>,
    pub previous: Signal<Readings>,
    pub trends: Signal<Trends>,
    pub ticks: Signal<u64>,
    pub now: Signal<DateTime<Local>>,
    pub is_live: Signal<bool>,
    pub is_ticking: Signal<bool>,
}

/// Runs a telemetry simulator for as long as the calling view is mounted
pub fn create_telemetry(config: SimulatorConfig) -> CreateTelemetryReturn {
    let seed = config.seed.unwrap_or_else(time_seed);
    info!(seed, tick_ms = config.tick_ms, "starting telemetry simulator");

    let simulator = create_rw_signal(TelemetrySimulator::new(RandomDeltas::seeded(seed)));
    simulator.update(TelemetrySimulator::start);

    let Pausable {
        pause,
        resume,
        is_active: is_ticking,
    } = use_interval_fn(
        move || {
            simulator.update(|simulator| {
                simulator.tick();
            });
        },
        config.tick_ms,
    );

    let (now, set_now) = create_signal(Local::now());
    use_interval_fn(move || set_now.set(Local::now()), CLOCK_TICK_MS);

    let (is_live, set_live) = create_signal(true);

    create_effect(move |_| {
        let is_live = is_live.get();
        let is_running = simulator
            .try_update(|simulator| simulator.follow_live(config, is_live))
            .unwrap_or(false);

        if is_running {
            resume();
        } else {
            pause();
        }
    });

    on_cleanup(move || {
        simulator.try_update_untracked(|simulator| {
            if simulator.is_running() {
                simulator.stop();
                debug!(ticks = simulator.ticks(), "telemetry simulator stopped");
            }
        });
    });

    let refresh = Callback::new(move |()| simulator.update(TelemetrySimulator::refresh_signal));

    let readings = move || simulator.with(TelemetrySimulator::readings);
    let previous = move || simulator.with(TelemetrySimulator::previous);
    let trends = move || simulator.with(TelemetrySimulator::trends);
    let ticks = move || simulator.with(TelemetrySimulator::ticks);

    CreateTelemetryReturn {
        set_live,
        refresh,

        readings: readings.into(),
        previous: previous.into(),
        trends: trends.into(),
        ticks: ticks.into(),
        now: now.into(),
        is_live: is_live.into(),
        is_ticking,
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn time_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    millis ^ (jitter << 32)
}
