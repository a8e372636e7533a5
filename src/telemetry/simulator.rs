use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SimulatorConfig;

use super::types::{Channel, Readings, Trend, Trends};

const SIGNAL_REFRESH_BOOST: f64 = 10.0;

/// Source of the per tick perturbation applied to each channel
pub trait DeltaSource {
    /// A delta expected to lie within `[low, high]`
    fn delta(&mut self, channel: Channel, low: f64, high: f64) -> f64;
}

pub struct RandomDeltas {
    rng: SmallRng,
}

impl RandomDeltas {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl DeltaSource for RandomDeltas {
    fn delta(&mut self, _channel: Channel, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }

        self.rng.gen_range(low..high)
    }
}

pub struct TelemetrySimulator<D> {
    source: D,
    readings: Readings,
    previous: Readings,
    trends: Trends,
    running: bool,
    ticks: u64,
}

impl<D: DeltaSource> TelemetrySimulator<D> {
    pub fn new(source: D) -> Self {
        Self::with_readings(source, Readings::default())
    }

    pub fn with_readings(source: D, readings: Readings) -> Self {
        Self {
            source,
            readings,
            previous: readings,
            trends: Trends::default(),
            running: false,
            ticks: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Starts or stops according to the live toggle, returns whether it now runs
    pub fn follow_live(&mut self, config: SimulatorConfig, is_live: bool) -> bool {
        if config.runs_while(is_live) {
            self.start();
        } else {
            self.stop();
        }
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn readings(&self) -> Readings {
        self.readings
    }

    pub fn previous(&self) -> Readings {
        self.previous
    }

    pub fn trends(&self) -> Trends {
        self.trends
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances every channel once, returns false when stopped
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.previous = self.readings;

        for channel in Channel::ALL {
            let spec = channel.spec();
            let (low, high) = spec.delta_bounds();
            let delta = self.source.delta(channel, low, high);

            let previous = self.previous[channel];
            let next = spec.apply(previous, delta);

            self.readings[channel] = next;
            self.trends[channel] = Trend::between(previous, next);
        }

        self.ticks += 1;
        debug!(ticks = self.ticks, "telemetry tick");

        true
    }

    /// Manual reading of the signal strength, which can only improve it
    pub fn refresh_signal(&mut self) {
        let boost = self
            .source
            .delta(Channel::Signal, 0.0, SIGNAL_REFRESH_BOOST)
            .abs();

        let spec = Channel::Signal.spec();
        let previous = self.readings.signal;
        let next = (previous + boost).clamp(spec.min, spec.max);

        self.previous.signal = previous;
        self.readings.signal = next;
        self.trends[Channel::Signal] = Trend::between(previous, next);

        debug!(previous, next, "signal refreshed");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use super::{DeltaSource, RandomDeltas, TelemetrySimulator};
    use crate::config::SimulatorConfig;
    use crate::telemetry::types::{Channel, Readings, Trend};

    /// Replays queued deltas per channel, zero once a queue runs dry
    #[derive(Default)]
    struct ScriptedDeltas(HashMap<Channel, VecDeque<f64>>);

    impl ScriptedDeltas {
        fn with(mut self, channel: Channel, deltas: &[f64]) -> Self {
            self.0.entry(channel).or_default().extend(deltas);
            self
        }
    }

    impl DeltaSource for ScriptedDeltas {
        fn delta(&mut self, channel: Channel, _low: f64, _high: f64) -> f64 {
            self.0
                .get_mut(&channel)
                .and_then(VecDeque::pop_front)
                .unwrap_or(0.0)
        }
    }

    fn running<D: DeltaSource>(simulator: TelemetrySimulator<D>) -> TelemetrySimulator<D> {
        let mut simulator = simulator;
        simulator.start();
        simulator
    }

    #[test]
    fn fuel_drops_by_the_drawn_delta() {
        let deltas = ScriptedDeltas::default().with(Channel::Fuel, &[-0.3]);
        let mut simulator = running(TelemetrySimulator::new(deltas));

        assert!(simulator.tick());

        assert!((simulator.readings().fuel - 77.7).abs() < 1e-9);
        assert_eq!(simulator.trends()[Channel::Fuel], Trend::Down);
    }

    #[test]
    fn signal_is_clamped_to_its_maximum() {
        let readings = Readings {
            signal: 98.0,
            ..Readings::default()
        };
        let deltas = ScriptedDeltas::default().with(Channel::Signal, &[5.0]);
        let mut simulator = running(TelemetrySimulator::with_readings(deltas, readings));

        simulator.tick();

        assert!((simulator.readings().signal - 100.0).abs() < f64::EPSILON);
        assert_eq!(simulator.trends()[Channel::Signal], Trend::Up);
    }

    #[test]
    fn clamped_value_at_the_bound_is_stable() {
        let readings = Readings {
            humidity: 100.0,
            ..Readings::default()
        };
        let deltas = ScriptedDeltas::default().with(Channel::Humidity, &[2.0]);
        let mut simulator = running(TelemetrySimulator::with_readings(deltas, readings));

        simulator.tick();

        assert!((simulator.readings().humidity - 100.0).abs() < f64::EPSILON);
        assert_eq!(simulator.trends()[Channel::Humidity], Trend::Stable);
    }

    #[test]
    fn fuel_never_increases_even_with_a_positive_draw() {
        let deltas = ScriptedDeltas::default().with(Channel::Fuel, &[0.4, 3.0]);
        let mut simulator = running(TelemetrySimulator::new(deltas));

        simulator.tick();
        let after_first = simulator.readings().fuel;
        simulator.tick();

        assert!(after_first < 78.0);
        assert!(simulator.readings().fuel < after_first);
    }

    #[test]
    fn zero_delta_is_stable() {
        let mut simulator = running(TelemetrySimulator::new(ScriptedDeltas::default()));

        simulator.tick();

        assert_eq!(simulator.readings(), Readings::default());
        for channel in Channel::ALL {
            assert_eq!(simulator.trends()[channel], Trend::Stable);
        }
    }

    #[test]
    fn stopped_simulator_does_not_move() {
        let deltas = ScriptedDeltas::default().with(Channel::Speed, &[4.0]);
        let mut simulator = TelemetrySimulator::new(deltas);

        assert!(!simulator.is_running());
        assert!(!simulator.tick());
        assert_eq!(simulator.readings(), Readings::default());
        assert_eq!(simulator.ticks(), 0);

        simulator.start();
        assert!(simulator.tick());
        assert!((simulator.readings().speed - 69.0).abs() < 1e-9);

        simulator.stop();
        assert!(!simulator.tick());
        assert_eq!(simulator.ticks(), 1);
    }

    #[test]
    fn paused_toggle_keeps_ticking_by_default() {
        let deltas = ScriptedDeltas::default().with(Channel::Speed, &[4.0]);
        let mut simulator = running(TelemetrySimulator::new(deltas));

        assert!(simulator.follow_live(SimulatorConfig::default(), false));
        assert!(simulator.tick());
        assert!((simulator.readings().speed - 69.0).abs() < 1e-9);
    }

    #[test]
    fn paused_toggle_freezes_readings_when_configured() {
        let config = SimulatorConfig {
            pause_halts_updates: true,
            ..SimulatorConfig::default()
        };
        let deltas = ScriptedDeltas::default().with(Channel::Speed, &[4.0, -2.0]);
        let mut simulator = running(TelemetrySimulator::new(deltas));

        assert!(!simulator.follow_live(config, false));
        assert!(!simulator.tick());
        assert_eq!(simulator.readings(), Readings::default());

        assert!(simulator.follow_live(config, true));
        assert!(simulator.tick());
        assert!((simulator.readings().speed - 69.0).abs() < 1e-9);
    }

    #[test]
    fn random_ticks_keep_invariants() {
        let mut simulator = running(TelemetrySimulator::new(RandomDeltas::seeded(7)));

        for _ in 0..5_000 {
            let before = simulator.readings();
            assert!(simulator.tick());
            let after = simulator.readings();

            assert_eq!(simulator.previous(), before);
            assert!(after.fuel <= before.fuel);

            for channel in Channel::ALL {
                let spec = channel.spec();
                let value = after[channel];
                assert!(spec.min <= value && value <= spec.max, "{channel:?}={value}");
                assert_eq!(
                    simulator.trends()[channel],
                    Trend::between(before[channel], value),
                    "{channel:?}"
                );
            }
        }

        assert_eq!(simulator.ticks(), 5_000);
    }

    #[test]
    fn seeded_simulators_agree() {
        let mut first = running(TelemetrySimulator::new(RandomDeltas::seeded(42)));
        let mut second = running(TelemetrySimulator::new(RandomDeltas::seeded(42)));

        for _ in 0..20 {
            first.tick();
            second.tick();
        }

        assert_eq!(first.readings(), second.readings());
    }

    #[test]
    fn refresh_only_improves_signal() {
        let readings = Readings {
            signal: 60.0,
            ..Readings::default()
        };
        let deltas = ScriptedDeltas::default().with(Channel::Signal, &[-4.0, 80.0]);
        let mut simulator = TelemetrySimulator::with_readings(deltas, readings);

        simulator.refresh_signal();
        assert!((simulator.readings().signal - 64.0).abs() < 1e-9);
        assert_eq!(simulator.trends()[Channel::Signal], Trend::Up);

        simulator.refresh_signal();
        assert!((simulator.readings().signal - 100.0).abs() < f64::EPSILON);
        assert_eq!(simulator.readings().fuel, Readings::default().fuel);
    }
}
