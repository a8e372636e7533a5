use tracing::Level;

pub const LOG_LEVEL: Level = Level::INFO;

pub const ROLE_SELECTOR_PATH: &str = "/role-selector";

pub const TELEMETRY_TICK_MS: u64 = 2_000;
pub const CLOCK_TICK_MS: u64 = 1_000;
pub const ROLE_SELECT_DELAY_MS: f64 = 1_000.0;
pub const SCENE_LOAD_TIMEOUT_MS: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub tick_ms: u64,
    /// Fixed seed for the delta generator, a time based seed is used otherwise
    pub seed: Option<u64>,
    /// When false, the "paused" toggle only affects the label and the readings keep moving
    pub pause_halts_updates: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_ms: TELEMETRY_TICK_MS,
            seed: None,
            pause_halts_updates: false,
        }
    }
}

impl SimulatorConfig {
    /// Whether the simulator keeps ticking for the given live toggle
    pub fn runs_while(self, is_live: bool) -> bool {
        is_live || !self.pause_halts_updates
    }
}
