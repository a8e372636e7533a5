use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Temperature,
    Humidity,
    Vibration,
    Pressure,
    Light,
    Speed,
    Fuel,
    Signal,
}

impl Channel {
    pub const ALL: [Self; 8] = [
        Self::Temperature,
        Self::Humidity,
        Self::Vibration,
        Self::Pressure,
        Self::Light,
        Self::Speed,
        Self::Fuel,
        Self::Signal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Vibration => "Vibration",
            Self::Pressure => "Pressure",
            Self::Light => "Light",
            Self::Speed => "Speed",
            Self::Fuel => "Fuel",
            Self::Signal => "Signal",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Temperature => "🌡️",
            Self::Humidity => "💧",
            Self::Vibration => "📳",
            Self::Pressure => "🧭",
            Self::Light => "☀️",
            Self::Speed => "🏎️",
            Self::Fuel => "⛽",
            Self::Signal => "📶",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity | Self::Fuel | Self::Signal => "%",
            Self::Vibration => "g",
            Self::Pressure => "hPa",
            Self::Light => "lux",
            Self::Speed => "mph",
        }
    }

    pub fn spec(self) -> ChannelSpec {
        match self {
            Self::Temperature => ChannelSpec::symmetric(1.0, -40.0, 85.0),
            Self::Humidity => ChannelSpec::symmetric(2.5, 0.0, 100.0),
            Self::Vibration => ChannelSpec::symmetric(0.05, 0.0, 10.0),
            Self::Pressure => ChannelSpec::symmetric(1.0, 870.0, 1085.0),
            Self::Light => ChannelSpec::symmetric(25.0, 0.0, 100_000.0),
            Self::Speed => ChannelSpec::symmetric(5.0, 0.0, 120.0),
            Self::Fuel => ChannelSpec {
                rule: DeltaRule::Decreasing(0.5),
                min: 0.0,
                max: 100.0,
            },
            Self::Signal => ChannelSpec::symmetric(2.5, 0.0, 100.0),
        }
    }

    pub fn display(self, value: f64) -> String {
        match self {
            Self::Vibration => format!("{value:.2}{}", self.unit()),
            Self::Fuel | Self::Signal | Self::Humidity | Self::Speed => {
                format!("{value:.0}{}", self.unit())
            }
            Self::Temperature | Self::Pressure | Self::Light => {
                format!("{value:.1}{}", self.unit())
            }
        }
    }

    pub fn level(self, value: f64) -> Level {
        match self {
            Self::Temperature if value > 30.0 => Level::Critical,
            Self::Temperature if value < 15.0 => Level::Cold,
            Self::Temperature => Level::Good,
            Self::Humidity if value > 70.0 => Level::Critical,
            Self::Humidity if value < 30.0 => Level::Warning,
            Self::Humidity => Level::Good,
            Self::Vibration if value > 0.5 => Level::Critical,
            Self::Vibration if value > 0.2 => Level::Warning,
            Self::Vibration => Level::Good,
            Self::Signal if value > 80.0 => Level::Good,
            Self::Signal if value > 50.0 => Level::Warning,
            Self::Signal => Level::Critical,
            Self::Fuel if value > 50.0 => Level::Good,
            Self::Fuel if value > 20.0 => Level::Warning,
            Self::Fuel => Level::Critical,
            Self::Pressure | Self::Light | Self::Speed => Level::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaRule {
    /// Drawn from `[-half_width, half_width]`
    Symmetric(f64),
    /// Drawn from `[-max_drop, 0]`, never positive
    Decreasing(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSpec {
    pub rule: DeltaRule,
    pub min: f64,
    pub max: f64,
}

impl ChannelSpec {
    const fn symmetric(half_width: f64, min: f64, max: f64) -> Self {
        Self {
            rule: DeltaRule::Symmetric(half_width),
            min,
            max,
        }
    }

    pub fn delta_bounds(&self) -> (f64, f64) {
        match self.rule {
            DeltaRule::Symmetric(half_width) => (-half_width, half_width),
            DeltaRule::Decreasing(max_drop) => (-max_drop, 0.0),
        }
    }

    pub fn apply(&self, value: f64, delta: f64) -> f64 {
        let delta = match self.rule {
            DeltaRule::Symmetric(_) => delta,
            DeltaRule::Decreasing(_) => -delta.abs(),
        };

        (value + delta).clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    pub temperature: f64,
    pub humidity: f64,
    pub vibration: f64,
    pub pressure: f64,
    pub light: f64,
    pub speed: f64,
    pub fuel: f64,
    pub signal: f64,
}

impl Default for Readings {
    fn default() -> Self {
        Self {
            temperature: 22.0,
            humidity: 45.0,
            vibration: 0.1,
            pressure: 1013.0,
            light: 850.0,
            speed: 65.0,
            fuel: 78.0,
            signal: 95.0,
        }
    }
}

impl Index<Channel> for Readings {
    type Output = f64;

    fn index(&self, channel: Channel) -> &f64 {
        match channel {
            Channel::Temperature => &self.temperature,
            Channel::Humidity => &self.humidity,
            Channel::Vibration => &self.vibration,
            Channel::Pressure => &self.pressure,
            Channel::Light => &self.light,
            Channel::Speed => &self.speed,
            Channel::Fuel => &self.fuel,
            Channel::Signal => &self.signal,
        }
    }
}

impl IndexMut<Channel> for Readings {
    fn index_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::Temperature => &mut self.temperature,
            Channel::Humidity => &mut self.humidity,
            Channel::Vibration => &mut self.vibration,
            Channel::Pressure => &mut self.pressure,
            Channel::Light => &mut self.light,
            Channel::Speed => &mut self.speed,
            Channel::Fuel => &mut self.fuel,
            Channel::Signal => &mut self.signal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn between(previous: f64, next: f64) -> Self {
        if next > previous {
            Self::Up
        } else if next < previous {
            Self::Down
        } else {
            Self::Stable
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Stable => "→",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "text-green-500",
            Self::Down => "text-red-500",
            Self::Stable => "text-gray-500",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trends([Trend; Channel::ALL.len()]);

impl Index<Channel> for Trends {
    type Output = Trend;

    fn index(&self, channel: Channel) -> &Trend {
        &self.0[channel as usize]
    }
}

impl IndexMut<Channel> for Trends {
    fn index_mut(&mut self, channel: Channel) -> &mut Trend {
        &mut self.0[channel as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Good,
    Warning,
    Critical,
    /// Below the comfortable band, shown apart from warnings
    Cold,
    Neutral,
}

impl Level {
    pub fn class(self) -> &'static str {
        match self {
            Self::Good => "text-green-500",
            Self::Warning => "text-yellow-500",
            Self::Critical => "text-red-500",
            Self::Cold => "text-blue-500",
            Self::Neutral => "text-gray-700",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, Level, Readings, Trend, Trends};

    #[test]
    fn trend_classification() {
        assert_eq!(Trend::between(1.0, 2.0), Trend::Up);
        assert_eq!(Trend::between(2.0, 1.0), Trend::Down);
        assert_eq!(Trend::between(2.0, 2.0), Trend::Stable);
        assert_eq!(Trend::between(f64::NAN, 2.0), Trend::Stable);
    }

    #[test]
    fn seed_readings_are_within_range() {
        let readings = Readings::default();

        for channel in Channel::ALL {
            let spec = channel.spec();
            let value = readings[channel];
            assert!(spec.min <= value && value <= spec.max, "{channel:?}={value}");
        }
    }

    #[test]
    fn decreasing_rule_ignores_sign() {
        let fuel = Channel::Fuel.spec();

        assert!((fuel.apply(78.0, -0.3) - 77.7).abs() < 1e-9);
        assert!((fuel.apply(78.0, 0.3) - 77.7).abs() < 1e-9);
        assert!(fuel.apply(0.2, -0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn trends_are_indexed_per_channel() {
        let mut trends = Trends::default();
        trends[Channel::Signal] = Trend::Up;

        assert_eq!(trends[Channel::Signal], Trend::Up);
        for channel in Channel::ALL.into_iter().filter(|c| *c != Channel::Signal) {
            assert_eq!(trends[channel], Trend::Stable);
        }
    }

    #[test]
    fn levels() {
        assert_eq!(Channel::Temperature.level(22.0), Level::Good);
        assert_eq!(Channel::Temperature.level(31.0), Level::Critical);
        assert_eq!(Channel::Temperature.level(10.0), Level::Cold);
        assert_ne!(Level::Cold.class(), Level::Warning.class());
        assert_eq!(Channel::Humidity.level(20.0), Level::Warning);
        assert_eq!(Channel::Vibration.level(0.3), Level::Warning);
        assert_eq!(Channel::Signal.level(95.0), Level::Good);
        assert_eq!(Channel::Fuel.level(15.0), Level::Critical);
        assert_eq!(Channel::Speed.level(65.0), Level::Neutral);
    }
}
