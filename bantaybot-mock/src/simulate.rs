use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use bantaybot_api::Result;
use bantaybot_api::models::SensorSnapshot;

/// Motion draw probability of the production screen.
pub const STANDARD_MOTION_PROBABILITY: f64 = 0.2;
/// Motion draw probability of the legacy screen copy, kept as a preset.
pub const SENSITIVE_MOTION_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    pub motion_probability: f64,
}

impl SimulatorConfig {
    pub fn standard() -> Self {
        Self {
            motion_probability: STANDARD_MOTION_PROBABILITY,
        }
    }

    pub fn sensitive() -> Self {
        Self {
            motion_probability: SENSITIVE_MOTION_PROBABILITY,
        }
    }

    /// Resolve a named preset from the `[simulator]` settings section.
    pub fn from_profile(profile: &str) -> Option<Self> {
        match profile {
            "standard" => Some(Self::standard()),
            "sensitive" => Some(Self::sensitive()),
            _ => None,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Draws plausible-looking snapshots from an injected random source, so
/// tests can seed it and the binaries can run off OS entropy.
pub struct TelemetrySimulator<R: Rng> {
    rng: R,
    motion: Bernoulli,
}

impl<R: Rng> TelemetrySimulator<R> {
    pub fn new(config: SimulatorConfig, rng: R) -> Self {
        let motion = Bernoulli::new(config.motion_probability.clamp(0.0, 1.0))
            .expect("probability clamped to [0, 1]");

        Self { rng, motion }
    }

    /// Draw one snapshot. Cannot fail today; the `Result` keeps the
    /// signature compatible with a real sensor source.
    pub fn generate(&mut self) -> Result<SensorSnapshot> {
        Ok(SensorSnapshot {
            temperature: self.decimal_in(20.0, 35.0),
            humidity: self.decimal_in(40.0, 80.0),
            soil_moisture: self.decimal_in(20.0, 80.0),
            motion_detected: self.motion.sample(&mut self.rng),
            distance_cm: self.rng.random_range(50..=350),
            battery_level: self.rng.random_range(70..=100),
            solar_voltage: self.decimal_in(12.0, 14.0),
            wifi_strength: self.rng.random_range(1..=4),
        })
    }

    fn decimal_in(&mut self, low: f64, high: f64) -> f64 {
        round_to_one_decimal(self.rng.random_range(low..high))
    }
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn simulator(config: SimulatorConfig, seed: u64) -> TelemetrySimulator<StdRng> {
        TelemetrySimulator::new(config, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_generated_fields_stay_in_range() {
        let mut simulator = simulator(SimulatorConfig::standard(), 7);

        for _ in 0..1000 {
            let snapshot = simulator.generate().unwrap();
            assert!((20.0..=35.0).contains(&snapshot.temperature));
            assert!((40.0..=80.0).contains(&snapshot.humidity));
            assert!((20.0..=80.0).contains(&snapshot.soil_moisture));
            assert!((50..=350).contains(&snapshot.distance_cm));
            assert!((70..=100).contains(&snapshot.battery_level));
            assert!((12.0..=14.0).contains(&snapshot.solar_voltage));
            assert!((1..=4).contains(&snapshot.wifi_strength));
        }
    }

    #[test]
    fn test_decimal_fields_keep_one_decimal() {
        let mut simulator = simulator(SimulatorConfig::standard(), 11);

        for _ in 0..1000 {
            let snapshot = simulator.generate().unwrap();
            for value in [
                snapshot.temperature,
                snapshot.humidity,
                snapshot.soil_moisture,
                snapshot.solar_voltage,
            ] {
                let tenths = value * 10.0;
                assert!(
                    (tenths - tenths.round()).abs() < 1e-9,
                    "{value} has more than one decimal"
                );
            }
        }
    }

    #[test]
    fn test_profiles_resolve_by_name() {
        assert_eq!(
            SimulatorConfig::from_profile("standard"),
            Some(SimulatorConfig::standard())
        );
        assert_eq!(
            SimulatorConfig::from_profile("sensitive"),
            Some(SimulatorConfig::sensitive())
        );
        assert_eq!(SimulatorConfig::from_profile("turbo"), None);

        assert_eq!(SimulatorConfig::standard().motion_probability, 0.2);
        assert_eq!(SimulatorConfig::sensitive().motion_probability, 0.3);
    }

    #[test]
    fn test_motion_probability_extremes() {
        let mut always = simulator(
            SimulatorConfig {
                motion_probability: 1.0,
            },
            3,
        );
        let mut never = simulator(
            SimulatorConfig {
                motion_probability: 0.0,
            },
            3,
        );

        for _ in 0..100 {
            assert!(always.generate().unwrap().motion_detected);
            assert!(!never.generate().unwrap().motion_detected);
        }
    }

    #[test]
    fn test_out_of_range_probability_is_clamped() {
        let mut simulator = simulator(
            SimulatorConfig {
                motion_probability: 7.5,
            },
            5,
        );
        assert!(simulator.generate().unwrap().motion_detected);
    }
}
