use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulator {
    /// Named motion-probability preset, resolved by
    /// [`SimulatorConfig::from_profile`](crate::simulate::SimulatorConfig::from_profile).
    pub profile: String,
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub simulator: Simulator,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use crate::simulate::SimulatorConfig;

    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.simulator.tick_interval_ms, 3000);
        assert!(SimulatorConfig::from_profile(&settings.simulator.profile).is_some());
    }
}
