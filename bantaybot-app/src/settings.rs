use std::error::Error;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardConfig;
use crate::screen::ScreenTimings;
use crate::toast::ToastTimings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulator {
    pub profile: String,
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub refresh_delay_ms: u64,
    pub toast_visible_ms: u64,
    pub toast_fade_ms: u64,
    pub notify_probability: f64,
    pub initial_notifications: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub simulator: Simulator,
    pub dashboard: Dashboard,
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

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            notify_probability: self.dashboard.notify_probability,
            initial_notifications: self.dashboard.initial_notifications,
            toast: ToastTimings {
                visible: Duration::from_millis(self.dashboard.toast_visible_ms),
                fade: Duration::from_millis(self.dashboard.toast_fade_ms),
            },
        }
    }

    pub fn screen_timings(&self) -> ScreenTimings {
        ScreenTimings {
            tick_interval: Duration::from_millis(self.simulator.tick_interval_ms),
            refresh_delay: Duration::from_millis(self.dashboard.refresh_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_maps_to_runtime_values() {
        let settings = Settings::new().unwrap();

        let timings = settings.screen_timings();
        assert_eq!(timings.tick_interval, Duration::from_millis(3000));
        assert_eq!(timings.refresh_delay, Duration::from_millis(1000));

        let config = settings.dashboard_config();
        assert_eq!(config.notify_probability, 0.5);
        assert_eq!(config.initial_notifications, 5);
        assert_eq!(config.toast.visible, Duration::from_millis(2200));
        assert_eq!(config.toast.fade, Duration::from_millis(300));
    }
}
