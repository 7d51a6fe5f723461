use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time;

use crate::settings::Settings;
use crate::simulate::{SimulatorConfig, TelemetrySimulator};

pub mod settings;
pub mod simulate;

/// Emit one simulated snapshot per tick as a JSON log line. Runs until the
/// owning task is dropped.
pub async fn run(settings: &Arc<Settings>) {
    let config = SimulatorConfig::from_profile(&settings.simulator.profile).unwrap_or_else(|| {
        tracing::warn!(
            "unknown simulator profile {:?}, falling back to standard",
            settings.simulator.profile
        );
        SimulatorConfig::default()
    });
    let mut simulator = TelemetrySimulator::new(config, StdRng::from_os_rng());

    let mut interval = time::interval(Duration::from_millis(settings.simulator.tick_interval_ms));
    loop {
        interval.tick().await;

        let snapshot = simulator.generate().unwrap_or_else(|err| match err {});
        match serde_json::to_string(&snapshot) {
            Ok(payload) => tracing::debug!("Send: {}", payload),
            Err(err) => tracing::error!("serialize snapshot: {}", err),
        }
    }
}
