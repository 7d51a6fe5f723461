use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use bantaybot_app::content;
use bantaybot_app::dashboard::{DashboardController, Tab};
use bantaybot_app::screen::DashboardScreen;
use bantaybot_app::settings::Settings;
use bantaybot_mock::simulate::{SimulatorConfig, TelemetrySimulator};

#[tokio::main]
async fn main() {
    let settings = Arc::new(Settings::new().expect("Failed to load settings."));

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    let config = SimulatorConfig::from_profile(&settings.simulator.profile).unwrap_or_else(|| {
        tracing::warn!(
            "unknown simulator profile {:?}, falling back to standard",
            settings.simulator.profile
        );
        SimulatorConfig::default()
    });

    let mut simulator = TelemetrySimulator::new(config, StdRng::from_os_rng());
    let initial = simulator.generate().unwrap_or_else(|err| match err {});
    let controller = DashboardController::new(
        settings.dashboard_config(),
        initial,
        StdRng::from_os_rng(),
    );

    for tab in Tab::ALL {
        tracing::info!("{}: {}", tab.label(), content::tab_summary(tab));
    }

    let screen = DashboardScreen::mount(settings.screen_timings(), simulator, controller);
    let mut state = screen.state();

    tracing::info!("dashboard mounted, Ctrl-C to stop");
    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }

                let state = state.borrow().clone();
                tracing::info!(
                    "tab={} motion={} soil={} battery={} notifications={} refreshing={} toast={:?}",
                    state.active_tab.key(),
                    state.view.motion_status,
                    state.view.soil_status,
                    state.view.battery_label,
                    state.notification_count,
                    state.refreshing,
                    state.toast,
                );
                match serde_json::to_string(&state.view) {
                    Ok(payload) => tracing::debug!("view: {}", payload),
                    Err(err) => tracing::error!("serialize view: {}", err),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    screen.unmount().await;
}
