use std::time::{Duration, Instant};

use rand::Rng;
use time::OffsetDateTime;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep};

use bantaybot_mock::simulate::TelemetrySimulator;

use crate::dashboard::{DashboardController, DeviceCommand, ScreenState, Tab};

/// User-originated screen events, delivered over the action channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SelectTab(Tab),
    OpenAlertHistory,
    CloseAlertHistory,
    Command(DeviceCommand),
    /// Pull-to-refresh gesture.
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenTimings {
    /// Cadence of the recurring snapshot tick.
    pub tick_interval: Duration,
    /// Artificial latency between the refresh gesture and the fresh data.
    pub refresh_delay: Duration,
}

impl Default for ScreenTimings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(3000),
            refresh_delay: Duration::from_millis(1000),
        }
    }
}

/// A mounted monitor screen: one cooperative event loop owning all mutable
/// state, fed by the recurring tick and the action channel. Unmounting
/// aborts the loop and any in-flight refresh delay, so no callback can
/// outlive the screen.
pub struct DashboardScreen {
    actions: mpsc::Sender<UiAction>,
    state: watch::Receiver<ScreenState>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl DashboardScreen {
    pub fn mount<R>(
        timings: ScreenTimings,
        simulator: TelemetrySimulator<R>,
        controller: DashboardController<R>,
    ) -> Self
    where
        R: Rng + Send + 'static,
    {
        let (action_tx, action_rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (state_tx, state_rx) = watch::channel(controller.screen_state(Instant::now()));

        let task = tokio::spawn(drive(
            timings,
            simulator,
            controller,
            action_rx,
            shutdown_rx,
            state_tx,
        ));

        Self {
            actions: action_tx,
            state: state_rx,
            shutdown: shutdown_tx,
            task,
        }
    }

    /// Sender half for the embedding view layer.
    pub fn actions(&self) -> mpsc::Sender<UiAction> {
        self.actions.clone()
    }

    /// Latest published state; `changed()` wakes observers per event.
    pub fn state(&self) -> watch::Receiver<ScreenState> {
        self.state.clone()
    }

    pub async fn unmount(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}

async fn drive<R: Rng>(
    timings: ScreenTimings,
    mut simulator: TelemetrySimulator<R>,
    mut controller: DashboardController<R>,
    mut actions: mpsc::Receiver<UiAction>,
    mut shutdown: oneshot::Receiver<()>,
    state: watch::Sender<ScreenState>,
) {
    let (refresh_done_tx, mut refresh_done_rx) = mpsc::channel::<()>(1);
    let mut refresh_delay: Option<JoinHandle<()>> = None;

    // First tick a full interval after mount; the mount snapshot stands
    // until then.
    let mut ticker = interval_at(
        tokio::time::Instant::now() + timings.tick_interval,
        timings.tick_interval,
    );

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                if let Some(handle) = refresh_delay.take() {
                    handle.abort();
                }
                break;
            }
            _ = ticker.tick() => {
                let snapshot = simulator.generate().unwrap_or_else(|err| match err {});
                controller.apply_snapshot(snapshot, OffsetDateTime::now_utc());
            }
            Some(action) = actions.recv() => {
                match action {
                    UiAction::SelectTab(tab) => {
                        controller.select_tab(tab);
                    }
                    UiAction::OpenAlertHistory => {
                        controller.open_alert_history();
                    }
                    UiAction::CloseAlertHistory => controller.close_alert_history(),
                    UiAction::Command(command) => {
                        controller.run_command(command, Instant::now());
                    }
                    UiAction::Refresh => {
                        if controller.begin_refresh() {
                            let done = refresh_done_tx.clone();
                            let delay = timings.refresh_delay;
                            refresh_delay = Some(tokio::spawn(async move {
                                sleep(delay).await;
                                let _ = done.send(()).await;
                            }));
                        }
                    }
                }
            }
            Some(()) = refresh_done_rx.recv() => {
                refresh_delay = None;
                let snapshot = simulator.generate().unwrap_or_else(|err| match err {});
                controller.complete_refresh(snapshot, OffsetDateTime::now_utc(), Instant::now());
            }
        }

        let _ = state.send(controller.screen_state(Instant::now()));
    }

    tracing::debug!("dashboard screen unmounted");
}
