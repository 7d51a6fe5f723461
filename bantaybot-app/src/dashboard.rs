use std::time::Instant;

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use bantaybot_api::models::{Alert, DashboardView, SensorSnapshot};

use crate::toast::{Toast, ToastTimings};

/// Toast text confirming a completed manual refresh.
pub const REFRESH_ACK: &str = "✓ Data refreshed successfully";

/// Bottom-navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Dashboard,
    Analytics,
    Controls,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Analytics, Tab::Controls, Tab::Settings];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Analytics => "analytics",
            Tab::Controls => "controls",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Analytics => "Analytics",
            Tab::Controls => "Controls",
            Tab::Settings => "Settings",
        }
    }
}

/// Inert device actions. Each one acknowledges with a toast and changes no
/// device state; there is no device on the other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceCommand {
    MoveArms,
    SoundAlert,
    EmergencyMode,
    CheckUpdates,
    RestartDevice,
    FactoryReset,
    /// The RESPOND button on the intrusion banner.
    Respond,
}

impl DeviceCommand {
    pub fn ack_message(&self) -> &'static str {
        match self {
            DeviceCommand::MoveArms => "🦾 Arm movement activated",
            DeviceCommand::SoundAlert => "🔊 Sound alert activated",
            DeviceCommand::EmergencyMode => "🚨 Emergency mode activated - All systems active!",
            DeviceCommand::CheckUpdates => "📡 Checking for firmware updates...",
            DeviceCommand::RestartDevice => "🔄 System restart initiated...",
            DeviceCommand::FactoryReset => "⚠️ Factory reset requires confirmation",
            DeviceCommand::Respond => "🚨 Responding to intrusion!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardConfig {
    /// Chance that a motion snapshot bumps the notification badge. An
    /// explicit simulated-event probability, not ambient randomness.
    pub notify_probability: f64,
    /// Badge value at mount.
    pub initial_notifications: u32,
    pub toast: ToastTimings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            notify_probability: 0.5,
            initial_notifications: 5,
            toast: ToastTimings::default(),
        }
    }
}

/// Screen-local state. Created with fixed defaults at mount and advanced by
/// discrete events only.
#[derive(Debug, Clone)]
pub struct UiState {
    pub active_tab: Tab,
    pub notification_count: u32,
    pub toast: Toast,
    pub alert_history_open: bool,
    pub refreshing: bool,
    pub last_update: Option<OffsetDateTime>,
}

impl UiState {
    fn new(config: &DashboardConfig) -> Self {
        Self {
            active_tab: Tab::Dashboard,
            notification_count: config.initial_notifications,
            toast: Toast::new(config.toast),
            alert_history_open: false,
            refreshing: false,
            last_update: None,
        }
    }
}

/// Condensed screen state published to observers after every event.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub active_tab: Tab,
    pub notification_count: u32,
    pub refreshing: bool,
    pub alert_history_open: bool,
    pub toast: Option<String>,
    pub last_update: Option<OffsetDateTime>,
    pub view: DashboardView,
}

/// Owns the UI state and the current snapshot, and applies the discrete
/// events the screen can produce. Single-owner by construction; the event
/// loop in [`screen`](crate::screen) is the only writer.
pub struct DashboardController<R: Rng> {
    snapshot: SensorSnapshot,
    view: DashboardView,
    state: UiState,
    notify_chance: Bernoulli,
    rng: R,
}

impl<R: Rng> DashboardController<R> {
    pub fn new(config: DashboardConfig, initial: SensorSnapshot, rng: R) -> Self {
        let notify_chance = Bernoulli::new(config.notify_probability.clamp(0.0, 1.0))
            .expect("probability clamped to [0, 1]");
        let view = DashboardView::derive(&initial).unwrap_or_else(|err| match err {});

        Self {
            snapshot: initial,
            view,
            state: UiState::new(&config),
            notify_chance,
            rng,
        }
    }

    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Wholesale snapshot replacement from a tick or a completed refresh.
    /// A motion snapshot bumps the notification badge with the configured
    /// probability.
    pub fn apply_snapshot(&mut self, snapshot: SensorSnapshot, now: OffsetDateTime) {
        if snapshot.motion_detected && self.notify_chance.sample(&mut self.rng) {
            self.state.notification_count = self.state.notification_count.saturating_add(1);
        }

        self.view = DashboardView::derive(&snapshot).unwrap_or_else(|err| match err {});
        self.snapshot = snapshot;
        self.state.last_update = Some(now);
    }

    /// Returns whether the active tab changed. Reselecting the current tab
    /// is a no-op and triggers no recomputation.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.state.active_tab == tab {
            return false;
        }

        self.state.active_tab = tab;
        true
    }

    /// Opens the alert history and clears the notification badge.
    pub fn open_alert_history(&mut self) -> Vec<Alert> {
        self.state.alert_history_open = true;
        self.state.notification_count = 0;

        Alert::sample_feed()
    }

    /// Closing only dismisses the list; the badge stays wherever it is.
    pub fn close_alert_history(&mut self) {
        self.state.alert_history_open = false;
    }

    pub fn run_command(&mut self, command: DeviceCommand, now: Instant) {
        self.state.toast.show(command.ack_message(), now);
    }

    /// Marks a manual refresh as in flight. Returns false when one already
    /// is, so the gesture cannot stack.
    pub fn begin_refresh(&mut self) -> bool {
        if self.state.refreshing {
            return false;
        }

        self.state.refreshing = true;
        true
    }

    pub fn complete_refresh(
        &mut self,
        snapshot: SensorSnapshot,
        wall: OffsetDateTime,
        now: Instant,
    ) {
        self.apply_snapshot(snapshot, wall);
        self.state.refreshing = false;
        self.state.toast.show(REFRESH_ACK, now);
    }

    pub fn screen_state(&self, now: Instant) -> ScreenState {
        ScreenState {
            active_tab: self.state.active_tab,
            notification_count: self.state.notification_count,
            refreshing: self.state.refreshing,
            alert_history_open: self.state.alert_history_open,
            toast: self.state.toast.visible_message(now).map(str::to_owned),
            last_update: self.state.last_update,
            view: self.view.clone(),
        }
    }
}
