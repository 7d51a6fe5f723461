//! Hardcoded presentational content for the analytics, controls and
//! settings tabs. The monitor ships these as fixed showcase data; nothing
//! here is measured.

use crate::dashboard::Tab;

/// Daily counters on the analytics tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSummary {
    pub intrusions_detected: u32,
    pub animals_scared: u32,
    pub sound_alerts: u32,
    pub uptime_percent: f64,
}

pub const PERFORMANCE_TODAY: PerformanceSummary = PerformanceSummary {
    intrusions_detected: 24,
    animals_scared: 18,
    sound_alerts: 6,
    uptime_percent: 99.2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendEntry {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ENVIRONMENTAL_TRENDS: [TrendEntry; 4] = [
    TrendEntry {
        label: "Temperature Range",
        value: "22.3°C - 32.1°C",
    },
    TrendEntry {
        label: "Average Humidity",
        value: "67.5%",
    },
    TrendEntry {
        label: "Soil Moisture Trend",
        value: "↗ Increasing",
    },
    TrendEntry {
        label: "Weather Condition",
        value: "Partly Cloudy",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyDetections {
    pub day: &'static str,
    pub count: u32,
}

pub const WEEKLY_DETECTIONS: [DailyDetections; 7] = [
    DailyDetections { day: "Mon", count: 12 },
    DailyDetections { day: "Tue", count: 8 },
    DailyDetections { day: "Wed", count: 15 },
    DailyDetections { day: "Thu", count: 7 },
    DailyDetections { day: "Fri", count: 11 },
    DailyDetections { day: "Sat", count: 9 },
    DailyDetections { day: "Sun", count: 6 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthEntry {
    pub label: &'static str,
    pub percent: u8,
}

pub const SYSTEM_HEALTH: [HealthEntry; 3] = [
    HealthEntry {
        label: "Solar Panel Efficiency",
        percent: 89,
    },
    HealthEntry {
        label: "Battery Health",
        percent: 92,
    },
    HealthEntry {
        label: "Sensor Accuracy",
        percent: 96,
    },
];

/// Switch position shown on a detection-mode card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    On,
    Auto,
    Off,
}

impl ModeSwitch {
    pub fn label(&self) -> &'static str {
        match self {
            ModeSwitch::On => "ON",
            ModeSwitch::Auto => "AUTO",
            ModeSwitch::Off => "OFF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionMode {
    pub name: &'static str,
    pub switch: ModeSwitch,
    pub description: &'static str,
}

pub const DETECTION_MODES: [DetectionMode; 3] = [
    DetectionMode {
        name: "Motion Detection",
        switch: ModeSwitch::On,
        description: "Detects movement within 5-meter range",
    },
    DetectionMode {
        name: "Sound Detection",
        switch: ModeSwitch::Auto,
        description: "Responds to animal sounds and noises",
    },
    DetectionMode {
        name: "Night Mode",
        switch: ModeSwitch::Off,
        description: "Enhanced sensitivity during nighttime",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensitivityEntry {
    pub label: &'static str,
    pub level_percent: u8,
    pub level_label: &'static str,
}

pub const SENSITIVITY: [SensitivityEntry; 3] = [
    SensitivityEntry {
        label: "Motion Sensitivity",
        level_percent: 75,
        level_label: "High",
    },
    SensitivityEntry {
        label: "Sound Sensitivity",
        level_percent: 60,
        level_label: "Medium",
    },
    SensitivityEntry {
        label: "Response Delay",
        level_percent: 30,
        level_label: "0.5s",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SCHEDULE: [ScheduleEntry; 3] = [
    ScheduleEntry {
        label: "Active Hours",
        value: "06:00 - 18:00",
    },
    ScheduleEntry {
        label: "Sleep Mode",
        value: "18:00 - 06:00",
    },
    ScheduleEntry {
        label: "Weekly Schedule",
        value: "Monday - Sunday",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingGroup {
    pub title: &'static str,
    pub items: &'static [SettingItem],
}

pub const SETTING_GROUPS: [SettingGroup; 7] = [
    SettingGroup {
        title: "Device Information",
        items: &[
            SettingItem {
                label: "Device ID",
                value: "BB-001-2024",
            },
            SettingItem {
                label: "Firmware Version",
                value: "v2.1.3",
            },
            SettingItem {
                label: "Hardware Model",
                value: "BantayBot Pro",
            },
            SettingItem {
                label: "Last Update",
                value: "Jan 15, 2025",
            },
        ],
    },
    SettingGroup {
        title: "Network Settings",
        items: &[
            SettingItem {
                label: "WiFi Status",
                value: "Connected",
            },
            SettingItem {
                label: "Network Name",
                value: "FarmNet_2.4G",
            },
            SettingItem {
                label: "Signal Strength",
                value: "-45 dBm (Excellent)",
            },
            SettingItem {
                label: "IP Address",
                value: "192.168.1.105",
            },
        ],
    },
    SettingGroup {
        title: "Power Management",
        items: &[
            SettingItem {
                label: "Solar Panel Status",
                value: "Charging",
            },
            SettingItem {
                label: "Battery Health",
                value: "92% (Good)",
            },
            SettingItem {
                label: "Power Mode",
                value: "Auto Optimize",
            },
            SettingItem {
                label: "Low Battery Alert",
                value: "25%",
            },
        ],
    },
    SettingGroup {
        title: "Sensor Configuration",
        items: &[
            SettingItem {
                label: "Motion Sensor (PIR)",
                value: "Active",
            },
            SettingItem {
                label: "Temperature Sensor",
                value: "DHT22 - OK",
            },
            SettingItem {
                label: "Humidity Sensor",
                value: "DHT22 - OK",
            },
            SettingItem {
                label: "Soil Moisture",
                value: "Capacitive - OK",
            },
            SettingItem {
                label: "Distance Sensor",
                value: "Ultrasonic - OK",
            },
        ],
    },
    SettingGroup {
        title: "Alert Settings",
        items: &[
            SettingItem {
                label: "Mobile Notifications",
                value: "Enabled",
            },
            SettingItem {
                label: "Sound Alerts",
                value: "Enabled",
            },
            SettingItem {
                label: "Alert Frequency",
                value: "Every 30 seconds",
            },
            SettingItem {
                label: "Quiet Hours",
                value: "22:00 - 06:00",
            },
        ],
    },
    SettingGroup {
        title: "Security Settings",
        items: &[
            SettingItem {
                label: "Device Password",
                value: "••••••••",
            },
            SettingItem {
                label: "Remote Access",
                value: "Enabled",
            },
            SettingItem {
                label: "Encryption",
                value: "WPA3-PSK",
            },
            SettingItem {
                label: "Auto Lock",
                value: "15 minutes",
            },
        ],
    },
    SettingGroup {
        title: "Maintenance",
        items: &[
            SettingItem {
                label: "Last Maintenance",
                value: "Jan 10, 2025",
            },
            SettingItem {
                label: "Next Service Due",
                value: "Mar 10, 2025",
            },
            SettingItem {
                label: "Total Runtime",
                value: "1,247 hours",
            },
            SettingItem {
                label: "System Status",
                value: "Healthy",
            },
        ],
    },
];

/// One-line inventory of a tab, used by the headless demo when it lists the
/// screen's destinations.
pub fn tab_summary(tab: Tab) -> String {
    match tab {
        Tab::Dashboard => "live telemetry cards, security status and motion banner".to_string(),
        Tab::Analytics => format!(
            "{} intrusions detected, {} animals scared, {} sound alerts, {:.1}% uptime",
            PERFORMANCE_TODAY.intrusions_detected,
            PERFORMANCE_TODAY.animals_scared,
            PERFORMANCE_TODAY.sound_alerts,
            PERFORMANCE_TODAY.uptime_percent,
        ),
        Tab::Controls => format!(
            "{} detection modes, {} sensitivity levels, {} schedule entries",
            DETECTION_MODES.len(),
            SENSITIVITY.len(),
            SCHEDULE.len(),
        ),
        Tab::Settings => {
            let entries: usize = SETTING_GROUPS.iter().map(|group| group.items.len()).sum();
            format!("{} setting groups, {} entries", SETTING_GROUPS.len(), entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_feed_covers_every_day() {
        assert_eq!(WEEKLY_DETECTIONS.len(), 7);
        let total: u32 = WEEKLY_DETECTIONS.iter().map(|day| day.count).sum();
        assert_eq!(total, 68);
    }

    #[test]
    fn test_every_setting_group_has_entries() {
        for group in SETTING_GROUPS {
            assert!(!group.items.is_empty(), "{} is empty", group.title);
        }
    }

    #[test]
    fn test_tab_summaries() {
        assert_eq!(
            tab_summary(Tab::Analytics),
            "24 intrusions detected, 18 animals scared, 6 sound alerts, 99.2% uptime"
        );
        assert_eq!(
            tab_summary(Tab::Controls),
            "3 detection modes, 3 sensitivity levels, 3 schedule entries"
        );
        assert_eq!(tab_summary(Tab::Settings), "7 setting groups, 29 entries");
        assert!(!tab_summary(Tab::Dashboard).is_empty());
    }
}
