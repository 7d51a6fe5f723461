use serde::{Deserialize, Serialize};

/// Sensor domain an alert originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Motion,
    Moisture,
    Battery,
    Temperature,
}

/// Severity bucket of an alert entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

/// One row of the alert-history feed opened by the notification bell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
    /// Relative age shown next to the entry, e.g. "2 min ago"
    pub age: String,
    pub severity: AlertSeverity,
}

impl Alert {
    fn new(id: u32, kind: AlertKind, message: &str, age: &str, severity: AlertSeverity) -> Self {
        Self {
            id,
            kind,
            message: message.to_string(),
            age: age.to_string(),
            severity,
        }
    }

    /// Canned feed shown by the monitor. A live device would stream these;
    /// the simulator build ships a fixed set of representative entries.
    pub fn sample_feed() -> Vec<Alert> {
        vec![
            Alert::new(
                1,
                AlertKind::Motion,
                "Motion detected in sector A",
                "2 min ago",
                AlertSeverity::High,
            ),
            Alert::new(
                2,
                AlertKind::Moisture,
                "Soil moisture below threshold",
                "15 min ago",
                AlertSeverity::Medium,
            ),
            Alert::new(
                3,
                AlertKind::Battery,
                "Battery level at 25%",
                "1 hour ago",
                AlertSeverity::Low,
            ),
            Alert::new(
                4,
                AlertKind::Temperature,
                "High temperature alert",
                "2 hours ago",
                AlertSeverity::Medium,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_feed_shape() {
        let feed = Alert::sample_feed();
        assert_eq!(feed.len(), 4);
        assert_eq!(feed[0].kind, AlertKind::Motion);
        assert_eq!(feed[0].severity, AlertSeverity::High);
        assert!(feed.iter().all(|alert| !alert.message.is_empty()));
    }
}
