use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

use super::SensorSnapshot;

/// Security reading derived from the motion sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionStatus {
    Normal,
    Alert,
}

impl MotionStatus {
    pub fn from_motion(motion_detected: bool) -> Self {
        if motion_detected {
            MotionStatus::Alert
        } else {
            MotionStatus::Normal
        }
    }

    /// Headline of the security card.
    pub fn headline(&self) -> &'static str {
        match self {
            MotionStatus::Normal => "ALL CLEAR",
            MotionStatus::Alert => "INTRUSION DETECTED",
        }
    }

    /// Short badge text next to the headline.
    pub fn badge(&self) -> &'static str {
        match self {
            MotionStatus::Normal => "SAFE",
            MotionStatus::Alert => "ALERT",
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionStatus::Normal => write!(f, "normal"),
            MotionStatus::Alert => write!(f, "alert"),
        }
    }
}

/// Soil moisture classification against the 30-70% optimal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilStatus {
    TooDry,
    Optimal,
    TooWet,
}

impl SoilStatus {
    pub fn classify(soil_moisture: f64) -> Self {
        if soil_moisture < 30.0 {
            SoilStatus::TooDry
        } else if soil_moisture > 70.0 {
            SoilStatus::TooWet
        } else {
            SoilStatus::Optimal
        }
    }
}

impl fmt::Display for SoilStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilStatus::TooDry => write!(f, "Too Dry"),
            SoilStatus::Optimal => write!(f, "Optimal"),
            SoilStatus::TooWet => write!(f, "Too Wet"),
        }
    }
}

/// Display-ready values computed from one snapshot. Fill values are bar
/// widths in percent (0-100); labels carry the unit formatting the cards
/// print verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub motion_status: MotionStatus,
    pub soil_status: SoilStatus,
    pub alert_banner_visible: bool,
    pub temperature_fill: f64,
    pub humidity_fill: f64,
    pub soil_fill: f64,
    pub battery_fill: f64,
    pub wifi_fill: f64,
    pub temperature_label: String,
    pub humidity_label: String,
    pub soil_label: String,
    pub solar_label: String,
    pub battery_label: String,
    pub wifi_label: String,
    pub distance_label: String,
}

impl DashboardView {
    /// Derive the display state for one snapshot. Total today; the `Result`
    /// mirrors the generation side of the interface.
    pub fn derive(snapshot: &SensorSnapshot) -> Result<Self> {
        let motion_status = MotionStatus::from_motion(snapshot.motion_detected);

        Ok(Self {
            motion_status,
            soil_status: SoilStatus::classify(snapshot.soil_moisture),
            alert_banner_visible: motion_status == MotionStatus::Alert,
            temperature_fill: (snapshot.temperature * 2.5).min(100.0),
            humidity_fill: snapshot.humidity,
            soil_fill: snapshot.soil_moisture,
            battery_fill: f64::from(snapshot.battery_level),
            wifi_fill: f64::from(snapshot.wifi_strength) * 25.0,
            temperature_label: format!("{:.1}°C", snapshot.temperature),
            humidity_label: format!("{:.1}%", snapshot.humidity),
            soil_label: format!("{:.1}%", snapshot.soil_moisture),
            solar_label: format!("{:.1}V", snapshot.solar_voltage),
            battery_label: format!("{}%", snapshot.battery_level),
            wifi_label: format!("{}/4", snapshot.wifi_strength),
            distance_label: format!("{}cm", snapshot.distance_cm),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SensorSnapshot {
        SensorSnapshot {
            temperature: 25.7,
            humidity: 69.7,
            soil_moisture: 32.2,
            motion_detected: false,
            distance_cm: 150,
            battery_level: 84,
            solar_voltage: 13.0,
            wifi_strength: 2,
        }
    }

    #[test]
    fn test_soil_status_boundaries() {
        assert_eq!(SoilStatus::classify(29.9), SoilStatus::TooDry);
        assert_eq!(SoilStatus::classify(30.0), SoilStatus::Optimal);
        assert_eq!(SoilStatus::classify(70.0), SoilStatus::Optimal);
        assert_eq!(SoilStatus::classify(70.1), SoilStatus::TooWet);

        assert_eq!(SoilStatus::TooDry.to_string(), "Too Dry");
        assert_eq!(SoilStatus::Optimal.to_string(), "Optimal");
        assert_eq!(SoilStatus::TooWet.to_string(), "Too Wet");
    }

    #[test]
    fn test_temperature_fill_clamps_at_hundred() {
        let mut sample = snapshot();

        sample.temperature = 39.0;
        let view = DashboardView::derive(&sample).unwrap();
        assert_eq!(view.temperature_fill, 97.5);

        sample.temperature = 40.0;
        let view = DashboardView::derive(&sample).unwrap();
        assert_eq!(view.temperature_fill, 100.0);

        sample.temperature = 45.0;
        let view = DashboardView::derive(&sample).unwrap();
        assert_eq!(view.temperature_fill, 100.0);
    }

    #[test]
    fn test_intrusion_scenario() {
        let sample = SensorSnapshot {
            temperature: 32.1,
            humidity: 75.0,
            soil_moisture: 25.0,
            motion_detected: true,
            distance_cm: 80,
            battery_level: 84,
            solar_voltage: 13.0,
            wifi_strength: 2,
        };

        let view = DashboardView::derive(&sample).unwrap();
        assert_eq!(view.soil_status, SoilStatus::TooDry);
        assert_eq!(view.motion_status, MotionStatus::Alert);
        assert_eq!(view.motion_status.to_string(), "alert");
        assert!(view.alert_banner_visible);
        assert_eq!(view.distance_label, "80cm");
        assert_eq!(view.motion_status.headline(), "INTRUSION DETECTED");
        assert_eq!(view.motion_status.badge(), "ALERT");
    }

    #[test]
    fn test_percentage_gauges_pass_through() {
        let view = DashboardView::derive(&snapshot()).unwrap();
        assert_eq!(view.humidity_fill, 69.7);
        assert_eq!(view.soil_fill, 32.2);
        assert_eq!(view.battery_fill, 84.0);
        assert_eq!(view.wifi_fill, 50.0);
        assert!(!view.alert_banner_visible);
        assert_eq!(view.motion_status.to_string(), "normal");
    }

    #[test]
    fn test_display_labels_carry_units() {
        let view = DashboardView::derive(&snapshot()).unwrap();
        assert_eq!(view.temperature_label, "25.7°C");
        assert_eq!(view.humidity_label, "69.7%");
        assert_eq!(view.soil_label, "32.2%");
        assert_eq!(view.solar_label, "13.0V");
        assert_eq!(view.battery_label, "84%");
        assert_eq!(view.wifi_label, "2/4");
        assert_eq!(view.distance_label, "150cm");
    }
}
