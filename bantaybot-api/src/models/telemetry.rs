use serde::{Deserialize, Serialize};

/// One simulated set of sensor readings. A new snapshot replaces the
/// previous one wholesale; fields are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Air temperature in Celsius (20.0-35.0, one decimal)
    pub temperature: f64,
    /// Relative humidity percentage (40.0-80.0, one decimal)
    pub humidity: f64,
    /// Soil moisture percentage (20.0-80.0, one decimal)
    pub soil_moisture: f64,
    /// Whether the PIR sensor reports movement
    pub motion_detected: bool,
    /// Ultrasonic distance to the nearest obstacle in centimeters (50-350)
    pub distance_cm: u16,
    /// Battery charge percentage (70-100)
    pub battery_level: u8,
    /// Solar panel output in volts (12.0-14.0, one decimal)
    pub solar_voltage: f64,
    /// WiFi signal strength in bars (1-4)
    pub wifi_strength: u8,
}
