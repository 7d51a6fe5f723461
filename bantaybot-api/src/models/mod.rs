mod alert;
mod dashboard;
mod telemetry;

pub use alert::*;
pub use dashboard::*;
pub use telemetry::*;
