pub mod severity;

pub use severity::{is_enabled, is_enabled_raw, ParseSeverityError, Severity, SeverityInput};
