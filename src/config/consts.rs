/// Logging level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Channel of the demo's default logging sink.
pub const DEFAULT_CHANNEL: &str = "my_app";
