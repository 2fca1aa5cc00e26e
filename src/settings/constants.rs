/// Built-in configuration. There is no user-facing config file; these values
/// are compiled into the binary.
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "error"

# HTTP client configuration
[http]
# Per-request timeout in seconds
timeout_secs = 5
user_agent = "whatsmyip"
"#;

/// Log levels accepted by the `[log]` section.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
