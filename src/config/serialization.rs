//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# showcase configuration

# Route opened on launch: /, /demo/buttons, /demo/dialog, /demo/form,
# /demo/data-display, /demo/fragments, /demo/sidebar
start_route = "{start_route}"

# Start in dark mode (toggle at runtime with 'd')
dark_mode = {dark_mode}

# How long the "Copied!" indicator stays up, in milliseconds
copy_feedback_ms = {copy_feedback_ms}

# UI tick interval in milliseconds
tick_rate_ms = {tick_rate_ms}

# Show the logs strip on launch (toggle at runtime with 'L')
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            start_route = self.start_route,
            dark_mode = self.dark_mode,
            copy_feedback_ms = self.copy_feedback_ms,
            tick_rate_ms = self.tick_rate_ms,
            show_logs = self.show_logs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            // Forward slashes keep Windows paths valid inside TOML basic strings
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
