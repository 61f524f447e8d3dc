//! Configuration for the showcase
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/showcase/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by `main`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under ~/.config
pub const APP_DIR: &str = "showcase";

const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;
const DEFAULT_TICK_RATE_MS: u64 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Route opened on launch
    pub start_route: String,

    /// Start in dark mode
    pub dark_mode: bool,

    /// How long "✓ Copied!" stays up (milliseconds)
    pub copy_feedback_ms: u64,

    /// UI tick interval (milliseconds). Timers are checked on every tick.
    pub tick_rate_ms: u64,

    /// Show the logs strip on launch
    pub show_logs: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_route: crate::router::HOME.to_string(),
            dark_mode: false,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_logs: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub start_route: Option<String>,
    pub dark_mode: Option<bool>,
    pub copy_feedback_ms: Option<u64>,
    pub tick_rate_ms: Option<u64>,
    pub show_logs: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Truthy env values: "1" / "true" (any case)
fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/showcase/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR).join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A file that exists but can't be read or parsed is fatal: better to stop
    /// with a clear message than run on defaults the user didn't ask for.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `showcase config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Start route: env > file > default
        let start_route = env("SHOWCASE_ROUTE")
            .or(file.start_route)
            .unwrap_or(defaults.start_route);

        // Dark mode: env > file > default
        let dark_mode = env("SHOWCASE_DARK")
            .map(|v| env_flag(&v))
            .or(file.dark_mode)
            .unwrap_or(defaults.dark_mode);

        // Zero would make the indicator flicker or spin the loop; treat as unset
        let copy_feedback_ms = file
            .copy_feedback_ms
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.copy_feedback_ms);
        let tick_rate_ms = file
            .tick_rate_ms
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_rate_ms);

        let show_logs = file.show_logs.unwrap_or(defaults.show_logs);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            start_route,
            dark_mode,
            copy_feedback_ms,
            tick_rate_ms,
            show_logs,
            logging,
        }
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
