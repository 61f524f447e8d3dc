// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. Subcommands run headless:
// - routes: print the route table
// - snippet: print one snippet (or its prop docs) to stdout
// - config --show/--path/--reset: configuration management

use crate::config::{Config, VERSION};
use crate::pages::PageId;
use crate::router::{self, ROUTES};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Terminal showcase of interactive widget demos
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version = VERSION)]
#[command(about = "Interactive widget showcase for the terminal", long_about = None)]
pub struct Cli {
    /// Route to open on launch (e.g. /demo/buttons)
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every route
    Routes,

    /// Print the code example for a widget
    Snippet {
        /// Page route, e.g. /demo/fragments
        path: String,

        /// Widget identifier, e.g. combobox
        id: String,

        /// Print the prop docs as JSON instead of the snippet
        #[arg(long)]
        props: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle subcommands. Returns true if one ran (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Routes => write_routes(&mut out)?,
        Commands::Snippet { path, id, props } => write_snippet(path, id, *props, &mut out)?,
        Commands::Config { show, reset, path } => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset()?;
            } else {
                println!("Usage: showcase config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
        }
    }
    Ok(true)
}

fn write_routes(out: &mut impl Write) -> Result<()> {
    for route in ROUTES {
        writeln!(out, "{:<22} {:<14} {}", route.path, route.name, route.description)?;
    }
    Ok(())
}

fn write_snippet(path: &str, id: &str, props: bool, out: &mut impl Write) -> Result<()> {
    let page_id = router::require(path)?;
    if page_id == PageId::Home {
        anyhow::bail!("The home page has no widgets; pick a /demo/... route");
    }
    let page = page_id.build();

    if props {
        let json = serde_json::to_string_pretty(page.registry.props(id))
            .context("Failed to serialize prop docs")?;
        writeln!(out, "{}", json)?;
    } else {
        if !page.registry.contains(id) {
            tracing::warn!(path, id, "identifier not in registry");
        }
        writeln!(out, "{}", page.registry.snippet_or_placeholder(id))?;
    }
    Ok(())
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("start_route = {:?}", config.start_route);
    println!("dark_mode = {}", config.dark_mode);
    println!("copy_feedback_ms = {}", config.copy_feedback_ms);
    println!("tick_rate_ms = {}", config.tick_rate_ms);
    println!("show_logs = {}", config.show_logs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::NO_EXAMPLE;

    fn run_snippet(path: &str, id: &str, props: bool) -> Result<String> {
        let mut out = Vec::new();
        write_snippet(path, id, props, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn parses_launch_flags() {
        let cli = Cli::try_parse_from(["showcase", "--route", "/demo/form", "--dark"])
            .expect("valid args");
        assert_eq!(cli.route.as_deref(), Some("/demo/form"));
        assert!(cli.dark);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_snippet_subcommand() {
        let cli = Cli::try_parse_from(["showcase", "snippet", "/demo/buttons", "sizes"])
            .expect("valid args");
        match cli.command {
            Some(Commands::Snippet { path, id, props }) => {
                assert_eq!(path, "/demo/buttons");
                assert_eq!(id, "sizes");
                assert!(!props);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn routes_lists_every_path() {
        let mut out = Vec::new();
        write_routes(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), ROUTES.len());
        assert!(text.contains("/demo/data-display"));
    }

    #[test]
    fn snippet_prints_registered_code() {
        let text = run_snippet("/demo/buttons", "sizes", false).expect("known route");
        assert!(text.contains(r#"<Button size="sm">Small</Button>"#));
    }

    #[test]
    fn snippet_falls_back_to_placeholder() {
        let text = run_snippet("/demo/data-display", "calendar", false).expect("known route");
        assert_eq!(text.trim_end(), NO_EXAMPLE);

        let text = run_snippet("/demo/dialog", "Tooltip", false).expect("known route");
        assert_eq!(text.trim_end(), NO_EXAMPLE);
    }

    #[test]
    fn snippet_props_as_json() {
        let text = run_snippet("/demo/form", "Switch", true).expect("known route");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value[0]["name"], "checked");
        assert_eq!(value[0]["type"], "boolean");
    }

    #[test]
    fn snippet_rejects_unknown_route() {
        let err = run_snippet("/demo/nope", "x", false).unwrap_err().to_string();
        assert!(err.contains("Valid routes"));
    }

    #[test]
    fn snippet_rejects_home() {
        assert!(run_snippet("/", "x", false).is_err());
    }
}
