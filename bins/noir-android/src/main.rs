//! Noir Journal Android CLI
//!
//! Resolves and inspects the Android build-variant configuration before the
//! packaging pipeline runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use noir_buildconfig::resolver::{self, ProjectSettings};
use noir_buildconfig::BuildConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG_ERROR: i32 = 3;

#[derive(Parser)]
#[command(name = "noir-android")]
#[command(about = "Android packaging configuration for Noir Journal")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective build configuration
    Resolve {
        /// Path to the signing properties file
        #[arg(long, default_value = "android/key.properties")]
        properties: PathBuf,
        /// Output as JSON (passwords redacted)
        #[arg(long)]
        json: bool,
    },

    /// Validate the signing setup without building
    Check {
        /// Path to the signing properties file
        #[arg(long, default_value = "android/key.properties")]
        properties: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let exit_code = match cli.command {
        Commands::Resolve { properties, json } => run_resolve(&properties, json),
        Commands::Check { properties } => run_check(&properties),
    };

    std::process::exit(exit_code);
}

fn run_resolve(properties: &PathBuf, json: bool) -> i32 {
    let settings = ProjectSettings::default();

    match resolver::resolve(&settings, properties) {
        Ok(config) => {
            if json {
                // Serialization redacts the password fields.
                match serde_json::to_string_pretty(&config) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        error(&format!("Serialization failed: {e}"));
                        return EXIT_CONFIG_ERROR;
                    }
                }
            } else {
                print_summary(&config);
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            error(&format!("Configuration error: {e}"));
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check(properties: &PathBuf) -> i32 {
    let settings = ProjectSettings::default();

    match resolver::resolve(&settings, properties) {
        Ok(config) => {
            if let Some(signing) = &config.signing {
                success(&format!(
                    "Release signing configured (keystore: {})",
                    signing.store_file.display()
                ));
            } else {
                info("No signing credentials; release artifacts will be unsigned");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            error(&format!("Configuration error: {e}"));
            EXIT_CONFIG_ERROR
        }
    }
}

fn print_summary(config: &BuildConfig) {
    println!("{}", "Build Configuration".bold());
    println!();
    println!("  Application: {}", config.application_id);
    println!(
        "  Version:     {} ({})",
        config.version_name, config.version_code
    );
    println!(
        "  SDK:         min {} / target {}",
        config.min_sdk, config.target_sdk
    );
    println!(
        "  Shrinking:   minify={} resources={}",
        config.minify, config.shrink_resources
    );

    match &config.signing {
        Some(signing) => {
            println!(
                "  Signing:     {} (keystore: {}, alias: {})",
                "enabled".green(),
                signing.store_file.display(),
                signing.key_alias
            );
        }
        None => {
            println!("  Signing:     {}", "disabled".yellow());
        }
    }
}

fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
