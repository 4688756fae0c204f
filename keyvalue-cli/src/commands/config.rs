use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use xmldsig_keyvalue::config::DEFAULT_MAX_VALUE_LEN;

use super::Context;
use crate::config::Config;
use crate::output::{print_json, print_success};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

pub fn run(action: ConfigCommand, ctx: &Context) -> Result<()> {
    match action {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set { key, value } => set(key, value),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    if ctx.json_output {
        return print_json(&config);
    }

    println!("{}", "Configuration:".bold());
    println!(
        "  {}: {}",
        "codec.max_value_len".dimmed(),
        config.codec.max_value_len
    );
    println!(
        "    {}",
        format!("Default: {DEFAULT_MAX_VALUE_LEN} (bytes per decoded integer)").bright_black()
    );

    println!(
        "  {}: {}",
        "output_format".dimmed(),
        config.output_format.as_deref().unwrap_or("pretty")
    );
    println!("    {}", "Valid: pretty, json".bright_black());

    println!();
    println!(
        "{} {}",
        "Config file:".dimmed(),
        Config::config_path()?.display()
    );
    println!("{}", "To set a value:".dimmed());
    println!("  keyvalue config set <key> <value>");

    Ok(())
}

fn set(key: String, value: String) -> Result<()> {
    let mut config = Config::load_file()?;

    match key.as_str() {
        "codec.max_value_len" | "max_value_len" => {
            let max: usize = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid max_value_len '{value}': expected a byte count"))?;
            if max == 0 {
                anyhow::bail!("max_value_len must be at least 1");
            }
            config.codec.max_value_len = max;
        }
        "output_format" => {
            if value != "pretty" && value != "json" {
                anyhow::bail!("Invalid output_format '{value}'. Valid values: pretty, json");
            }
            config.output_format = Some(value.clone());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key '{key}'.\n\n\
                Valid keys:\n  \
                  codec.max_value_len   (e.g., 8192)\n  \
                  output_format         (pretty or json)"
            );
        }
    }

    config.save()?;

    print_success(format!("Set {key} = {value}"));

    Ok(())
}
