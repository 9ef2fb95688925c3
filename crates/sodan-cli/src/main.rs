//! Sodan CLI - Ask persona advisors from the terminal
//!
//! Thin client over the Sodan JSON API.

mod api;
mod config;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};

use api::SodanClient;
use config::Config;

#[derive(Parser)]
#[command(name = "sodan")]
#[command(about = "Sodan CLI - Ask persona advisors from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Server URL (overrides the configured one)
    #[arg(long, global = true, env = "SODAN_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// List selectable personas
    Personas,

    /// Ask a persona for advice
    Ask {
        /// Persona id, e.g. career_coach (will prompt if not provided)
        #[arg(short, long)]
        persona: Option<String>,
        /// Question (will prompt if not provided)
        message: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load()?;
    let configured_url = config.base_url.clone();
    if let Some(url) = &cli.url {
        config.set_base_url(url);
    }

    match cli.command {
        Commands::Login { key } => cmd_login(config, configured_url, key).await,
        Commands::Personas => cmd_personas(&config).await,
        Commands::Ask { persona, message } => cmd_ask(&config, persona, message).await,
        Commands::Config => cmd_config(&config),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(mut config: Config, configured_url: String, key: Option<String>) -> Result<()> {
    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Health is public, so verify the key against a guarded endpoint
    let client = SodanClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.list_personas().await {
        Ok(_) => {
            println!("{}", "OK".green());
        }
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Sodan API: {}", e);
        }
    }

    if config.base_url != configured_url {
        println!("{} Server URL set to {}", "✓".green(), config.base_url.cyan());
    }
    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_personas(config: &Config) -> Result<()> {
    let client = SodanClient::new(&config.base_url, config.api_key.as_deref());
    let personas = client.list_personas().await?;

    if personas.is_empty() {
        println!("No personas registered.");
        return Ok(());
    }

    println!("{}", "Personas:".bold());
    for persona in personas {
        println!("  {} {}", persona.id.cyan(), persona.label.dimmed());
    }

    Ok(())
}

async fn cmd_ask(config: &Config, persona: Option<String>, message: Option<String>) -> Result<()> {
    let client = SodanClient::new(&config.base_url, config.api_key.as_deref());

    let persona = match persona {
        Some(p) => p,
        None => select_persona(&client).await?,
    };

    let message = match message {
        Some(m) => m,
        None => Input::<String>::new()
            .with_prompt("相談内容")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?,
    };

    // Mirror the server's rule locally so an empty question never leaves the machine
    let message = require_content(&message)?;

    let spinner = thinking_spinner();
    let result = client.ask(&persona, message).await;
    spinner.finish_and_clear();

    let advice = result?;

    eprintln!(
        "{} {} ({}) {}",
        "Answer from".dimmed(),
        advice.persona.cyan(),
        advice.model.dimmed(),
        advice.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    );
    eprintln!("{}", "---".dimmed());

    // Answer goes to stdout (clean for piping)
    println!("{}", advice.answer);

    Ok(())
}

async fn select_persona(client: &SodanClient) -> Result<String> {
    let personas = client.list_personas().await?;
    if personas.is_empty() {
        bail!("No personas registered on the server");
    }

    let labels: Vec<String> = personas
        .iter()
        .map(|p| format!("{} ({})", p.label, p.id))
        .collect();

    let index = Select::new()
        .with_prompt("相談相手を選んでください")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read selection")?;

    Ok(personas[index].id.clone())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("回答を生成しています...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

const EMPTY_MESSAGE: &str = "まずは相談内容を入力してください。";

/// Whitespace-only questions are rejected
fn require_content(message: &str) -> Result<&str> {
    if message.trim().is_empty() {
        bail!(EMPTY_MESSAGE);
    }
    Ok(message)
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_content() {
        assert_eq!(require_content("転職すべき?").unwrap(), "転職すべき?");
        assert_eq!(require_content("  padded  ").unwrap(), "  padded  ");

        for blank in ["", " \n\t ", "　"] {
            let err = require_content(blank).unwrap_err();
            assert_eq!(err.to_string(), EMPTY_MESSAGE);
        }
    }

    #[test]
    fn test_cli_parses_ask() {
        let cli =
            Cli::try_parse_from(["sodan", "ask", "-p", "health_advisor", "眠れない"]).unwrap();
        match cli.command {
            Commands::Ask { persona, message } => {
                assert_eq!(persona.as_deref(), Some("health_advisor"));
                assert_eq!(message.as_deref(), Some("眠れない"));
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_cli_ask_arguments_are_optional() {
        let cli = Cli::try_parse_from(["sodan", "ask"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Ask { persona: None, message: None }
        ));
    }
}
