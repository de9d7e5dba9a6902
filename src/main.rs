//! profilecard CLI - render digital business card profiles
//!
//! Usage: profilecard <COMMAND>
//!
//! Commands:
//!   render     Render a profile to an HTML card
//!   templates  List available templates
//!   vcard      Export a profile's contact details as a vCard
//!   check      Report the corrections applied to a profile

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands};
use profilecard::config::Verbosity;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = Verbosity::from_count(cli.verbose).filter_directive();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            profile,
            template,
            output,
        } => commands::cmd_render(&profile, template, output.as_deref(), &config, cli.json),
        Commands::Templates { subscribed } => {
            commands::cmd_templates(subscribed || config.render.subscribed, cli.json)
        }
        Commands::Vcard { profile, output } => {
            commands::cmd_vcard(&profile, output.as_deref(), &config, cli.json)
        }
        Commands::Check {
            profile,
            subscribed,
        } => commands::cmd_check(&profile, subscribed, &config, cli.json),
    }
}
