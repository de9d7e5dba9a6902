use std::path::PathBuf;

use clap::{Parser, Subcommand};
use profilecard::TemplateId;

/// profilecard - render digital business card profiles
#[derive(Parser, Debug)]
#[command(name = "profilecard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./profilecard.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by commands that compose a profile
#[derive(clap::Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Render as an account with a subscription
    #[arg(long)]
    pub subscribed: bool,

    /// Treat the profile as never published (placeholders fill empty fields)
    #[arg(long)]
    pub draft: bool,

    /// Placeholder catalog (TOML) replacing the built-in one
    #[arg(long)]
    pub placeholders: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a profile to an HTML card
    Render {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Template to render with (overrides the profile's template)
        #[arg(short, long, value_enum)]
        template: Option<TemplateId>,

        /// Write HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available templates
    Templates {
        /// Show which templates an unsubscribed account can use
        #[arg(long)]
        subscribed: bool,
    },

    /// Export a profile's contact details as a vCard
    Vcard {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Write the vCard to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a profile and report the corrections rendering would apply
    Check {
        /// Profile JSON file
        #[arg(short, long)]
        profile: PathBuf,

        /// Check template entitlement as a subscribed account
        #[arg(long)]
        subscribed: bool,
    },
}
