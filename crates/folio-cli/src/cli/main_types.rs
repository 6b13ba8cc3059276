use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::core::section::SectionId;

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(about = "Command line access to the folio portfolio")]
#[command(version)]
#[command(after_help = "Examples:
  folio-cli show                        # Print every section
  folio-cli show projects               # Print one section
  folio-cli contact send --name Ada --email ada@example.com \\
      --subject Hello --message 'Nice site'
  folio-cli config show                 # Show current configuration
  folio-cli config set layout.breakpoint 100

Environment Variables:
  FOLIO_CONFIG      Configuration file path
  FOLIO_RELAY_URL   Contact form relay endpoint")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print portfolio sections
    Show(ShowArgs),
    /// Send a message through the contact form relay
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
    /// Configuration management (show, set, path)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments for printing sections
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Section to print (home, about, projects, contact); all when omitted
    pub section: Option<SectionId>,

    /// Maximum output width in columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Validate and send a contact message
    #[command(after_help = "Examples:
  folio-cli contact send --name Ada --email ada@example.com --subject Hi --message 'Hello'")]
    Send {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// Message subject
        #[arg(long)]
        subject: String,
        /// Message body
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Set a configuration value
    #[command(after_help = "Examples:
  folio-cli config set relay.endpoint https://formspree.io/f/abcd1234
  folio-cli config set layout.breakpoint 100
  folio-cli config set layout.lookahead_rows 4")]
    Set {
        /// Dotted key, e.g. layout.breakpoint
        key: String,
        /// New value
        value: String,
    },
    /// Print the configuration file path
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}
