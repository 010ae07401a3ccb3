use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Faultline structured errors
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "Structured HTTP errors for the console and the wire")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "FAULTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print sample errors to the console
    Demo(DemoArgs),
    /// List every cataloged status code
    Catalog,
    /// Serve the demo routes over HTTP
    Serve {
        /// Override the listen address
        #[arg(long, env = "FAULTLINE_LISTEN")]
        listen: Option<SocketAddr>,
    },
}

#[derive(Debug, ClapArgs)]
pub struct DemoArgs {
    /// Status codes to report (defaults to a small sample)
    #[arg(long = "code", value_name = "CODE")]
    pub codes: Vec<u16>,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,

    /// Prefix messages with the status emoji
    #[arg(long)]
    pub emoji: bool,

    /// Color output with ANSI escape sequences
    #[arg(long)]
    pub color: bool,

    /// Also print the JSON body of each error
    #[arg(long)]
    pub json: bool,
}
