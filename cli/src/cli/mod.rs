pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use youtube_partner_core::client::UploadProtocol;

#[derive(Parser)]
#[command(name = "youtube-partner")]
#[command(author, version, about = "YouTube Content ID (partner v1) API client")]
pub struct Cli {
    /// Path to config file (checked in order: ./youtube-partner.toml, ~/.config/youtube-partner/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for this run (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the API methods
    Methods {
        /// Only show methods of this resource group (e.g. claims)
        #[arg(short, long)]
        resource: Option<String>,
    },

    /// Invoke an API method and print the JSON response
    Call(CallArgs),

    /// Render the method table from a discovery document
    Generate {
        /// Path to the discovery document JSON
        #[arg(long)]
        discovery: PathBuf,
    },

    /// Show configuration and credential state
    Status,
}

#[derive(Args)]
pub struct CallArgs {
    /// Method id, e.g. youtubePartner.claims.get (the youtubePartner. prefix is optional)
    pub method: String,

    /// Request parameter as key=value; repeat a key to send a list
    #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// JSON file used as the request body
    #[arg(long)]
    pub body: Option<PathBuf>,

    /// Media file to upload
    #[arg(long)]
    pub media: Option<PathBuf>,

    /// MIME type of the media file
    #[arg(long, default_value = "application/octet-stream")]
    pub mime_type: String,

    /// Upload protocol (overrides config)
    #[arg(long)]
    pub upload_protocol: Option<UploadProtocol>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}
