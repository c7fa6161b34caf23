//! CLI parser
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{BASE_URL, DEFAULT_TIMEOUT_SECONDS};

#[derive(Parser, Debug)]
#[command(name = "httpdogs", about = "Fetch the dog for an HTTP status code")]
/// CLI Options
pub struct CliOptions {
    #[clap(required_unless_present = "list")]
    /// Status code (eg `404`) or name (eg `"not found"`).
    pub query: Option<String>,

    #[clap(long, help = "Enable debug logging", env = "HTTPDOGS_DEBUG")]
    /// Enable debug logging. Env: HTTPDOGS_DEBUG
    pub debug: bool,

    #[clap(long, short, default_value = BASE_URL, env = "HTTPDOGS_BASE_URL")]
    /// Where the dogs live, defaults to `https://httpstatusdogs.com/`.
    /// Env: HTTPDOGS_BASE_URL
    pub base_url: String,

    #[clap(long, short, default_value_t = DEFAULT_TIMEOUT_SECONDS, env = "HTTPDOGS_TIMEOUT")]
    /// Request timeout in seconds. Env: HTTPDOGS_TIMEOUT
    pub timeout: u64,

    #[clap(long, short)]
    /// Save the image here. If it's a directory the file is named `<code>.<ext>`.
    pub output: Option<PathBuf>,

    #[clap(long)]
    /// Print the dog as JSON, image included as base64.
    pub json: bool,

    #[clap(long, conflicts_with = "query")]
    /// List every known status code and exit.
    pub list: bool,
}

/// What the user asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query {
    /// Look up by numeric code, which may be out of range for a status.
    Code(i64),
    /// Look up by status name.
    Name(String),
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(code) => Query::Code(code),
            Err(_) => Query::Name(value.to_string()),
        }
    }
}
