//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wellspring_domain::HttpMethod;

#[derive(Debug, Parser)]
#[command(name = "wellspring")]
#[command(about = "Terminal client for the Wellspring student wellbeing API")]
#[command(version)]
pub struct Cli {
    /// API base URL; overrides WELLSPRING_API_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Token storage file; overrides WELLSPRING_STORAGE_PATH.
    #[arg(long, global = true, conflicts_with = "ephemeral")]
    pub storage: Option<PathBuf>,

    /// Keep the token in memory for this run only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// End the session and forget the stored token
    Logout,
    /// Show whether a session is active, expired, and its role
    Status,
    /// Send an arbitrary request through the retrying client
    Request {
        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: HttpMethod,
        /// Path relative to the base URL, e.g. /api/habits
        path: String,
        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },
    /// List therapists, or search them
    Therapists {
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the dashboard summary
    Dashboard,
}
