//! Wellspring command line client.
//!
//! Wires the reqwest transport, token storage and system clock into one
//! `ApiClient` and hands it to the services for each subcommand.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wellspring_application::ports::TokenStorage;
use wellspring_application::{
    ApiClient, AuthService, DashboardService, TherapistService, TokenStore,
};
use wellspring_domain::{ClientConfig, RequestOptions, UserRole};
use wellspring_domain::models::Credentials;
use wellspring_infrastructure::{
    FileTokenStorage, InMemoryTokenStorage, ReqwestTransport, SystemClock, TokioFileSystem,
    load_client_config, storage_path,
};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    run(&client, cli.command).await
}

fn build_client(cli: &Cli) -> anyhow::Result<ApiClient> {
    let mut config = load_client_config()?;
    apply_base_url(&mut config, cli.base_url.as_deref())?;

    let storage: Arc<dyn TokenStorage> = if cli.ephemeral {
        Arc::new(InMemoryTokenStorage::new())
    } else {
        let path = match &cli.storage {
            Some(path) => path.clone(),
            None => storage_path()?,
        };
        tracing::debug!(path = %path.display(), "using token storage file");
        Arc::new(FileTokenStorage::new(TokioFileSystem::new(), path))
    };

    let tokens =
        TokenStore::with_expiry_buffer(storage, Arc::new(SystemClock), config.expiry_buffer);
    let transport = ReqwestTransport::new().context("failed to create HTTP transport")?;

    tracing::debug!(
        "Starting Wellspring client v{} against '{}'",
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );
    Ok(ApiClient::new(config, Arc::new(transport), tokens)?)
}

/// Applies the `--base-url` override; the terminal client needs an absolute URL.
fn apply_base_url(config: &mut ClientConfig, flag: Option<&str>) -> anyhow::Result<()> {
    if let Some(base_url) = flag {
        config.base_url = base_url.trim().to_string();
    }
    if config.base_url.is_empty() {
        anyhow::bail!(
            "no API base URL configured; pass --base-url or set {}",
            wellspring_infrastructure::config::API_URL_ENV
        );
    }
    config.validate()?;
    Ok(())
}

async fn run(client: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let auth = AuthService::new(client);
            let response = auth.login(&Credentials::new(email, password)).await?;
            let role = auth.current_role().await;
            print_json(&serde_json::json!({
                "signedIn": true,
                "role": role.map(UserRole::as_str),
                "user": response.user,
            }))
        }
        Command::Logout => {
            AuthService::new(client).logout().await?;
            println!("Signed out");
            Ok(())
        }
        Command::Status => {
            let tokens = client.tokens();
            print_json(&serde_json::json!({
                "authenticated": tokens.is_authenticated().await,
                "expired": tokens.is_token_expired().await,
                "role": tokens.get_user_role().await,
            }))
        }
        Command::Request { method, path, body } => {
            let options = match body {
                Some(raw) => {
                    let value: serde_json::Value =
                        serde_json::from_str(&raw).context("--body is not valid JSON")?;
                    RequestOptions::with_body(method, value)
                }
                None => RequestOptions::method(method),
            };
            let value = client.request_value(&path, options).await?;
            print_json(&value)
        }
        Command::Therapists { search } => {
            let therapists = TherapistService::new(client);
            let found = match search {
                Some(query) => therapists.search(&query).await?,
                None => therapists.list().await?,
            };
            print_json(&found)
        }
        Command::Dashboard => {
            let summary = DashboardService::new(client).summary().await?;
            print_json(&summary)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_base_url_is_rejected_up_front() {
        let mut config = ClientConfig::default();
        let err = apply_base_url(&mut config, None).unwrap_err();
        assert!(err.to_string().contains("--base-url"));

        let err = apply_base_url(&mut config, Some("   ")).unwrap_err();
        assert!(err.to_string().contains("WELLSPRING_API_URL"));
    }

    #[test]
    fn base_url_flag_overrides_environment() {
        let mut config = ClientConfig::new("https://env.example.com");
        apply_base_url(&mut config, Some("https://flag.example.com")).unwrap();
        assert_eq!(config.base_url, "https://flag.example.com");

        let mut config = ClientConfig::new("https://env.example.com");
        apply_base_url(&mut config, None).unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = ClientConfig::default();
        assert!(apply_base_url(&mut config, Some("ftp://files.example.com")).is_err());
    }
}
