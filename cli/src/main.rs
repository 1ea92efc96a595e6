mod claims;
mod service_account;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::claims::{ClaimsClient, DEFAULT_IDENTITY_URL};
use crate::service_account::ServiceAccount;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("missing service account; set PARTYN_SERVICE_ACCOUNT_KEY or PARTYN_SERVICE_ACCOUNT_FILE")]
    MissingCredentials,
    #[error("missing user id; pass <UID> or set PARTYN_ADMIN_UID")]
    MissingUid,
    #[error("failed to read service account file {path}: {source}")]
    ReadKeyFile { path: String, source: std::io::Error },
    #[error("invalid service account JSON: {0}")]
    InvalidServiceAccount(serde_json::Error),
    #[error("failed to sign assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{operation} returned HTTP {status}: {message}")]
    ServerError { operation: String, status: u16, message: String },
    #[error("no account with uid `{0}`")]
    UserNotFound(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "partyn-admin", about = "Manage the Partyn admin claim on user accounts")]
struct Cli {
    /// Service-account key as inline JSON.
    #[arg(long, env = "PARTYN_SERVICE_ACCOUNT_KEY", hide_env_values = true)]
    service_account_key: Option<String>,

    /// Path to a service-account key file.
    #[arg(long, env = "PARTYN_SERVICE_ACCOUNT_FILE")]
    service_account_file: Option<PathBuf>,

    #[arg(long, env = "PARTYN_IDENTITY_URL", default_value = DEFAULT_IDENTITY_URL)]
    identity_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grant the admin claim.
    SetAdmin {
        #[arg(env = "PARTYN_ADMIN_UID")]
        uid: Option<String>,
    },
    /// Revoke the admin claim.
    RevokeAdmin {
        #[arg(env = "PARTYN_ADMIN_UID")]
        uid: Option<String>,
    },
    /// Print the user's custom claims.
    ShowClaims {
        #[arg(env = "PARTYN_ADMIN_UID")]
        uid: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let account = ServiceAccount::load(cli.service_account_key.as_deref(), cli.service_account_file.as_deref())?;
    let http = reqwest::Client::new();
    let token = account.access_token(&http, unix_now()).await?;
    let client = ClaimsClient::new(http, &cli.identity_url, &account.project_id, token);

    match cli.command {
        Command::SetAdmin { uid } => {
            let uid = require_uid(uid)?;
            client.set_admin(&uid, true).await?;
            println!("User {uid} has been made an admin");
        }
        Command::RevokeAdmin { uid } => {
            let uid = require_uid(uid)?;
            client.set_admin(&uid, false).await?;
            println!("Admin claim revoked for user {uid}");
        }
        Command::ShowClaims { uid } => {
            let uid = require_uid(uid)?;
            print_json(&client.custom_claims(&uid).await?)?;
        }
    }
    Ok(())
}

fn require_uid(uid: Option<String>) -> Result<String, CliError> {
    uid.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()).ok_or(CliError::MissingUid)
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
