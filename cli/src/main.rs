//! Terminal front end for the Auto-Medic monitoring API.
//!
//! Every invocation restores the persisted session, runs one command against the
//! engine and exits. Session state lives in the file named by the client config.

mod commands;
mod formatters;

use anyhow::Context;
use automedic_engine::application::UseCaseRegistry;
use automedic_engine::domain::Role;
use automedic_engine::infrastructure::{ClientConfig, FileSessionStorage, HttpMonitoringApi};
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Auto-Medic clinical dashboard client
#[derive(Parser, Debug)]
#[command(name = "automedic", version)]
#[command(about = "Patient roster and vital-sign telemetry from the terminal")]
struct Cli {
    /// Override the API base URL
    #[arg(long, global = true, env = "AUTOMEDIC_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,

        /// Read from AUTOMEDIC_PASSWORD when omitted
        #[arg(long, env = "AUTOMEDIC_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, default_value = "patient", value_parser = parse_role)]
        role: Role,
    },

    /// Register a new account
    Signup(SignupArgs),

    /// Forget the local session
    Logout,

    /// Show the logged-in identity
    Whoami,

    /// Roster merged with the latest vitals
    Dashboard,

    /// Details and recent readings of one patient
    History {
        /// Patient id as listed by `dashboard`
        patient_id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "AUTOMEDIC_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Defaults to the password when omitted
    #[arg(long)]
    pub password_confirm: Option<String>,

    #[arg(long, default_value = "patient", value_parser = parse_role)]
    pub role: Role,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub phone_number: String,

    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub date_of_birth: String,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub zip_code: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Doctors only
    #[arg(long)]
    pub specialty: Option<String>,

    /// Doctors only
    #[arg(long)]
    pub hospital: Option<String>,

    /// Patients only
    #[arg(long)]
    pub medical_history: Option<String>,

    #[arg(long)]
    pub emergency_name: Option<String>,

    #[arg(long)]
    pub emergency_phone: Option<String>,

    #[arg(long)]
    pub emergency_relationship: Option<String>,

    #[arg(long)]
    pub emergency_email: Option<String>,
}

fn parse_role(s: &str) -> Result<Role, String> {
    Role::parse(s).ok_or_else(|| format!("unknown role '{}', expected patient or doctor", s))
}

fn init_tracing() {
    // Priority: AUTOMEDIC_LOG_LEVEL > RUST_LOG > default
    let filter = std::env::var("AUTOMEDIC_LOG_LEVEL")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("Failed to load client configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
        config.validate()?;
    }

    tracing::debug!(
        api = %config.api_base_url,
        session_file = %config.session_file.display(),
        "Client configured"
    );

    let api = Arc::new(HttpMonitoringApi::new(&config)?);
    let storage = Arc::new(FileSessionStorage::new(&config.session_file));
    let registry = UseCaseRegistry::new(api, storage);

    registry
        .restore_session()
        .execute()
        .await
        .context("Failed to restore session")?;

    match cli.command {
        Command::Login {
            email,
            password,
            role,
        } => commands::handle_login(&registry, email, password, role).await?,
        Command::Signup(args) => commands::handle_signup(&registry, args).await?,
        Command::Logout => commands::handle_logout(&registry).await?,
        Command::Whoami => commands::handle_whoami(&registry).await?,
        Command::Dashboard => commands::handle_dashboard(&registry).await?,
        Command::History { patient_id } => {
            commands::handle_history(&registry, patient_id).await?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from([
            "automedic",
            "login",
            "--email",
            "doc@example.com",
            "--password",
            "pw",
            "--role",
            "doctor",
        ])
        .unwrap();

        match cli.command {
            Command::Login { email, role, .. } => {
                assert_eq!(email, "doc@example.com");
                assert_eq!(role, Role::Doctor);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = Cli::try_parse_from([
            "automedic",
            "login",
            "--email",
            "a@example.com",
            "--password",
            "pw",
            "--role",
            "nurse",
        ]);
        assert!(result.is_err());
    }
}
