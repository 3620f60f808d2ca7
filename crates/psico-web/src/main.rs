use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use psico_auth::login::hash_password;
use psico_auth::{AuthConfig, Authenticator};
use psico_web::config::load_config;
use psico_web::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "psico-web", about = "Psico-IA psychological report assistant")]
struct Cli {
    /// Path to the configuration document.
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Address to listen on; overrides `server.bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the bcrypt hash of a password for the auth document.
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Some(Command::HashPassword { password }) = &cli.command {
        println!("{}", hash_password(password)?);
        return Ok(());
    }

    let config = load_config(&cli.config).inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration; check config.yaml");
    })?;

    let model = psico_model::connect(&config.model).await.inspect_err(|e| {
        tracing::error!(error = %e, "failed to initialize the model client; check the API key");
    })?;

    let auth = match &config.auth_file {
        Some(path) => {
            let auth_config = AuthConfig::load(path).inspect_err(|e| {
                tracing::error!(error = %e, "failed to load the auth document");
            })?;
            Some(Authenticator::new(auth_config))
        }
        None => None,
    };

    let state = AppState::new(model, auth)?;
    let app = psico_web::build_router(state);

    let bind = cli.bind.unwrap_or(config.server.bind);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        login_gate = config.auth_file.is_some(),
        "Psico-IA ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
