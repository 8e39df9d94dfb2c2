use axum_helpers::server::create_app;
use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, UserService};
use eyre::WrapErr;
use tracing::info;
use users_api::{Config, build_app, demo};

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "Create, fetch and list users over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API (default)
    Serve,

    /// Run the scripted user walkthrough against an in-memory store and exit
    Demo,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let app = build_app(&config);

            info!(
                "Starting {} v{} on {}",
                config.app.name,
                config.app.version,
                config.server.address()
            );

            create_app(app, &config.server)
                .await
                .wrap_err("server error")?;

            info!("Users API shutdown complete");
        }
        Commands::Demo => {
            let service = UserService::new(InMemoryUserRepository::new());
            demo::run(&service).await?;
        }
    }

    Ok(())
}
