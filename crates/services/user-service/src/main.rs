//! User Service - in-memory user registry demo.

use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::{config::UserServiceConfig, demo};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "In-memory user registry")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the store walkthrough on the seeded demo users
    Demo {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the seeded users
    List {
        /// Only users with this role (admin, user, guest)
        #[arg(long)]
        role: Option<String>,
        /// Only active users
        #[arg(long, conflicts_with = "inactive")]
        active: bool,
        /// Only inactive users
        #[arg(long)]
        inactive: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available roles
    Roles {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration (also reads .env)
    let config = UserServiceConfig::from_env();

    init_tracing(config.service.log_filter(cli.verbose));
    info!(service = %config.service.service_name, "Starting");
    debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Demo { json } => {
            let service = user_service_lib::build_manager(&config);
            match demo::run(&service).await {
                Ok(summary) if json => demo::to_json(&summary).map(|out| println!("{}", out)),
                Ok(summary) => {
                    demo::print_summary(&summary);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Commands::List {
            role,
            active,
            inactive,
            json,
        } => {
            let service = user_service_lib::build_manager(&config);
            let status = match (active, inactive) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            match demo::list(&service, role.as_deref(), status).await {
                Ok(users) => demo::print_users(&users, json),
                Err(e) => Err(e),
            }
        }
        Commands::Roles { json } => demo::print_roles(json),
    };

    if let Err(e) = result {
        error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
