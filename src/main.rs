use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retrostack::stack::StackService;
use retrostack::{api, mcp};

#[derive(Parser)]
#[command(name = "retrostack")]
#[command(about = "Historical tech stack lookup: what shipped with your language in a given year")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the RetroStack HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Use the bundled static version tables instead of live registries
        #[arg(long)]
        offline: bool,
    },
    /// Start MCP server via stdio (for Claude Code integration)
    Mcp {
        /// Use the bundled static version tables instead of live registries
        #[arg(long)]
        offline: bool,
    },
}

/// Initialize tracing with output to stderr (for MCP mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "retrostack=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // MCP mode: log to stderr so stdout is clean for protocol
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_service(offline: bool) -> StackService {
    if offline {
        tracing::info!("Using bundled static version tables");
        StackService::offline()
    } else {
        StackService::live()
    }
}

async fn serve(port: u16, offline: bool) -> anyhow::Result<()> {
    let app = api::create_router(build_service(offline));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("RetroStack server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // MCP mode needs stderr for logging since stdout is the protocol channel
    let use_stderr = matches!(cli.command, Some(Commands::Mcp { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port, offline }) => {
            tracing::info!("Starting RetroStack server on port {}", port);
            serve(port, offline).await?;
        }
        Some(Commands::Mcp { offline }) => {
            mcp::run_stdio_server(build_service(offline)).await?;
        }
        None => {
            // Default: start server
            tracing::info!("Starting RetroStack server on port 4000");
            serve(4000, false).await?;
        }
    }

    Ok(())
}
