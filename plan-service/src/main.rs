use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use splitfill_core::Side;
use splitfill_service::presentation::console;
use splitfill_service::{AppConfig, GetExecutionPlanRequest, JsonExchangeRepository, PlanServer};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Split crypto orders across exchanges at the best available prices.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load configuration from a JSON file.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the exchange-*.json snapshots.
    #[arg(long, global = true)]
    exchange_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the REST API.
    Serve(ServeArgs),
    /// Compute a single plan and print it.
    Plan(PlanArgs),
    /// Prompt for order type and amount on stdin.
    Interactive,
}

#[derive(Parser)]
struct ServeArgs {
    /// Host to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT).
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct PlanArgs {
    /// Order type: buy or sell.
    #[arg(long)]
    side: Side,

    /// Amount of crypto to buy or sell.
    #[arg(long)]
    amount: Decimal,

    /// Print the plan as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splitfill=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let repo = JsonExchangeRepository::new(&config.exchange_directory).with_context(|| {
        format!(
            "cannot open exchange directory {}",
            config.exchange_directory.display()
        )
    })?;

    match cli.command {
        Commands::Serve(args) => {
            let mut config = config;
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }

            tracing::info!("Snapshots: {}", config.exchange_directory.display());
            tracing::info!("Available endpoints:");
            tracing::info!("  GET  /api/ping");
            tracing::info!("  GET  /api/executionplan?orderType=buy&orderAmount=1.5");

            PlanServer::new(config, repo)
                .run()
                .await
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Plan(args) => {
            let server = PlanServer::new(config, repo);
            let plan = server
                .use_case()
                .execute(GetExecutionPlanRequest {
                    side: args.side,
                    amount: args.amount,
                })
                .await?;

            let mut stdout = io::stdout().lock();
            if args.json {
                serde_json::to_writer_pretty(&mut stdout, &plan)?;
                writeln!(stdout)?;
            } else {
                console::print_plan(&plan, &mut stdout)?;
            }
            Ok(())
        }
        Commands::Interactive => {
            let server = PlanServer::new(config, repo);
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            console::run_interactive(&server.use_case(), stdin, &mut stdout).await?;
            Ok(())
        }
    }
}

/// Defaults, then the config file, then environment, then global CLI flags
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(dir) = &cli.exchange_dir {
        config.exchange_directory = dir.clone();
    }

    Ok(config)
}
