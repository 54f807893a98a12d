use clap::Parser;
use clap::Subcommand;
use ingres_chat::config::AppConfig;
use ingres_chat::logging;
use ingres_chat::Result;

#[derive(Parser)]
#[command(name = "ingres-chat")]
#[command(about = "Retrieval-augmented chat API for the India Groundwater Resource Estimation System")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
    },
    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a local .env during development
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    if cli.verbose {
        logging::init_logging_with_level("debug")?;
    } else {
        logging::init_logging_with_config(Some(&config))?;
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            let host = host.unwrap_or_else(|| config.server_host().to_string());
            let port = port.unwrap_or_else(|| config.server_port());
            let enable_cors = !no_cors && config.cors_enabled();

            ingres_chat::api::serve(&config, host, port, enable_cors).await
        }
        Commands::Config => {
            let mut printable = config.clone();
            // Never echo the credential
            printable.llm.api_key = printable.llm.api_key.map(|_| "***".to_string());

            let rendered = toml::to_string_pretty(&printable)
                .map_err(|e| ingres_chat::IngresError::Config(e.to_string()))?;
            println!("{rendered}");
            Ok(())
        }
    }
}
