//! Eduflow - educational content agents over HTTP and the command line

use clap::{Parser, Subcommand};
use eduflow_core::{BindMode, ContentSource, EduflowConfig, ProcessRequest, ProviderKind};
use eduflow_gateway::{build_registry, start_gateway};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "eduflow", about = "Eduflow educational agents - gateway and runner")]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(short, long, global = true, default_value = "eduflow.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        /// `loopback` or `lan`
        #[arg(short, long)]
        bind: Option<String>,
        /// Serve placeholder echo responses instead of calling a provider
        #[arg(long)]
        offline: bool,
    },
    /// Run one agent and print its content
    Run {
        agent: String,
        #[arg(short, long)]
        prompt: String,
        /// Comma separated, e.g. `3,4`
        #[arg(short, long, value_delimiter = ',', required = true)]
        grades: Vec<u32>,
        #[arg(short, long, value_delimiter = ',', default_value = "English")]
        languages: Vec<String>,
        #[arg(short, long, default_value = "prebook")]
        source: ContentSource,
        /// Use the deterministic echo generator instead of a provider
        #[arg(long)]
        offline: bool,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// List agents and what they do
    Agents,
    /// Print a default config file
    Config,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            bind,
            offline,
        } => {
            init_tracing();
            let mut config = EduflowConfig::load(&cli.config).with_env_overrides();
            if offline {
                config.generation.provider = ProviderKind::Offline;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            if let Some(bind) = bind {
                config.gateway.bind = match bind.as_str() {
                    "loopback" | "localhost" | "127.0.0.1" => BindMode::Loopback,
                    _ => BindMode::Lan,
                };
            }
            let registry = build_registry(&config)?;
            start_gateway(&config.gateway, registry).await?;
        }

        Commands::Run {
            agent,
            prompt,
            grades,
            languages,
            source,
            offline,
            json,
        } => {
            init_tracing();
            let mut config = EduflowConfig::load(&cli.config).with_env_overrides();
            if offline {
                config.generation.provider = ProviderKind::Offline;
            }
            let registry = build_registry(&config)?;
            let engine = registry.resolve(&agent)?;
            let request = ProcessRequest::new(prompt, grades)
                .with_languages(languages)
                .with_source(source);
            let response = engine.process(request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.content);
                for step in &response.workflow_steps {
                    eprintln!("  [{:?}] {}: {}", step.status, step.step, step.message);
                }
            }
        }

        Commands::Agents => {
            let mut config = EduflowConfig::load(&cli.config);
            config.generation.provider = ProviderKind::Offline;
            let registry = build_registry(&config)?;
            for engine in registry.iter() {
                println!(
                    "{:<26} {}",
                    engine.id(),
                    engine.capabilities().primary_function
                );
            }
        }

        Commands::Config => {
            print!("{}", EduflowConfig::default().to_toml());
        }

        Commands::Version => {
            println!("eduflow v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eduflow=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
