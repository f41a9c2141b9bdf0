use clap::Parser;
use concursos::cli::{Cli, Commands};
use concursos::types::config::Config;
use concursos::ConcursosResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ConcursosResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|e| {
            eprintln!("Aviso: {} ignorado ({}), usando padrões", cli.config.display(), e);
            Config::default_config()
        })
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("concursos={}", log_level)
            .parse()
            .unwrap_or_else(|_| "concursos=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            concursos::cli::commands::init(path).await?;
        }
        Commands::Show { concurso } => {
            concursos::cli::commands::show(&concurso, &config).await?;
        }
        Commands::List { limit, json } => {
            concursos::cli::commands::list(limit, json, &config).await?;
        }
        Commands::Doctor => {
            concursos::cli::commands::doctor(&config).await?;
        }
        Commands::Version => {
            concursos::cli::commands::version();
        }
    }

    Ok(())
}
