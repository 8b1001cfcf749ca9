use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use viteconf::{AppError, EnvSnapshot, resolver};

#[derive(Parser)]
#[command(name = "viteconf")]
#[command(version)]
#[command(
    about = "Resolve the effective bundler configuration for the frontend",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration and print it
    #[clap(visible_alias = "r")]
    Resolve {
        /// App directory containing the bundler config (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List environment variables the configuration exposes to client code
    #[clap(visible_alias = "e")]
    Env {
        /// App directory containing the bundler config (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve { dir, format } => resolve(dir, format),
        Commands::Env { dir } => env(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn config_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}

fn resolve(dir: Option<PathBuf>, format: Format) -> Result<(), AppError> {
    let env = EnvSnapshot::capture();
    let config = resolver::resolve(&env, &config_dir(dir))?;
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&config)?,
        Format::Toml => toml::to_string_pretty(&config)?,
    };
    println!("{rendered}");
    Ok(())
}

fn env(dir: Option<PathBuf>) -> Result<(), AppError> {
    let env = EnvSnapshot::capture();
    let config = resolver::resolve(&env, &config_dir(dir))?;
    for (name, value) in env.visible(&config.env_prefix) {
        println!("{name}={value}");
    }
    Ok(())
}
