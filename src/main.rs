use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: PagesmithCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// The product record to read (overrides the config file)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The directory to write pages to (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printed JSON
    #[arg(long, default_value = "false")]
    compact: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Only print what would be deleted
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum PagesmithCommand {
    /// Initialize a new pagesmith project with a sample product
    Init(InitArgs),

    /// Generate the FAQ, product and comparison pages
    Build(BuildArgs),

    /// Delete the generated pages
    Clean(CleanArgs),
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        PagesmithCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        PagesmithCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        PagesmithCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
