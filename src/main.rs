use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gspanel::api::PanelResources;
use gspanel::config::Config;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; explicit flags override its values.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every character of a showcase snapshot.
    Score(cmd::score::ScoreArgs),
    /// Print the score basis a character's rules produce.
    Basis(cmd::basis::BasisArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // 1. Raw matches tell explicit flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let (cli_config, sub_name) = match &cli.command {
        Commands::Score(args) => (&args.config, "score"),
        Commands::Basis(args) => (&args.config, "basis"),
    };

    // 2. File config as the base, CLI flags on top
    let config = match &cli.config_file {
        Some(path) => {
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ {}", e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    // 3. Resources
    let resources = match PanelResources::load(&config) {
        Ok(r) => Arc::new(r),
        Err(e) => {
            eprintln!("\n❌ FATAL ERROR LOADING RESOURCES:");
            eprintln!("   {}", e);
            process::exit(1);
        }
    };

    // 4. Execute
    let outcome = match cli.command {
        Commands::Score(args) => cmd::score::run(args, resources),
        Commands::Basis(args) => cmd::basis::run(args, resources),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
