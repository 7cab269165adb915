use clap::{Parser, Subcommand};

use climate_subset_lib::config::CONFIG_FILE_NAME;

mod cli_types;
mod commands;

use cli_types::ConvertArgs;

#[derive(Parser)]
#[command(
    name = "climate-subset",
    author,
    version,
    about = "Convert PHP static-analysis JSON reports into a Code Climate issue subset",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert tool reports into one Code Climate JSON file
    Convert(ConvertArgs),

    /// Create a default configuration file
    Init {
        /// Where to write the configuration file
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: String,
    },

    /// List supported tools and their flags
    Tools,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Convert(args) => commands::convert::handle_convert(args),
        Commands::Init { path } => commands::init::handle_init(path),
        Commands::Tools => commands::tools::handle_tools(),
    }
}
