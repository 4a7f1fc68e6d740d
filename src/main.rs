use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use techicon_lib::output::OutputFormat;

mod commands;
mod settings;

#[derive(Parser)]
#[command(name = "techicon", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ignore configuration files
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Catalog file (devicon.json manifest or lookup map); overrides the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Asset host base URL; overrides the config
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve technology names to icon identifiers, display names and URLs
    Resolve {
        /// Names to resolve, e.g. "react js", "C#", "k8s"
        #[arg(required = true)]
        names: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,

        /// Show which matching stage produced each identifier
        #[arg(long)]
        explain: bool,
    },
    /// Print the asset URL for an icon identifier
    Url {
        /// Exact catalog identifier
        identifier: String,
    },
    /// Print the display name for an icon identifier
    Name {
        /// Exact catalog identifier
        identifier: String,
    },
    /// List every icon in the catalog
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,
    },
    /// List alias rules in priority order
    Aliases {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,
    },
    /// Create a default .techicon.toml in the current directory
    Init,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Resolve { names, output, explain } => {
            let settings = settings::load_or_exit(&cli.global);
            commands::resolve::handle_resolve(&settings, &names, output, explain);
        }
        Commands::Url { identifier } => {
            let settings = settings::load_or_exit(&cli.global);
            commands::lookup::handle_url(&settings, &identifier);
        }
        Commands::Name { identifier } => {
            let settings = settings::load_or_exit(&cli.global);
            commands::lookup::handle_name(&settings, &identifier);
        }
        Commands::List { output } => {
            let settings = settings::load_or_exit(&cli.global);
            commands::list::handle_list(&settings, output);
        }
        Commands::Aliases { output } => commands::list::handle_aliases(output),
        Commands::Init => commands::init::handle_init(),
        Commands::Completions { shell, list } => commands::completions::handle_completions(shell, list),
    }
}
