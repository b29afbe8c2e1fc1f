use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use fileinfo::commands::config_cmd::ConfigOptions;
use fileinfo::commands::encode::EncodeOptions;
use fileinfo::commands::info::InfoOptions;
use fileinfo::commands::size::SizeOptions;
use fileinfo::commands::{execute_base64, execute_config, execute_hex, execute_info, execute_size};
use fileinfo::config::ConfigChanges;
use fileinfo::error::AppError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Info(args) => {
            let options = InfoOptions {
                paths: args.paths,
                decimals: args.decimals,
                recursive: args.recursive,
                json: args.json,
            };
            execute_info(options)?;
        }
        Commands::Size(args) => {
            let options = SizeOptions { bytes: args.bytes, decimals: args.decimals };
            execute_size(options)?;
        }
        Commands::Hex(args) => {
            execute_hex(EncodeOptions { path: args.path, output: args.output })?;
        }
        Commands::Base64(args) => {
            execute_base64(EncodeOptions { path: args.path, output: args.output })?;
        }
        Commands::Config(args) => {
            let changes =
                ConfigChanges { decimals: args.decimals, add_exclude: args.add_exclude };
            let options = ConfigOptions { show_path: args.path, edit: args.edit, changes };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "fileinfo", version, about = "Inspect file types, sizes and contents.")]
struct Cli {
    /// Print debug logging to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the type and size of files.
    #[command(visible_alias = "i")]
    Info(InfoArgs),
    /// Format a byte count as a human-readable size.
    #[command(visible_alias = "sz")]
    Size(SizeArgs),
    /// Print or save the hexadecimal contents of a file.
    Hex(EncodeArgs),
    /// Print or save the base64 encoding of a file.
    #[command(visible_alias = "b64")]
    Base64(EncodeArgs),
    /// Manage fileinfo configuration (default decimals, exclusions, etc.).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Number of decimal places in sizes (defaults to the configured value).
    #[arg(short = 'd', long = "decimals", value_name = "N", allow_negative_numbers = true)]
    decimals: Option<i32>,

    /// Descend into subdirectories.
    #[arg(short, long, action = ArgAction::SetTrue)]
    recursive: bool,

    /// Print the reports as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Files or directories to inspect (defaults to the current directory).
    #[arg(value_name = "PATH", num_args = 0..)]
    paths: Vec<PathBuf>,
}

#[derive(Args)]
struct SizeArgs {
    /// Byte count, either an integer or a quantity such as "5 GiB".
    #[arg(value_name = "BYTES", allow_negative_numbers = true)]
    bytes: String,

    /// Number of decimal places (defaults to the configured value).
    #[arg(short = 'd', long = "decimals", value_name = "N", allow_negative_numbers = true)]
    decimals: Option<i32>,
}

#[derive(Args)]
struct EncodeArgs {
    /// File to read.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Write to this file instead of stdout, replacing it if it exists.
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Add a glob pattern to skip when inspecting directories.
    #[arg(long = "add-exclude", value_name = "PATTERN")]
    add_exclude: Option<String>,

    /// Store the default number of decimal places.
    #[arg(long = "decimals", value_name = "N", allow_negative_numbers = true)]
    decimals: Option<i32>,
}
