use clap::Parser;
use clipgather::logger::initialize_logger;
use clipgather::{gather_tree_to_clipboard, SystemClipboard, TreeCollectorConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Copy the source tree of a directory to the clipboard as JSON", long_about = None)]
struct CliArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,
    #[arg(
        long = "ignore",
        env = "CLIPGATHER_IGNORE",
        value_delimiter = ',',
        help = "Name fragments to skip (replaces the defaults)"
    )]
    ignore_patterns: Option<Vec<String>>,
    #[arg(
        long = "ext",
        env = "CLIPGATHER_EXTENSIONS",
        value_delimiter = ',',
        help = "File name suffixes to include (replaces the defaults)"
    )]
    include_extensions: Option<Vec<String>>,
}

fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let config = TreeCollectorConfig {
        root: cli_args.root,
        ignore_patterns: cli_args.ignore_patterns,
        include_extensions: cli_args.include_extensions,
    };
    debug!("Running with {:?}", config);

    let mut clipboard = SystemClipboard::new();
    match gather_tree_to_clipboard(config, &mut clipboard) {
        Ok(run) => {
            println!("Successfully copied directory structure to clipboard!");
            println!("\nStructure:");
            println!("{}", run.rendered);
        }
        Err(e) => {
            debug!("Tree collection failed: {:?}", e);
            println!("An error occurred: {}", e);
        }
    }
}
