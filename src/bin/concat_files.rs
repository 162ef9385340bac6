use clap::Parser;
use clipgather::concat::DEFAULT_INPUT_LIST;
use clipgather::logger::initialize_logger;
use clipgather::{concat_files_to_clipboard, ConcatConfig, SystemClipboard};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Copy the contents of the files listed in a CSV file to the clipboard", long_about = None)]
struct CliArgs {
    /// CSV file whose first column lists the files to copy
    #[arg(default_value = DEFAULT_INPUT_LIST)]
    input_list: PathBuf,
    #[arg(
        long,
        env = "CLIPGATHER_BASE_DIR",
        default_value = ".",
        help = "Directory that relative paths in the list resolve against"
    )]
    base_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let config = ConcatConfig {
        input_list: cli_args.input_list,
        base_dir: cli_args.base_dir,
    };
    debug!("Running with {:?}", config);

    let mut clipboard = SystemClipboard::new();
    match concat_files_to_clipboard(config, &mut clipboard) {
        Ok(_) => {
            println!("Text copied to clipboard!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error copying files to clipboard: {}", e);
            ExitCode::FAILURE
        }
    }
}
