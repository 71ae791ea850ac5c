//! Img2Lvgl CLI - Image to LVGL Module Converter
//!
//! One image per invocation, two generated modules.
//! Confirmation goes to stdout, errors to stderr.
//! Returns non-zero on any failure.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use img2lvgl_core::{convert, ConvertRequest};

#[derive(Parser)]
#[command(name = "img2lvgl-cli")]
#[command(about = "Img2Lvgl CLI - LVGL Asset Compiler")]
#[command(version)]
struct Cli {
    /// Input image filename
    input: String,

    /// Set bits for dark pixels instead of light pixels
    #[arg(long)]
    invert: bool,

    /// Directory containing the input image
    #[arg(short = 's', long, default_value = ".")]
    source_dir: PathBuf,

    /// Directory receiving both generated modules
    #[arg(short = 'd', long, default_value = ".")]
    dest_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let request = ConvertRequest {
        input: cli.input,
        source_dir: cli.source_dir,
        dest_dir: cli.dest_dir,
        invert: cli.invert,
    };

    match convert(&request) {
        Ok(outcome) => {
            println!(
                "Generated {} and {} ({}x{}, {} bytes{})",
                outcome.data_path.display(),
                outcome.header_path.display(),
                outcome.width,
                outcome.height,
                outcome.data_size,
                if outcome.inverted { ", inverted" } else { "" },
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
