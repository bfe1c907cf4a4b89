use arpr::imaging::{ImageBackend, Quality, RustBackend, TargetSpec};
use arpr::output::{self, Level, RunLog};
use arpr::process::{self, ProcessEvent};
use arpr::{batch, naming};
use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::mpsc::{self, Sender};

const LOG_FILE: &str = "arpr.log";

#[derive(Parser)]
#[command(name = "arpr")]
#[command(about = "Resize images while preserving aspect ratio")]
#[command(long_about = "\
Resize images while preserving aspect ratio

Give --width or --height and the other dimension follows from the source
aspect ratio (derived sides truncate, never round). Give both and the image
is resized to exactly those dimensions, distortion and all.

Output format follows the output extension: .jpg/.jpeg encodes at --quality,
.png encodes losslessly. A single image is written next to the source as
resized_<name> (or into --output). With --batch, every .jpg/.jpeg/.png
directly inside the input directory is resized into --output (default:
<input>/resized), keeping original filenames; one bad file never aborts the
batch.")]
#[command(version)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["width", "height"])
))]
struct Cli {
    /// Input image, or input directory with --batch
    input_path: PathBuf,

    /// Target width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// JPEG quality (0-100)
    #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Process every eligible image in the input directory
    #[arg(short, long)]
    batch: bool,

    /// Show debug-level log lines
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let target = TargetSpec {
        width: cli.width,
        height: cli.height,
    };
    let quality = Quality::new(cli.quality);
    let backend = RustBackend::new();

    // All progress flows through one channel; the printer thread renders to
    // stdout and mirrors every printed line into the run log.
    let (tx, rx) = mpsc::channel::<ProcessEvent>();
    let verbose = cli.verbose;
    let printer = std::thread::spawn(move || {
        let mut log = RunLog::open(Path::new(LOG_FILE)).ok();
        for event in rx {
            for line in output::format_process_event(&event) {
                if line.level == Level::Debug && !verbose {
                    continue;
                }
                println!("{}", line.message);
                if let Some(log) = log.as_mut() {
                    let _ = log.write(&line);
                }
            }
        }
    });

    let exit = if cli.batch {
        run_batch(&backend, &cli, &target, quality, &tx)
    } else {
        run_single(&backend, &cli, &target, quality, &tx)
    };

    drop(tx);
    // Let the printer drain remaining events before the process exits
    let _ = printer.join();
    exit
}

/// Single-image mode: any failure is fatal and the process exits non-zero.
fn run_single(
    backend: &impl ImageBackend,
    cli: &Cli,
    target: &TargetSpec,
    quality: Quality,
    tx: &Sender<ProcessEvent>,
) -> ExitCode {
    let output_path = naming::single_output_path(&cli.input_path, cli.output.as_deref());

    match process::process_image(
        backend,
        &cli.input_path,
        target,
        &output_path,
        quality,
        Some(tx),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = tx.send(ProcessEvent::ImageFailed {
                path: cli.input_path.clone(),
                error: error.to_string(),
            });
            ExitCode::FAILURE
        }
    }
}

/// Batch mode: per-file failures are reported but never fatal. Only a batch
/// that cannot run at all (unreadable input directory) exits non-zero.
fn run_batch(
    backend: &impl ImageBackend,
    cli: &Cli,
    target: &TargetSpec,
    quality: Quality,
    tx: &Sender<ProcessEvent>,
) -> ExitCode {
    let output_dir = naming::batch_output_dir(&cli.input_path, cli.output.as_deref());

    match batch::process_batch(
        backend,
        &cli.input_path,
        target,
        &output_dir,
        quality,
        Some(tx),
    ) {
        Ok(_report) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = tx.send(ProcessEvent::ImageFailed {
                path: cli.input_path.clone(),
                error: error.to_string(),
            });
            ExitCode::FAILURE
        }
    }
}
