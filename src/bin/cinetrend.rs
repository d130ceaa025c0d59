use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(
    name = "cinetrend",
    version,
    about = "Render box-office trend charts and a titled summary image from film yearbook CSVs"
)]
struct Cli {
    /// Report config JSON. Absent fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory searched for input CSVs (overrides the config).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Directory the charts and composite are written to (overrides the config).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// TrueType/OpenType font used for every label (overrides the config).
    #[arg(long)]
    font: Option<PathBuf>,

    /// More log output; repeat for trace level. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = match &cli.config {
        Some(path) => cinetrend::ReportConfig::from_path(path)?,
        None => cinetrend::ReportConfig::default(),
    };
    if let Some(dir) = cli.dir {
        cfg.input_dir = dir;
    }
    if let Some(out) = cli.out_dir {
        cfg.output_dir = out;
    }
    if let Some(font) = cli.font {
        cfg.font_path = Some(font);
    }

    let summary = cinetrend::run(&cfg)?;
    eprintln!(
        "read {} file(s), kept {} of {} rows",
        summary.input_files.len(),
        summary.rows_kept,
        summary.rows_loaded
    );
    for path in summary.charts.in_grid_order() {
        eprintln!("wrote {}", path.display());
    }
    eprintln!("wrote {}", summary.composite.display());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
