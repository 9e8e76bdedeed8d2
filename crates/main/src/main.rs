use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lead_magnets::fonts::{DEFAULT_BODY_FAMILY, DEFAULT_DISPLAY_FAMILY};
use lead_magnets::{GeneratorConfig, Magnet};
use tracing_subscriber::EnvFilter;

/// Generates the LUME lead-magnet PDFs.
///
/// Without `--fonts-dir` the TrueType fonts are looked up in the directory named by
/// `LEAD_MAGNETS_FONTS_DIR`; when that is unset or incomplete the standard PDF fonts are used.
#[derive(Parser)]
#[command(author, version, about = "Generates the LUME networking playbook and checklist")]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Options {
    /// Directory the PDFs are written to. Defaults to `LEAD_MAGNETS_OUT_DIR`, then `.`.
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Directory holding the TrueType families. Every file must be present.
    #[arg(long, global = true)]
    fonts_dir: Option<PathBuf>,

    /// TrueType family used for body text.
    #[arg(long, global = true, default_value = DEFAULT_BODY_FAMILY)]
    body_family: String,

    /// TrueType family used for headlines.
    #[arg(long, global = true, default_value = DEFAULT_DISPLAY_FAMILY)]
    display_family: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the networking playbook to `hni-networking-playbook.pdf`.
    #[command(name = "playbook")]
    Playbook,

    /// Render the networking checklist to `networking-checklist.pdf`.
    #[command(name = "checklist")]
    Checklist,

    /// Render every lead magnet.
    #[command(name = "all", aliases = ["run-all", "run_all"])]
    All,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let magnets: &[Magnet] = match cli.command {
        Commands::Playbook => &[Magnet::Playbook],
        Commands::Checklist => &[Magnet::Checklist],
        Commands::All => &Magnet::ALL,
    };

    let options = cli.options;
    let mut config = GeneratorConfig::from_env()
        .with_fonts_dir(options.fonts_dir)
        .with_families(options.body_family, options.display_family);
    if let Some(out_dir) = options.out_dir {
        config = config.with_out_dir(out_dir);
    }

    match lead_magnets::run(magnets, &config) {
        Ok(paths) => log::info!("Generated {} file(s)", paths.len()),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
