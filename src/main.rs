use anyhow::{Context, Result};
use clap::Parser;

use pdf_compressor::cli::{Args, ConsoleStatus};
use pdf_compressor::compress::Compressor;
use pdf_compressor::config::Settings;
use pdf_compressor::session::Session;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args).context("Invalid settings")?;
    let mode = settings.compression_mode();
    let compressor = Compressor::new(&settings);

    // Fail fast when Ghostscript is missing; the result is cached for the run
    if mode.uses_engine() {
        compressor
            .engine()
            .ensure_available()
            .context("Check --engine-path or the GHOSTSCRIPT_PATH environment variable")?;
    }

    let mut session = Session::new();
    if let Some(ref input) = args.input {
        let is_pdf = input
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            log::warn!("{} does not have a .pdf extension", input.display());
        }
        session.select(input);
    }

    let mut status = ConsoleStatus::new();
    let report = session
        .compress(&compressor, mode, &mut status)
        .context("PDF compression failed")?;

    println!(
        "PDF compression complete. Saved to {}",
        report.output_path.display()
    );
    if let Some(stats) = report.stats {
        println!("Original size:   {}", stats.original_display());
        println!("Compressed size: {}", stats.compressed_display());
        println!("Reduction:       {}", stats.reduction_display());
    }

    Ok(())
}
