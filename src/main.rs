use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use watermarker::{format_file_size, Cli, WatermarkApplier};

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let applier = WatermarkApplier::new(cli.config()).with_progress(true);

    let stats = applier
        .apply_directory(
            &cli.target_directory,
            &cli.watermark_path,
            &cli.output_directory,
        )
        .with_context(|| {
            format!(
                "failed to watermark images in {}",
                cli.target_directory.display()
            )
        })?;

    println!(
        "Watermarked {} images ({} skipped, {} written) to: {}",
        stats.processed_count,
        stats.skipped_count(),
        format_file_size(stats.bytes_written),
        cli.output_directory.display()
    );

    Ok(())
}
