mod cli;

use shelfsort::{config, organize};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

use shelfsort::organize::manga::{MangaOptions, MangaSorter};
use shelfsort::organize::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "shelfsort=trace,shelfsort_parser=trace,shelfsort_common=debug".to_string()
        } else {
            "shelfsort=info,shelfsort_parser=info,shelfsort_common=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Manga {
            sources,
            destination,
            archive,
            remove,
            dry_run,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_sources(&sources)?;

            let options = MangaOptions { archive, remove, dry_run };
            let sorter = MangaSorter::new(&config, options);
            let report = organize::run_parallel(&sources, config.organize.threads, |source| {
                sorter.sort_source(source, &destination)
            })?;
            print_report("manga", report, dry_run)
        }
        Commands::Rename { sources, dry_run } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_sources(&sources)?;

            let collision = config.organize.collision;
            let report = organize::run_parallel(&sources, config.organize.threads, |source| {
                organize::rename::rename_source(source, collision, dry_run)
            })?;
            print_report("rename", report, dry_run)
        }
        Commands::Video { sources, dry_run } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_sources(&sources)?;

            let collision = config.organize.collision;
            let video_config = config.video.clone();
            let report = organize::run_parallel(&sources, config.organize.threads, |source| {
                organize::video::rename_source(source, &video_config, collision, dry_run)
            })?;
            print_report("video", report, dry_run)
        }
        Commands::Zip {
            sources,
            destination,
            dry_run,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_sources(&sources)?;
            if let Some(ref dest) = destination {
                std::fs::create_dir_all(dest)?;
            }

            let report = organize::run_parallel(&sources, config.organize.threads, |source| {
                organize::archive::zip_source(source, destination.as_deref(), dry_run)
            })?;
            print_report("zip", report, dry_run)
        }
        Commands::Validate { config: config_path } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("shelfsort {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn check_sources(sources: &[PathBuf]) -> Result<()> {
    for source in sources {
        if !source.is_dir() {
            anyhow::bail!("Source is not a directory: {:?}", source);
        }
    }
    Ok(())
}

fn print_report(command: &str, report: Report, dry_run: bool) -> Result<()> {
    let prefix = if dry_run { "[dry run] " } else { "" };
    println!(
        "{}{}: {} processed, {} changed, {} skipped, {} failed",
        prefix, command, report.processed, report.changed, report.skipped, report.failed
    );
    if report.failed > 0 {
        anyhow::bail!("{} item(s) failed; see the log for details", report.failed);
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let _ = config::load_config(path)?;
            println!("Config OK: {:?}", path);
        }
        None => {
            let _ = config::load_config_or_default(None)?;
            println!("Config OK (defaults)");
        }
    }
    Ok(())
}
