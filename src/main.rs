use clap::Parser;
use dfa::{report, Level, LevelPaths};
use log::*;

mod cli;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> miette::Result<()> {
    pretty_env_logger::formatted_builder()
        .format_timestamp(None)
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = cli::Args::parse();

    println!("Dark Forces Analyzer {VERSION}");
    println!();

    let path = args.level_path().unwrap_or_else(|| {
        info!("No level given, using {}", cli::DEFAULT_LEVEL);
        cli::DEFAULT_LEVEL.into()
    });

    let paths = LevelPaths::from_geometry(path);
    let level = Level::load(&paths, args.companion_policy())?;
    let statistics = level.statistics();
    let rendered = args.format.render(&statistics)?;

    println!("STATISTICS");
    print!("{rendered}");

    if args.no_save {
        debug!("Not saving the report");
    } else {
        report::save(&args.output, &rendered)?;
        info!("Saved report to {}", args.output.display());
    }

    Ok(())
}
