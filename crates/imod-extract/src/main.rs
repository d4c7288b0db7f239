use clap::{Arg, Command};
use imod_extract::Extractor;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("imod-extract")
        .version(imod_extract::VERSION)
        .about("Extracts per-header symbol catalogs from the cimgui generator metadata")
        .arg(
            Arg::new("branch")
                .long("branch")
                .required(true)
                .help("Branch tag naming the output catalog directory (main, docking)"),
        );

    let matches = cli.get_matches();
    let branch = matches.get_one::<String>("branch").unwrap();

    let catalogs = Extractor::new(".").run()?;
    catalogs.save(Path::new(branch))?;

    info!(
        branch = %branch,
        locations = catalogs.enums.len(),
        backend_locations = catalogs.impl_funcs.len(),
        "catalogs written"
    );
    Ok(())
}
