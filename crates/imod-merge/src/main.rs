use imod_merge::Engine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Branch catalogs and output directories are fixed by convention;
    // the merge takes no parameters.
    let report = Engine::with_defaults().run()?;

    info!(
        primary = report.primary_units,
        backends = report.backend_units,
        "interface units written"
    );
    Ok(())
}
