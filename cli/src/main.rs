use crate::params::CliParams;
use crate::run::Runner;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod params;
mod run;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let params = CliParams::from_env().context("Failed to get params from env")?;
    let runner = Runner::new(params).context("Failed to create runner")?;

    runner.run().context("Failed to run the PPOS call")?;

    Ok(())
}
