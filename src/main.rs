use anyhow::Context;
use tracing_subscriber::EnvFilter;

use calc_history::config::ShellConfig;
use calc_history::repl::start_repl;

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env().context("invalid configuration")?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let code = start_repl(&config)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
