mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = config::CliArgs::parse();
    let config = config::load(&args)?;
    platform::logging::initialize(config.log_destination);
    platform::run_app(config)
}
