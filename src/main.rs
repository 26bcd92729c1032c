use routescan::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_logging(&logging::LogConfig::from_env())?;
    cli::run_cli()
}
