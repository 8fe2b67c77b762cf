use std::process;

use anyhow::Error;
use frontend_template::{ServerConfig, default_app, serve};
use log::{error, info};
use tokio::runtime::Runtime;

fn run() -> Result<(), Error> {
    let config = ServerConfig::from_env();
    info!("starting on {}:{}", config.host, config.port);
    let app = default_app()?;
    let runtime = Runtime::new()?;
    runtime.block_on(serve(&config, app))
}

pub fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err:?}");
        process::exit(1);
    }
}
