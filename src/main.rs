use clap::Parser;
use log::*;

use forgelog::{
    changelog::publisher::ChangelogPublisher, cli, forge::github::Github,
    result::Result,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("forgelog")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();

    initialize_logger(args.debug)?;

    info!("starting change log generation");

    let remote = args.remote_config()?;
    let publish = args.publish_config();

    let forge = Github::new(remote).await?;
    let publisher = ChangelogPublisher::new(Box::new(forge), publish);

    publisher.run().await?;

    Ok(())
}
