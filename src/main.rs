use anyhow::Result;
use estatelist::{config::Config, constants, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Write a commented default config and exit
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("{} at {}", constants::CONFIG_GENERATED, path.display());
        return Ok(());
    }

    let config = Config::load()?;
    logger::init_file_logging(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
