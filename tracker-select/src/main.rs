use anyhow::Result;
use clap::Parser;

use tracker_select::cli::Cli;
use tracker_select::settings::Settings;
use tracker_select::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new()?;

    // Logging is initialized in App::run()
    App::new(settings, cli).run().await?;

    Ok(())
}
