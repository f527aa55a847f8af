mod application;
mod presentation;

use clap::Parser;

use presentation::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = presentation::bootstrap::data_dir()?;
    wakecoach_infrastructure::logging::init_logger(data_dir.join("logs"))?;

    let context = presentation::bootstrap::build_app_context(&data_dir).await?;
    presentation::commands::run(cli, context).await
}
