use std::process;

use camino::Utf8Path;
use clap::Parser;
use synmetrix::{
    Result,
    cli::{Synmetrix, load_env_file},
};

#[tokio::main]
async fn main() {
    if let Err(error) = load_env_file() {
        exit(error)
    }
    let app = Synmetrix::parse();

    if let Err(error) = run(app).await {
        tracing::debug!(?error);
        exit(error)
    }
}

fn exit(error: anyhow::Error) -> ! {
    eprintln!("error: {error:#}");
    process::exit(1)
}

async fn run(app: Synmetrix) -> Result<()> {
    let log_file = app.log_file();
    timber::init(app.log_level(), log_file.as_deref().map(Utf8Path::as_std_path))?;
    tracing::trace!(command = ?app.command);

    let output = app.run().await?;
    output.print(app.format)?;
    Ok(())
}
