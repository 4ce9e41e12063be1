use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gen_nodes::node_file;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Node file to inspect
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let file = node_file::read_node_file(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    println!("{}", serde_json::to_string_pretty(&file.summary())?);

    Ok(())
}
