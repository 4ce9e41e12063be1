use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use gen_nodes::{
    generate_nodes, node_file,
    prompt::{self, BOUNDARY_PROMPT, NODE_COUNT_PROMPT},
    Boundary, Error,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Boundary size, prompted for when absent
    #[arg(long, allow_hyphen_values = true)]
    boundary_size: Option<String>,

    /// Node count, prompted for when absent
    #[arg(long, allow_hyphen_values = true)]
    node_count: Option<String>,

    /// Output directory, defaults to the directory holding this executable
    #[arg(long, short, env = "GEN_NODES_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn read_value<R: BufRead, W: Write>(
    value: Option<&str>,
    input: &mut R,
    output: &mut W,
    prompt: &'static str,
) -> gen_nodes::Result<i64> {
    match value {
        Some(value) => prompt::parse_integer(value),
        None => prompt::prompt_integer(input, output, prompt),
    }
}

fn out_dir(args: &Args) -> gen_nodes::Result<PathBuf> {
    if let Some(dir) = &args.out_dir {
        return Ok(dir.clone());
    }
    let exe = env::current_exe()?;
    Ok(exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}

fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, output: &mut W) -> gen_nodes::Result<()> {
    let boundary_size = read_value(args.boundary_size.as_deref(), input, output, BOUNDARY_PROMPT)?;
    let node_count = read_value(args.node_count.as_deref(), input, output, NODE_COUNT_PROMPT)?;

    let boundary = Boundary::new(boundary_size);
    let dir = out_dir(args)?;
    debug!(dir = %dir.display(), "resolved output directory");

    let nodes = match args.seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            generate_nodes(&mut StdRng::seed_from_u64(seed), boundary, node_count)?
        }
        None => generate_nodes(&mut rand::thread_rng(), boundary, node_count)?,
    };

    let path = node_file::write_node_file(&dir, boundary, node_count, &nodes)?;
    writeln!(
        output,
        "Generated {node_count} unique nodes in '{}'.",
        path.display()
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    match run(&args, &mut input, &mut output) {
        Ok(()) => Ok(()),
        Err(err) if err.is_user_input() => {
            writeln!(output, "{err}")?;
            Ok(())
        }
        Err(Error::EndOfInput(what)) => anyhow::bail!("no answer given for '{what}'"),
        Err(err) => Err(err).context("failed to generate node file"),
    }
}
