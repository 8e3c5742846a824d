//! Decode a `Root` graph from disk, check it, and write it back out under a fresh random name.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use long_proto::check::check_root;
use long_proto::schema::Root;
use long_proto::{decode, EncodeOptions, Encoder};
use rand::Rng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "reserialize", about = "Decode a Root graph and write it back out")]
struct Args {
    /// Encoded Root to read
    #[arg(default_value = "data.bin")]
    input: PathBuf,

    /// Directory the re-encoded file is created in
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Write repeated integers packed
    #[arg(long)]
    packed: bool,

    /// Also dump the decoded graph as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "long_proto=info,reserialize=info".into()),
        )
        .init();

    let args = Args::parse();

    let data = fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let start = Instant::now();
    let root: Root = decode(&data).context("Failed to deserialize")?;
    check_root(&root).context("Failed to deserialize")?;
    info!(bytes = data.len(), elapsed = ?start.elapsed(), "decoded root");

    if let Some(path) = &args.json {
        let json = serde_json::to_vec_pretty(&root)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let name = format!("{:032x}.bin", rand::thread_rng().gen::<u128>());
    let path = args.out_dir.join(name);
    let mut file = File::options()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let start = Instant::now();
    let bytes = Encoder::with_params(EncodeOptions {
        packed: args.packed,
    })
    .encode(&root);
    file.write_all(&bytes)?;
    let elapsed = start.elapsed();

    info!(path = %path.display(), bytes = bytes.len(), ?elapsed, "encoded root");
    println!("Serialized in {:?}", elapsed);
    Ok(())
}
