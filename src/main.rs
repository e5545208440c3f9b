use anyhow::Context;
use clap::Parser;
use gedwick::config::{BuildOptions, DEFAULT_OUTPUT_PATH};
use gedwick::newick::parse_userdata;
use gedwick::{build_userdata, parse_gedcom_file, write_userdata_file};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the family tree script of the tree viewer from a GEDCOM export.
#[derive(Parser, Debug)]
#[command(name = "gedwick", version, about)]
struct Cli {
    /// GEDCOM file to read
    input: PathBuf,

    /// Script to write
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gedwick=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let options = BuildOptions::new().with_output_path(cli.output);

    let records = parse_gedcom_file(&cli.input).with_context(|| format!("Failed to read {}", cli.input.display()))?;
    info!(
        "Read {} individuals and {} families from {}",
        records.num_individuals(),
        records.num_families(),
        cli.input.display()
    );

    let script = build_userdata(&records, &options);
    let tree = parse_userdata(&script).context("Built tree does not read back")?;
    info!("Built tree with {} leaves and {} internal vertices", tree.num_leaves(), tree.num_internal());

    write_userdata_file(options.output_path(), &script)
        .with_context(|| format!("Failed to write {}", options.output_path().display()))?;
    info!("Wrote {}", options.output_path().display());

    Ok(())
}
