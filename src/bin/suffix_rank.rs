use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "suffix_rank",
    about = "rank suffixes of a text via Ukkonen's suffix tree"
)]
struct Args {
    /// File holding the text.
    string_file: PathBuf,

    /// File holding 1-based suffix start offsets, one per line.
    positions_file: PathBuf,

    /// Where to write the ranks, one per line.
    #[clap(short = 'o', long, default_value = "output_q1.txt")]
    output: PathBuf,

    /// Cross-check the suffix array against divsufsort.
    #[clap(long)]
    verify: bool,

    /// Print the suffix tree to stdout.
    #[clap(long)]
    dump_tree: bool,
}

fn read_text(path: &Path) -> Result<Vec<u8>> {
    let mut text = fs::read(path)
        .with_context(|| format!("Failed to read the input file {}", path.display()))?;
    if text.last() == Some(&b'\n') {
        text.pop();
        if text.last() == Some(&b'\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn read_offsets(path: &Path) -> Result<Vec<usize>> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the positions file {}", path.display()))?;
    let mut offsets = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let offset = line.parse::<usize>().with_context(|| {
            format!("Failed to parse {:?} at {}:{}", line, path.display(), i + 1)
        })?;
        offsets.push(offset);
    }
    Ok(offsets)
}

fn write_ranks(path: &Path, ranks: &[usize]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create the output file {}", path.display()))?;
    let mut out = io::BufWriter::new(file);
    for rank in ranks {
        writeln!(out, "{}", rank)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let text = read_text(&args.string_file)?;
    let offsets = read_offsets(&args.positions_file)?;

    let start = Instant::now();
    let tree = sufrank::build(&text)
        .with_context(|| format!("Failed to index {}", args.string_file.display()))?;
    let sa = tree.suffix_array();
    info!(
        len = tree.len(),
        nodes = tree.node_count(),
        elapsed = start.elapsed().as_secs_f64(),
        "suffix array ready"
    );

    if args.verify {
        let expected = sufrank::sa::reference_suffix_array(tree.text());
        if let Some(i) = sa.iter().zip(&expected).position(|(a, b)| a != b) {
            bail!(
                "suffix array differs from divsufsort at rank {}: {} != {}",
                i + 1,
                sa[i],
                expected[i]
            );
        }
        info!("suffix array agrees with divsufsort");
    }

    if args.dump_tree {
        tree.dump(&mut io::stdout().lock())?;
    }

    let rank_map = sufrank::RankMap::from_suffix_array(&sa);
    let ranks = rank_map.ranks_of_offsets(&offsets)?;
    write_ranks(&args.output, &ranks)?;
    info!(queries = ranks.len(), output = %args.output.display(), "ranks written");
    Ok(())
}
