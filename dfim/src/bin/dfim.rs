use std::fmt::Display;
use std::hash::Hash;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dfim::dataset::{self, Dataset};
use dfim::fp::DEFAULT_MIN_SUPPORT;
use dfim::{DisjunctiveMiner, MiningConfig};

/// Disjunctive frequent itemset mining: DFS based algorithm
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the dataset file, one transaction per line
    dataset: PathBuf,

    /// Minimum itemset support
    #[arg(short = 's', long = "minimum-support", default_value_t = DEFAULT_MIN_SUPPORT)]
    min_support: usize,

    /// Parse every item as an integer
    #[arg(short = 'n', long)]
    numeric: bool,

    /// Print every frequent itemset with its support
    #[arg(long)]
    show: bool,
}

fn run<T>(transactions: &[Vec<T>], config: &MiningConfig, show: bool) -> Result<usize>
where
    T: Eq + Hash + Ord + Clone + Display,
{
    let miner = DisjunctiveMiner::new(transactions);
    let result = miner.mine(config)?;

    if show {
        for (itemset, support) in result.itemsets() {
            let items: Vec<String> = itemset.iter().map(ToString::to_string).collect();
            println!("[{}]: {}", items.join(", "), support);
        }
    }

    Ok(result.len())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let args = Args::parse();
    let config = MiningConfig::new(args.min_support)?;

    println!("-------------------------------------------------------------------");
    println!("     Disjunctive Frequent Itemset Mining: DFS Based Algorithm");
    println!("-------------------------------------------------------------------");
    println!("Parameters are as follows....");
    println!("Dataset File Path: {}", args.dataset.display());
    println!("Minimum Support Threshold: {}", config.min_support);
    println!("-------------------------------------------------------------------");

    let dataset = dataset::load(&args.dataset, args.numeric)
        .with_context(|| format!("ERROR: cannot load dataset {}", args.dataset.display()))?;

    let found = match &dataset {
        Dataset::Text(transactions) => run(transactions, &config, args.show)?,
        Dataset::Numeric(transactions) => run(transactions, &config, args.show)?,
    };

    println!("Total {} frequent ORed Itemsets found.", found);
    println!("{} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
