//! # TharPanya — Lorekeeper CLI
//!
//! Thin host around `tharpanya-lore`: loads the corpus once per process and
//! answers questions against it.
//!
//! Usage:
//!   tharpanya ask "Qualia คืออะไร"            # Answer text only
//!   tharpanya rank "KBY SOA" --top-k 5 --json  # Scored matches
//!   tharpanya stats                            # Corpus summary
//!   tharpanya bench --runs 10000               # Average answer latency
//!   tharpanya init                             # Write default config

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use tharpanya_core::{LoreFormat, TharPanyaConfig};
use tharpanya_lore::{AnswerResolver, LoreCorpus, LoreStore};

#[derive(Parser)]
#[command(
    name = "tharpanya",
    version,
    about = "📜 TharPanya — answers questions from the KBY lore"
)]
struct Cli {
    /// Config file (default: ~/.tharpanya/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lore file (overrides config)
    #[arg(short, long)]
    lore: Option<String>,

    /// Lore file format: segmented | lines (overrides config)
    #[arg(short, long)]
    format: Option<LoreFormat>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a question
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show the best-scoring entries for a question
    Rank {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        /// Number of matches to show (default: config top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show corpus statistics
    Stats,
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Measure average answer latency
    Bench {
        #[arg(default_value = "KBY SpiralQuest คืออะไร?")]
        question: String,
        #[arg(short, long, default_value = "10000")]
        runs: u32,
    },
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "tharpanya=debug,tharpanya_lore=debug,tharpanya_core=debug"
    } else {
        "tharpanya=info,tharpanya_lore=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Command::Init { force } = cli.command {
        return init_config(cli.config.as_deref(), force);
    }

    let mut config = match &cli.config {
        Some(path) => TharPanyaConfig::load_from(path)?,
        None => TharPanyaConfig::load()?,
    };
    if let Some(format) = cli.format {
        config.lore.format = format;
    }

    let resolver = AnswerResolver::from_config(&config.lore);
    let store = LoreStore::from_config(&config.lore);
    let corpus = load(&store, &cli, &config)?;

    match cli.command {
        Command::Ask { question } => {
            println!("{}", resolver.answer(&question.join(" "), &corpus));
        }
        Command::Rank { question, top_k, json } => {
            let k = top_k.unwrap_or(config.lore.top_k);
            let ranked = resolver.rank(&question.join(" "), &corpus, k);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else if ranked.is_empty() {
                println!("{}", tharpanya_lore::FALLBACK_ANSWER);
            } else {
                for m in &ranked {
                    println!("#{:<4} score {:>4}  {}", m.index, m.score, m.entry.question());
                    println!("       {}", m.answer());
                }
            }
        }
        Command::Stats => {
            println!("📜 Lore entries:  {}", corpus.len());
            println!("🔑 Keywords:      {}", corpus.keyword_count());
            println!("📂 Format:        {}", store.format());
            println!("🚫 Stop words:    {}", resolver.filter().len());
            println!("🎯 Threshold:     {}", resolver.matcher().threshold());
        }
        Command::Bench { question, runs } => {
            let runs = runs.max(1);
            println!("⏱️  Measuring {runs} runs of {question:?}...");
            let started = Instant::now();
            for _ in 0..runs {
                std::hint::black_box(resolver.answer(std::hint::black_box(&question), &corpus));
            }
            let avg_us = started.elapsed().as_secs_f64() * 1_000_000.0 / f64::from(runs);
            println!("   Runs:    {runs}");
            println!("   Average: {avg_us:.4} µs");
        }
        // Handled before the corpus is loaded.
        Command::Init { .. } => {}
    }

    Ok(())
}

/// An explicit `--lore` must exist; the configured default fails soft.
fn load(store: &LoreStore, cli: &Cli, config: &TharPanyaConfig) -> Result<LoreCorpus> {
    match &cli.lore {
        Some(path) => Ok(store.try_load(std::path::Path::new(&expand_path(path)))?),
        None => Ok(store.load(std::path::Path::new(&expand_path(&config.lore.path)))),
    }
}

fn init_config(path: Option<&std::path::Path>, force: bool) -> Result<()> {
    let target = path.map(PathBuf::from).unwrap_or_else(TharPanyaConfig::default_path);
    if target.exists() && !force {
        anyhow::bail!("Config already exists at {} (use --force to overwrite)", target.display());
    }
    let config = TharPanyaConfig::default();
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    println!("✅ Wrote default config to {}", target.display());
    Ok(())
}
