use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use chartview_match::models::{ChartVideo, RawSearchItem};
use chartview_match::{build_search_query, rank_search_results};

#[derive(Parser)]
#[command(name = "chartview-match")]
#[command(about = "Match and rank chart-view search results for Arcaea songs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the provider search query for a song/difficulty pair
    Query {
        title: String,

        #[arg(long, default_value = "")]
        difficulty: String,
    },
    /// Rank raw search results from a JSON array of items ("-" for stdin)
    Rank {
        input: PathBuf,

        title: String,

        #[arg(long, default_value = "")]
        difficulty: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Query { title, difficulty } => {
            println!("{}", build_search_query(&title, &difficulty));
        }
        Command::Rank {
            input,
            title,
            difficulty,
        } => {
            let raw = read_input(&input)?;
            let items: Vec<RawSearchItem> =
                serde_json::from_str(&raw).context("input is not a JSON array of search items")?;
            let total = items.len();

            let ranked = rank_search_results(items, &title, &difficulty);
            eprintln!("[rank] {}/{} candidates passed", ranked.len(), total);

            let videos: Vec<ChartVideo> = ranked.iter().map(ChartVideo::from_item).collect();
            println!("{}", serde_json::to_string_pretty(&videos)?);
        }
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
