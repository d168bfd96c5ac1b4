//! samvad-feed - Query the Samvad forum feed

use anyhow::{Context, Result};
use clap::Parser;

use libsamvad::service::{FeedFilter, ForumService};
use libsamvad::types::{CategoryFilter, Collection, Question, Thought};
use libsamvad::{Config, SeedData};

#[derive(Parser, Debug)]
#[command(name = "samvad-feed")]
#[command(version, about = "Query the forum question and thoughts feeds")]
#[command(long_about = r#"Query the forum feeds with filtering and formatting options.

The feed is loaded from a seed document (--seed, the configured seed file,
or the bundled dataset) and queried in memory; nothing is persisted.

EXAMPLES:
    # Show all questions (default)
    samvad-feed

    # Filter by category
    samvad-feed --category ayurveda
    samvad-feed --category mental-wellness

    # Search question text (case-insensitive substring)
    samvad-feed --search "immunity"

    # Combine filters
    samvad-feed --category ayurveda --search "herbs" --limit 5

    # The expert thoughts feed instead of questions
    samvad-feed --collection thoughts

    # JSON output for scripting
    samvad-feed --format json | jq '.[] | .text'

    # JSONL output (one JSON object per line)
    samvad-feed --format jsonl

    # Export to CSV for analysis
    samvad-feed --format csv > questions.csv

OUTPUT FORMATS:
    text  - Human-readable text (default)
    json  - JSON array (complete data structure)
    jsonl - JSON lines, one object per line (streaming-friendly)
    csv   - CSV with headers (spreadsheet-compatible)

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (seed file not found, malformed seed, etc.)
"#)]
struct Args {
    /// Seed document to load instead of the configured/bundled dataset
    #[arg(long, value_name = "PATH")]
    seed: Option<String>,

    /// Which feed to query
    #[arg(long, default_value = "questions", value_name = "COLLECTION")]
    #[arg(help = "Feed to query: questions or thoughts")]
    collection: String,

    /// Filter questions by category
    #[arg(short, long, default_value = "all", value_name = "CATEGORY")]
    #[arg(help = "Category filter: all, health, ayurveda, nutrition, or mental-wellness")]
    category: String,

    /// Search questions by text
    #[arg(short, long, value_name = "TERM")]
    #[arg(help = "Show questions containing this text (case-insensitive substring match)")]
    search: Option<String>,

    /// Maximum number of entries to return
    #[arg(short, long, default_value = "20", value_name = "N")]
    limit: usize,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl", "csv"])]
    format: String,
}

fn main() -> Result<()> {
    libsamvad::logging::init_default();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let seed = load_seed(args.seed.as_deref())?;
    seed.validate().context("Seed document failed validation")?;

    let collection: Collection = args
        .collection
        .parse()
        .map_err(anyhow::Error::msg)
        .context("Invalid --collection")?;

    let service = ForumService::from_seed(seed);

    match collection {
        Collection::Questions => {
            let filter = FeedFilter {
                category: args
                    .category
                    .parse::<CategoryFilter>()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid --category")?,
                search: args.search.unwrap_or_default(),
            };

            let mut questions = service.query().questions(&filter);
            questions.truncate(args.limit);
            tracing::debug!(count = questions.len(), "questions matched");

            print_questions(&questions, &args.format)
        }
        Collection::Thoughts => {
            let mut thoughts = service.query().thoughts();
            thoughts.truncate(args.limit);

            print_thoughts(&thoughts, &args.format)
        }
    }
}

/// Resolve the seed document: flag > config file > bundled dataset
fn load_seed(flag: Option<&str>) -> Result<SeedData> {
    if let Some(path) = flag {
        return SeedData::load(path).with_context(|| format!("Failed to load seed from {}", path));
    }

    let config = Config::load_or_default().context("Failed to load configuration")?;
    match config.seed.path {
        Some(path) => {
            SeedData::load(&path).with_context(|| format!("Failed to load seed from {}", path))
        }
        None => SeedData::bundled().context("Bundled seed data is malformed"),
    }
}

fn print_questions(questions: &[Question], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(questions)?);
        }
        "jsonl" => {
            for question in questions {
                println!("{}", serde_json::to_string(question)?);
            }
        }
        "csv" => {
            println!("id,category,text,likes,dislikes,answers");
            for q in questions {
                println!(
                    "{},{},{},{},{},{}",
                    q.id,
                    csv_escape(q.category.as_str()),
                    csv_escape(&q.text),
                    q.likes,
                    q.dislikes,
                    q.answers.len()
                );
            }
        }
        _ => {
            if questions.is_empty() {
                println!("No questions found.");
                return Ok(());
            }
            for q in questions {
                println!("[{}] {}", q.category, q.text);
                println!("    id {} | +{} -{} | {} answers", q.id, q.likes, q.dislikes, q.answers.len());
                for a in &q.answers {
                    println!("      - {} (+{} -{})", a.text, a.likes, a.dislikes);
                }
                println!();
            }
        }
    }
    Ok(())
}

fn print_thoughts(thoughts: &[Thought], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(thoughts)?);
        }
        "jsonl" => {
            for thought in thoughts {
                println!("{}", serde_json::to_string(thought)?);
            }
        }
        "csv" => {
            println!("id,doctor,thought,likes");
            for t in thoughts {
                println!(
                    "{},{},{},{}",
                    t.id,
                    csv_escape(&t.doctor),
                    csv_escape(&t.thought),
                    t.likes
                );
            }
        }
        _ => {
            if thoughts.is_empty() {
                println!("No thoughts found.");
                return Ok(());
            }
            for t in thoughts {
                println!("\"{}\"", t.thought);
                println!("    — {} | +{}", t.doctor, t.likes);
                println!();
            }
        }
    }
    Ok(())
}

/// Quote a CSV field when it contains separators, doubling inner quotes
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
