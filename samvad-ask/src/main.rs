//! samvad-ask - Create a forum question from the command line

use std::io::Read;

use clap::Parser;

use libsamvad::service::ForumService;
use libsamvad::types::Category;
use libsamvad::{Config, Result, SamvadError, SeedData};

#[derive(Parser, Debug)]
#[command(name = "samvad-ask")]
#[command(version, about = "Validate and create a forum question", long_about = r#"Validate question text and create the question it would become.

The question is created against an in-memory feed loaded from a seed
document (--seed, the configured seed file, or the bundled dataset), so
the printed question carries a fresh id that no existing entry uses.
Nothing is persisted; this tool exists for scripting and for checking
input before pasting it into the TUI.

EXAMPLES:
    # Create a question (prints it as text)
    samvad-ask "What is Ayurveda?" --category health

    # Read the question text from stdin
    echo "Best herbs for digestion?" | samvad-ask --category ayurveda

    # JSON output for scripting
    samvad-ask "What is Ayurveda?" --format json | jq .id

    # Validate only; exit code tells the story
    samvad-ask --check ""

EXIT CODES:
    0 - Question is valid (and was created in memory)
    1 - Error (seed file not found, malformed seed, etc.)
    3 - Invalid input (empty question text)
"#)]
struct Cli {
    /// Question text (reads from stdin if not provided)
    content: Option<String>,

    /// Category for the new question
    #[arg(short, long, default_value = "health", value_name = "CATEGORY")]
    #[arg(help = "Category: health, ayurveda, nutrition, or mental-wellness")]
    category: String,

    /// Seed document to load instead of the configured/bundled dataset
    #[arg(long, value_name = "PATH")]
    seed: Option<String>,

    /// Validate the text without printing the created question
    #[arg(long)]
    check: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("error")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let content = read_content(cli.content)?;
    let category: Category = cli
        .category
        .parse()
        .map_err(SamvadError::InvalidInput)?;

    let seed = load_seed(cli.seed.as_deref())?;
    let service = ForumService::from_seed(seed);

    let question = service.questions().ask(&content, category)?;
    tracing::debug!(id = question.id, "question created");

    if cli.check {
        return Ok(());
    }

    match cli.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&question)
                .map_err(|e| SamvadError::InvalidInput(format!("Serialization failed: {}", e)))?;
            println!("{}", json);
        }
        _ => {
            println!("[{}] {}", question.category, question.text);
            println!("    id {} | +0 -0 | 0 answers", question.id);
        }
    }

    Ok(())
}

/// Take the question text from the argument or stdin
fn read_content(cli_content: Option<String>) -> Result<String> {
    match cli_content {
        Some(content) => Ok(content),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| SamvadError::InvalidInput(format!("Failed to read stdin: {}", e)))?;
            Ok(buffer)
        }
    }
}

/// Resolve the seed document: flag > config file > bundled dataset
fn load_seed(flag: Option<&str>) -> Result<SeedData> {
    if let Some(path) = flag {
        return SeedData::load(path);
    }

    let config = Config::load_or_default()?;
    match config.seed.path {
        Some(path) => SeedData::load(&path),
        None => SeedData::bundled(),
    }
}
