// Tutor Core CLI Entry Point
// Runs the question analyzer and helper tools from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tutor_core::analysis::{Language, QuestionAnalyzer};
use tutor_core::tools::{describe_term, query_fingerprint, simple_calculator};
use tutor_core::{logging, TutorConfig, TutorError};

#[derive(Parser)]
#[command(name = "tutor-core")]
#[command(about = "Bilingual question analysis for the tutoring assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more student questions
    Analyze {
        /// Questions to analyze
        #[arg(required = true)]
        questions: Vec<String>,

        /// Output as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an arithmetic expression
    Calc {
        /// Expression, e.g. "15 * 8"
        expression: String,
    },

    /// Look up a quick definition
    Define {
        term: String,
    },

    /// Print the cache fingerprint of a query
    Fingerprint {
        query: String,

        /// bengali, english or mixed
        #[arg(long)]
        language: Option<Language>,
    },
}

fn main() -> Result<()> {
    // --help and usage errors must not depend on the environment
    let cli = Cli::parse();

    dotenv::dotenv().ok();

    let config = TutorConfig::from_env().context("Failed to load configuration")?;
    logging::init(&config).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Analyze { questions, json } => {
            let analyzer = QuestionAnalyzer::from_config(&config);
            info!("Analyzing {} question(s)", questions.len());

            for question in &questions {
                let analysis = analyzer.analyze(question);
                if json {
                    let rendered = serde_json::to_string_pretty(&analysis)
                        .map_err(TutorError::from)
                        .context("Failed to render analysis")?;
                    println!("{}", rendered);
                } else {
                    println!("{}", question);
                    println!("  {}", analysis.summary());
                    for expression in &analysis.formatted_expressions {
                        println!("  Expression: {}", expression);
                    }
                    for suggestion in &analysis.completeness.suggestions {
                        println!("  Suggestion: {}", suggestion);
                    }
                    for follow_up in &analysis.clarifying_questions {
                        println!("  ? {}", follow_up);
                    }
                }
            }
        }

        Commands::Calc { expression } => {
            println!("{}", simple_calculator(&expression));
        }

        Commands::Define { term } => {
            println!("{}", describe_term(&term));
        }

        Commands::Fingerprint { query, language } => {
            println!("{}", query_fingerprint(&query, language));
        }
    }

    Ok(())
}
