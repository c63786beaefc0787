//! mindmend CLI: conversational triage core for mental-health chat.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use mindmend::engine::{Engine, EngineConfig, EngineReply};
use mindmend::intent::IntentCatalogue;
use mindmend::sentiment::{KeywordScorer, SentimentScorer};

#[derive(Parser)]
#[command(name = "mindmend", version, about = "Rule-driven triage engine for support chat")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reply-variant selection (deterministic wording).
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session on stdin/stdout.
    Chat {
        /// User identifier for the session.
        #[arg(long, default_value = "local")]
        user: String,
    },

    /// Classify a single utterance and print the decision as JSON.
    Classify {
        /// The utterance to classify.
        text: String,
    },

    /// List the intent catalogue (intent labels and their patterns).
    Patterns,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }

    match cli.command {
        Commands::Chat { user } => {
            let engine = Engine::new(config)?;
            let scorer = KeywordScorer::new();

            println!("mindmend chat. /reset clears the session, /quit exits.");
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();

            loop {
                write!(stdout, "> ").into_diagnostic()?;
                stdout.flush().into_diagnostic()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
                    break; // EOF
                }
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line {
                    "/quit" => break,
                    "/reset" => {
                        engine.reset(&user);
                        println!("(session cleared)");
                        continue;
                    }
                    _ => {}
                }

                let reply = engine.process(&user, line, scorer.score(line))?;
                match &reply {
                    EngineReply::Crisis(crisis) => {
                        println!("{}", crisis.message);
                        for contact in &crisis.emergency_contacts {
                            println!(
                                "  {} - {} ({})",
                                contact.service, contact.contact, contact.availability
                            );
                        }
                    }
                    EngineReply::Dialogue(dialogue) => {
                        println!("{}", dialogue.directive.text);
                        if let Some(trigger) = &dialogue.directive.trigger {
                            println!("  [resources: {trigger}]");
                        }
                    }
                }
            }
        }

        Commands::Classify { text } => {
            let engine = Engine::new(config)?;
            let scorer = KeywordScorer::new();
            let reply = engine.process("classify", &text, scorer.score(&text))?;
            let json = serde_json::to_string_pretty(&reply).into_diagnostic()?;
            println!("{json}");
        }

        Commands::Patterns => {
            let catalogue = IntentCatalogue::new().into_diagnostic()?;
            println!("Intent patterns ({}):", catalogue.rules().count());
            for (intent, pattern) in catalogue.rules() {
                println!("  {:<22} {pattern}", intent.label());
            }
        }
    }

    Ok(())
}
