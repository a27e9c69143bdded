use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use medassist_agents::{ChatTurn, GeneratorConfig, ResponseGenerator, DISEASE_DATA_ENV, LOCALE_ENV};
use medassist_catalog::DiseaseCatalog;
use medassist_core::{parse_intent_label, ConversationContext};
use medassist_observability::{init_tracing, ReplyMetrics};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "medassist")]
#[command(about = "Template-driven replies for a medical assistant chat")]
#[command(after_help = "Environment: MEDASSIST_DISEASE_DATA, MEDASSIST_LOCALE (flags take precedence)")]
struct Cli {
    /// JSON dataset with a `diseases` list.
    #[arg(long, global = true)]
    disease_data: Option<PathBuf>,

    /// `ar` (default) or `en`.
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a single classified message.
    Reply {
        #[arg(long)]
        intent: String,
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
        #[arg(long = "disease")]
        diseases: Vec<String>,
        #[arg(default_value = "")]
        message: String,
    },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Read chat turns as JSON lines on stdin, write replies as JSON lines.
    Batch,
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    List,
    Show { name: String },
}

fn main() -> Result<()> {
    init_tracing("medassist");
    let cli = Cli::parse();

    let config = GeneratorConfig::from_env()
        .with_context(|| format!("invalid {LOCALE_ENV}"))?
        .with_disease_data(cli.disease_data)
        .with_locale(cli.locale.as_deref())
        .context("invalid --locale")?;

    match cli.command {
        Command::Reply {
            intent,
            symptoms,
            diseases,
            message,
        } => {
            let generator = ResponseGenerator::from_config(&config);
            let context = ConversationContext::new()
                .with_symptoms(symptoms)
                .with_diseases(diseases);
            let intent = parse_intent_label(Some(intent.as_str()));
            let reply = generator.generate(&message, intent, &context);
            println!("{reply}");
        }
        Command::Catalog { command } => {
            let catalog = load_catalog_strict(&config)?;
            match command {
                CatalogCommand::List => {
                    for name in catalog.names() {
                        println!("{name}");
                    }
                }
                CatalogCommand::Show { name } => println!("{}", show_record(&catalog, &name)?),
            }
        }
        Command::Batch => run_batch(&config)?,
    }

    Ok(())
}

fn load_catalog_strict(config: &GeneratorConfig) -> Result<DiseaseCatalog> {
    let Some(path) = config.disease_data.as_deref() else {
        bail!("--disease-data (or {DISEASE_DATA_ENV}) is required for catalog commands");
    };

    let catalog = DiseaseCatalog::load(path)
        .with_context(|| format!("failed loading disease catalog from {}", path.display()))?;
    catalog.stats().log();
    Ok(catalog)
}

fn show_record(catalog: &DiseaseCatalog, name: &str) -> Result<String> {
    let Some(record) = catalog.lookup(name) else {
        bail!("no disease named {name:?} in the catalog");
    };
    Ok(serde_json::to_string_pretty(record)?)
}

fn run_batch(config: &GeneratorConfig) -> Result<()> {
    let metrics = ReplyMetrics::shared();
    let generator = ResponseGenerator::from_config(config).with_metrics(Arc::clone(&metrics));

    let stdin = io::stdin();
    let stdout = io::stdout();
    process_batch(&generator, stdin.lock(), stdout.lock())?;

    let snapshot = metrics.snapshot();
    info!(
        replies = snapshot.replies_total,
        catalog_hits = snapshot.catalog_hits_total,
        catalog_misses = snapshot.catalog_misses_total,
        clarifications = snapshot.clarification_total,
        "batch finished"
    );

    Ok(())
}

/// One JSON reply line per non-blank input line; stops at the first malformed turn.
fn process_batch<R: BufRead, W: Write>(
    generator: &ResponseGenerator,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut answered = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let turn: ChatTurn = serde_json::from_str(&line)
            .with_context(|| format!("invalid chat turn on line {}", idx + 1))?;
        let reply = generator.handle_turn(&turn);

        serde_json::to_writer(&mut output, &reply)?;
        writeln!(output)?;
        answered += 1;
    }
    output.flush()?;

    Ok(answered)
}
