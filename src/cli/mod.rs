// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`    — fits the classifier on a labelled corpus
//   2. `evaluate` — scores a saved checkpoint on a corpus
//
// This is also the ONLY layer that prints. The use cases hand
// back structured values (epoch reports, a metrics report) and
// everything the user sees on stdout is formatted here.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EvaluateArgs, TrainArgs};

use crate::ml::evaluator::MetricsReport;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "text-classifier",
    version = "0.1.0",
    about = "Train a linear baseline text classifier on labelled text, then evaluate it."
)]
pub struct Cli {
    /// The subcommand to run (train or evaluate)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Evaluate(args) => run_evaluate(args),
        }
    }
}

/// Handles the `train` subcommand.
/// Resolves the configuration and hands off to Layer 2.
fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on corpus: {}", args.corpus);

    let config = args.resolve_config()?;
    let use_case = TrainUseCase::new(config, args.corpus, args.checkpoint_dir, args.stopwords);
    let reports = use_case.execute()?;

    for r in &reports {
        println!(
            "epoch {:>3} | train_loss={:.4} | val_loss={:.4}",
            r.epoch, r.train_loss, r.val_loss
        );
    }
    println!("Training complete. Checkpoint saved.");
    Ok(())
}

/// Handles the `evaluate` subcommand.
/// Runs the evaluation use case and renders the report.
fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::EvaluateUseCase;

    let use_case = EvaluateUseCase::new(args.corpus, args.checkpoint_dir, args.stopwords);
    let report = use_case.execute()?;
    print_report(&report);
    Ok(())
}

/// Render a MetricsReport for the terminal.
fn print_report(report: &MetricsReport) {
    println!("Accuracy:  {:.4}", report.accuracy);
    println!("Precision: {:.4}", report.precision);
    println!("Recall:    {:.4}", report.recall);
    println!("F1 Score:  {:.4}", report.f1);
    println!();
    println!("Confusion matrix (rows = true, columns = predicted):");
    for row in &report.confusion {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>6}")).collect();
        println!("  {}", cells.join(" "));
    }
}
