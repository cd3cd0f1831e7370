//! Command-line prover: reads a goal from stdin and tries to derive it from
//! the axiom schemas in a file.

use clap::Parser;
use hilbert::{load_axioms, parse_formula_with_limit, ProverConfig, ProverError, Prover};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hilbert")]
#[command(about = "Prove a propositional goal from Hilbert-style axiom schemas")]
#[command(version)]
struct Cli {
    /// Axiom file: one schema per line over meta-variables A, B and C
    axioms: PathBuf,

    /// Toggles: +axioms, -history, +neg, +self_impl, +backward, +json
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    toggles: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool, ProverError> {
    let mut config = ProverConfig::default();
    for toggle in &cli.toggles {
        if !config.apply_toggle(toggle) {
            warn!(toggle = %toggle, "ignoring unknown toggle");
        }
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        return Err(ProverError::EmptyGoal);
    }
    let goal = parse_formula_with_limit(line, config.parse_limits())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut prover = Prover::new(goal, config);
    prover.write_terms(&mut out)?;

    let templates = load_axioms(&cli.axioms, prover.config().parse_limits())?;
    let outcome = prover.prove(&templates, &mut out)?;

    if prover.config().json {
        let json = serde_json::to_string_pretty(&prover.to_json())
            .map_err(|e| ProverError::Io(e.into()))?;
        writeln!(out, "{}", json)?;
    }
    out.flush()?;

    Ok(outcome.is_proved())
}
