mod cli;
mod demos;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use atomtyper::core::models::system::MoleculeGraph;
use atomtyper::engine::rules;
use atomtyper::engine::typer::{TypingReport, assign_atom_types};
use clap::Parser;
use tracing::info;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    if cli.list {
        for name in demos::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(name) = cli.molecule else {
        // Unreachable: clap requires a molecule unless --list is given.
        return Ok(());
    };
    let graph = demos::build(&name).ok_or_else(|| CliError::UnknownMolecule(name.clone()))?;
    info!(molecule = name.as_str(), atoms = graph.atom_count(), "typing molecule");

    let report = assign_atom_types(&graph)?;
    print_report(&graph, &report);
    Ok(())
}

fn print_report(graph: &MoleculeGraph, report: &TypingReport) {
    println!(
        "{:<8} {:<4} {:<44} {:<20} {}",
        "atom", "kind", "type", "whitelist", "blacklist"
    );
    for (id, atom) in graph.atoms_iter() {
        let Some(labels) = report.labels(id) else {
            println!("{:<8} {:<4} (ghost, skipped)", atom.name, atom.kind.symbol());
            continue;
        };
        let resolved = report.resolved(id);
        let type_column = if resolved.is_empty() {
            "(untyped)".to_string()
        } else {
            resolved
                .iter()
                .map(|id| match rules::describe(id) {
                    Some(description) => format!("{id} ({description})"),
                    None => id.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; ")
        };
        println!(
            "{:<8} {:<4} {:<44} {:<20} {}",
            atom.name,
            atom.kind.symbol(),
            type_column,
            labels.whitelist().to_string(),
            labels.blacklist()
        );
    }

    let status = if report.converged() {
        "converged"
    } else {
        "hit the pass cap"
    };
    println!(
        "\n{} atoms, {} passes ({status})",
        graph.atom_count(),
        report.passes()
    );
}
