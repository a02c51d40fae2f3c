mod completions;
mod generate;
mod list;

use std::io::{self, Write};

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use modelgen_typescript::Generated;

/// Extension trait for exiting on definition errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modelgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(version)]
#[command(about = "Generate TypeScript model classes from JSON or TOML definitions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript from a definition file
    Generate(GenerateCommand),

    /// List the class, enum and interface names a definition exports
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Write the exported names grouped by kind, skipping empty groups.
pub(crate) fn write_manifest(out: &mut impl Write, generated: &Generated) -> io::Result<()> {
    let groups = [
        ("Enums", &generated.enums),
        ("Interfaces", &generated.interfaces),
        ("Classes", &generated.classes),
    ];
    if groups.iter().all(|(_, names)| names.is_empty()) {
        return writeln!(out, "No declarations exported");
    }
    for (label, names) in groups {
        if names.is_empty() {
            continue;
        }
        writeln!(out, "{label}:")?;
        for name in names {
            writeln!(out, "  {name}")?;
        }
    }
    Ok(())
}
