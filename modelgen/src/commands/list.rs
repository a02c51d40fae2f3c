use std::{io, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use modelgen_manifest::Definition;
use modelgen_typescript::Generator;

use super::{UnwrapOrExit, write_manifest};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the definition file (.json or .toml)
    pub definition: PathBuf,

    /// Print the names as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let def = Definition::from_file(&self.definition).unwrap_or_exit();
        let generated = Generator::from(&def).generate();

        if self.json {
            let json = serde_json::to_string_pretty(&generated)
                .wrap_err("Failed to serialize manifest")?;
            println!("{json}");
        } else {
            write_manifest(&mut io::stdout().lock(), &generated)
                .wrap_err("Failed to write manifest")?;
        }
        Ok(())
    }
}
