use std::{fs, io, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use modelgen_manifest::{Definition, Options};
use modelgen_typescript::Generator;
use tracing::info;

use super::{UnwrapOrExit, write_manifest};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the definition file (.json or .toml)
    pub definition: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact output (overrides `prettify`)
    #[arg(long)]
    pub compact: bool,

    /// Indent width in spaces (overrides `tabSize`)
    #[arg(long)]
    pub tab_size: Option<u8>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut def = Definition::from_file(&self.definition).unwrap_or_exit();
        self.apply_overrides(&mut def.options);

        let generated = Generator::from(&def).generate();

        match &self.output {
            Some(path) => {
                fs::write(path, &generated.output)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = generated.output.len(), "wrote output");

                eprintln!("Generated {}", path.display());
                write_manifest(&mut io::stderr().lock(), &generated)
                    .wrap_err("Failed to write manifest")?;
            }
            None => println!("{}", generated.output),
        }
        Ok(())
    }

    fn apply_overrides(&self, options: &mut Options) {
        if self.compact {
            options.prettify = false;
        }
        if let Some(tab_size) = self.tab_size {
            options.tab_size = tab_size;
        }
    }
}
