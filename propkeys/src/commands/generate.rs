use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use propkeys_codegen::{
    Generator, RenderConfig, SourceAccess, SourceLayout, TargetName, WriteOutcome,
};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Property files whose keys become constants, in render order
    pub files: Vec<PathBuf>,

    /// Qualified name of the generated container, e.g. 'myapp.config.Keys'
    #[arg(short, long)]
    pub target: TargetName,

    /// Directory the generated file is written under
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Layout of the generated constants: nested, flat-prefixed, or flat-unprefixed
    #[arg(short, long, default_value = "nested")]
    pub layout: SourceLayout,

    /// Access level of the generated constants: public or crate
    #[arg(short, long, default_value = "public")]
    pub access: SourceAccess,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = RenderConfig::new(self.target.clone())
            .with_layout(self.layout)
            .with_access(self.access);
        let generator = Generator::new(config);

        match generator.write(&self.files, &self.output_dir).unwrap_or_exit() {
            WriteOutcome::Written(path) => {
                println!(
                    "Generated {} ({} layout, {} property files)",
                    path.display(),
                    self.layout,
                    self.files.len()
                );
            }
            WriteOutcome::Skipped => {
                println!("No property files given, nothing to generate");
            }
        }
        Ok(())
    }
}
