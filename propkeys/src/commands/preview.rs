use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use propkeys_codegen::{Generator, RenderConfig, SourceAccess, SourceLayout, TargetName};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct PreviewCommand {
    /// Property files whose keys become constants, in render order
    pub files: Vec<PathBuf>,

    /// Qualified name of the generated container, e.g. 'myapp.config.Keys'
    #[arg(short, long)]
    pub target: TargetName,

    /// Layout of the generated constants: nested, flat-prefixed, or flat-unprefixed
    #[arg(short, long, default_value = "nested")]
    pub layout: SourceLayout,

    /// Access level of the generated constants: public or crate
    #[arg(short, long, default_value = "public")]
    pub access: SourceAccess,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let config = RenderConfig::new(self.target.clone())
            .with_layout(self.layout)
            .with_access(self.access);
        let generator = Generator::new(config);

        match generator.generate(&self.files).unwrap_or_exit() {
            Some(document) => print!("{}", document),
            None => println!("No property files given, nothing to generate"),
        }
        Ok(())
    }
}
