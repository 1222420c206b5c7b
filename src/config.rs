use crate::logging::LogFormat;
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Event list, relative to the working directory.
pub const INPUT_PATH: &str = "tools/events.rs";
/// Generated module, written into the working directory.
pub const OUTPUT_FILE_NAME: &str = "nextevent.rs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub root: PathBuf,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    /// Resolves the fixed input and output locations against `root`.
    pub fn in_dir<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            input_path: root.join(INPUT_PATH),
            output_path: root.join(OUTPUT_FILE_NAME),
            root,
        }
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.root.exists(),
            "working directory {:?} does not exist",
            self.root
        );
        anyhow::ensure!(
            self.root.is_dir(),
            "working directory {:?} is not a directory",
            self.root
        );
        Ok(())
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "nextevent",
    about = "Generate next-event accessors from tools/events.rs into nextevent.rs",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        help = "Verify nextevent.rs is up to date without writing it; exit non-zero if not"
    )]
    pub check: bool,

    #[arg(
        long,
        env = "NEXTEVENT_LOG_FORMAT",
        value_enum,
        value_name = "FORMAT",
        help = "Diagnostic output format"
    )]
    pub log_format: Option<LogFormat>,
}
