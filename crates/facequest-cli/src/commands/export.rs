use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use facequest_core::course::config::CourseConfig;

#[derive(Args)]
pub struct ExportArgs {
    /// Write the course to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the builtin course as TOML, as a starting point for new
/// courses.
pub fn run(args: &ExportArgs) -> Result<()> {
    let course = CourseConfig::builtin();
    let toml_str = course.to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write course to {}", path.display()))?;
        println!("Builtin course saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
