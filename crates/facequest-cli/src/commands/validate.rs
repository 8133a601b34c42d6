use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::Style;
use facequest_core::course::config::CourseConfig;

#[derive(Args)]
pub struct ValidateArgs {
    /// Course TOML file
    pub file: PathBuf,
}

pub fn run(args: &ValidateArgs) -> Result<()> {
    let course = CourseConfig::load(&args.file)?;

    let warn = Style::new().yellow().bold();
    let ok = Style::new().green().bold();

    match course.validate() {
        Ok(warnings) if warnings.is_empty() => {
            println!(
                "{} {} ({} steps)",
                ok.apply_to("OK"),
                course.title,
                course.steps.len()
            );
            Ok(())
        }
        Ok(warnings) => {
            for w in &warnings {
                println!("{} {}", warn.apply_to("warning:"), w);
            }
            println!(
                "{} {} ({} steps, {} warnings)",
                ok.apply_to("OK"),
                course.title,
                course.steps.len(),
                warnings.len()
            );
            Ok(())
        }
        Err(err) => bail!("invalid course: {err}"),
    }
}
