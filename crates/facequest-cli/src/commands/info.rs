use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use facequest_core::course::config::CourseConfig;

use crate::summary::print_course_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Course TOML file (omit for the builtin course)
    pub file: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let course = match args.file {
        Some(ref path) => CourseConfig::load(path)?,
        None => CourseConfig::builtin(),
    };
    print_course_summary(&course);
    Ok(())
}
