pub mod assets;
pub mod config;

use std::fmt;
use std::path::Path;

use tracing::debug;

use self::config::{CourseConfig, StepConfig};
use crate::error::{FacequestError, Result};

/// The course shipped with the application: the face-detection basics
/// sequence, with the originally authored targets, bounds, and hint text.
const BUILTIN_COURSE: &str = include_str!("../../data/face_basics.toml");

/// Non-fatal authoring issue found by [`CourseConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationWarning {
    /// Zero-based step index.
    pub step: usize,
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: {}", self.step + 1, self.message)
    }
}

impl CourseConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let course = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), steps = course.steps.len(), "course loaded");
        Ok(course)
    }

    /// The embedded default course.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_COURSE).expect("builtin course must parse")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn step(&self, index: usize) -> Result<&StepConfig> {
        self.steps.get(index).ok_or(FacequestError::StepIndexOutOfRange {
            index,
            total: self.steps.len(),
        })
    }

    /// Check the course for authoring mistakes.
    ///
    /// Hard errors (a course the app cannot run) come back as `Err`;
    /// tuning oddities that still run come back as warnings. Target
    /// reachability is the author's responsibility, so an unreachable
    /// target only warns.
    pub fn validate(&self) -> Result<Vec<ValidationWarning>> {
        if self.steps.is_empty() {
            return Err(FacequestError::InvalidCourse("course has no steps".into()));
        }

        let mut warnings = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                StepConfig::FeatureMatch(fm) => {
                    if fm.bounds.min_x > fm.bounds.max_x || fm.bounds.min_y > fm.bounds.max_y {
                        return Err(FacequestError::InvalidCourse(format!(
                            "step {}: drag bounds are inverted",
                            i + 1
                        )));
                    }
                    if !fm.bounds.is_normal() {
                        warnings.push(ValidationWarning {
                            step: i,
                            message: "drag bounds extend outside the viewport".into(),
                        });
                    }
                    if !fm.bounds.contains(fm.target) {
                        warnings.push(ValidationWarning {
                            step: i,
                            message: "target is outside the drag bounds and cannot be matched"
                                .into(),
                        });
                    }
                    if fm.threshold <= 0.0 {
                        warnings.push(ValidationWarning {
                            step: i,
                            message: "pass threshold is not positive; any release will match"
                                .into(),
                        });
                    }
                }
                StepConfig::PatternChoice(pc) => {
                    if pc.choices.is_empty() {
                        return Err(FacequestError::InvalidCourse(format!(
                            "step {}: pattern choice has no options",
                            i + 1
                        )));
                    }
                    if !pc.choices.iter().any(|c| c.correct) {
                        warnings.push(ValidationWarning {
                            step: i,
                            message: "no pattern option is marked correct".into(),
                        });
                    }
                }
                StepConfig::Quiz(q) => {
                    if q.options.is_empty() {
                        return Err(FacequestError::InvalidCourse(format!(
                            "step {}: quiz has no options",
                            i + 1
                        )));
                    }
                    if q.correct >= q.options.len() {
                        return Err(FacequestError::InvalidCourse(format!(
                            "step {}: correct answer index {} out of range (options: {})",
                            i + 1,
                            q.correct,
                            q.options.len()
                        )));
                    }
                }
                StepConfig::Reading(_) => {}
            }
        }
        Ok(warnings)
    }
}
