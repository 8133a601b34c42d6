use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MARKER_FRACTION, DEFAULT_PASS_THRESHOLD};
use crate::exercise::session::{HintText, MatchSession};
use crate::geometry::{BoundsFrac, FracPoint};

/// A complete authored course: an ordered sequence of lesson steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub steps: Vec<StepConfig>,
}

/// One lesson step. The `kind` field selects the variant in TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepConfig {
    Reading(ReadingConfig),
    FeatureMatch(FeatureMatchConfig),
    PatternChoice(PatternChoiceConfig),
    Quiz(QuizConfig),
}

impl StepConfig {
    pub fn title(&self) -> &str {
        match self {
            StepConfig::Reading(s) => &s.title,
            StepConfig::FeatureMatch(s) => &s.title,
            StepConfig::PatternChoice(s) => &s.title,
            StepConfig::Quiz(s) => &s.title,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            StepConfig::Reading(_) => "reading",
            StepConfig::FeatureMatch(_) => "feature match",
            StepConfig::PatternChoice(_) => "pattern choice",
            StepConfig::Quiz(_) => "quiz",
        }
    }
}

/// A static lesson page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReadingConfig {
    pub title: String,
    /// Short callout shown above the body, e.g. "Eyes + Ears + Nose = Face?".
    #[serde(default)]
    pub tip: Option<String>,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A drag-the-filter exercise: the marker must be released close to the
/// authored target on both axes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureMatchConfig {
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Optional filter overlay image for the marker; a painted marker is
    /// used where this is absent or unsupported.
    #[serde(default)]
    pub marker_image: Option<String>,
    /// Marker size as fractions of the viewport width and height.
    #[serde(default = "default_marker_fraction")]
    pub marker_fraction: [f32; 2],
    /// Correct feature location, as fractions of the viewport.
    pub target: FracPoint,
    /// Drag bounds; authored per exercise, not necessarily symmetric around
    /// the target.
    #[serde(default)]
    pub bounds: BoundsFrac,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    pub hints: HintText,
}

impl FeatureMatchConfig {
    /// Build a fresh exercise instance from this step.
    pub fn session(&self) -> MatchSession {
        MatchSession::new(self.target, self.bounds, self.threshold, self.hints.clone())
    }
}

fn default_threshold() -> f32 {
    DEFAULT_PASS_THRESHOLD
}

fn default_marker_fraction() -> [f32; 2] {
    DEFAULT_MARKER_FRACTION
}

/// Pick-the-matching-pattern interactive, with an optional alternate image
/// toggled between "human vision" and "computer vision" views.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternChoiceConfig {
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Image shown while the computer-vision toggle is on.
    #[serde(default)]
    pub alt_image: Option<String>,
    pub choices: Vec<PatternChoiceOption>,
    /// Shown before any choice is made.
    pub hint: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternChoiceOption {
    pub label: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Feedback shown while this option is selected.
    pub feedback: String,
    #[serde(default)]
    pub correct: bool,
}

/// A multiple-choice question with an explicit submit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizConfig {
    pub title: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    #[serde(default)]
    pub feedback_correct: Option<String>,
    #[serde(default)]
    pub feedback_wrong: Option<String>,
}
