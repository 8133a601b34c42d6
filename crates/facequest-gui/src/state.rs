use facequest_core::course::config::{QuizConfig, StepConfig};
use facequest_core::exercise::session::MatchSession;

/// UI state for the step currently on screen. Rebuilt whenever the user
/// navigates, so every exercise instance resets on remount.
pub enum StepUi {
    Reading(ReadingUi),
    FeatureMatch(ExerciseUi),
    PatternChoice(PatternUi),
    Quiz(QuizUi),
}

impl StepUi {
    pub fn for_step(step: &StepConfig) -> Self {
        match step {
            StepConfig::Reading(_) => StepUi::Reading(ReadingUi::default()),
            StepConfig::FeatureMatch(fm) => StepUi::FeatureMatch(ExerciseUi::new(fm.session())),
            StepConfig::PatternChoice(_) => StepUi::PatternChoice(PatternUi::default()),
            StepConfig::Quiz(_) => StepUi::Quiz(QuizUi::default()),
        }
    }
}

#[derive(Default)]
pub struct ReadingUi {
    pub texture: Option<egui::TextureHandle>,
    pub texture_loaded: bool,
}

/// State for one drag-to-match exercise instance.
pub struct ExerciseUi {
    pub session: MatchSession,
    /// Live pointer position while a drag is in progress (screen coords).
    pub drag_pos: Option<egui::Pos2>,
    pub texture: Option<egui::TextureHandle>,
    pub marker_texture: Option<egui::TextureHandle>,
    pub textures_loaded: bool,
}

impl ExerciseUi {
    pub fn new(session: MatchSession) -> Self {
        Self {
            session,
            drag_pos: None,
            texture: None,
            marker_texture: None,
            textures_loaded: false,
        }
    }
}

#[derive(Default)]
pub struct PatternUi {
    pub selected: Option<usize>,
    /// Human vision (false) vs computer vision (true) image toggle.
    pub computer_vision: bool,
    pub texture: Option<egui::TextureHandle>,
    pub alt_texture: Option<egui::TextureHandle>,
    pub textures_loaded: bool,
}

#[derive(Default)]
pub struct QuizUi {
    pub selected: Option<usize>,
    pub submitted: bool,
}

impl QuizUi {
    pub fn feedback<'a>(&self, quiz: &'a QuizConfig) -> Option<&'a str> {
        if !self.submitted {
            return None;
        }
        let correct = self.selected == Some(quiz.correct);
        if correct {
            quiz.feedback_correct.as_deref()
        } else {
            quiz.feedback_wrong.as_deref()
        }
    }
}
