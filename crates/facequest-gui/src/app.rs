use std::path::PathBuf;

use facequest_core::capability::RenderCaps;
use facequest_core::course::config::{CourseConfig, StepConfig};
use facequest_core::progress::CourseProgress;
use tracing::info;

use crate::panels;
use crate::state::StepUi;

pub struct FacequestApp {
    pub course: CourseConfig,
    /// Directory of the loaded course file; authored asset paths resolve
    /// against it. None for the builtin course.
    pub course_dir: Option<PathBuf>,
    pub progress: CourseProgress,
    pub caps: RenderCaps,
    pub step_index: usize,
    /// UI state for the current step, keyed by index so navigation rebuilds it.
    step_ui: Option<(usize, StepUi)>,
    pub status: Option<String>,
    pub show_about: bool,
}

impl FacequestApp {
    pub fn new(_ctx: &egui::Context) -> Self {
        Self {
            course: CourseConfig::builtin(),
            course_dir: None,
            progress: CourseProgress::new(),
            caps: RenderCaps::detect(),
            step_index: 0,
            step_ui: None,
            status: None,
            show_about: false,
        }
    }

    /// Take the current step's UI state, building a fresh instance if the
    /// user navigated since it was last shown.
    pub fn take_step_ui(&mut self, step: &StepConfig) -> StepUi {
        match self.step_ui.take() {
            Some((index, ui)) if index == self.step_index => ui,
            _ => StepUi::for_step(step),
        }
    }

    pub fn put_step_ui(&mut self, ui: StepUi) {
        self.step_ui = Some((self.step_index, ui));
    }

    /// Whether the Continue button is enabled for the current step.
    pub fn can_advance(&self) -> bool {
        let Some((index, ui)) = &self.step_ui else {
            return false;
        };
        if *index != self.step_index {
            return false;
        }
        match ui {
            StepUi::Reading(_) | StepUi::PatternChoice(_) => true,
            StepUi::FeatureMatch(ex) => ex.session.matched(),
            StepUi::Quiz(q) => q.submitted,
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 >= self.course.steps.len()
    }

    pub fn go_next(&mut self) {
        if !self.is_last_step() {
            self.step_index += 1;
            self.step_ui = None;
        }
    }

    pub fn go_back(&mut self) {
        if self.step_index > 0 {
            self.step_index -= 1;
            self.step_ui = None;
        }
    }

    pub fn restart(&mut self) {
        self.step_index = 0;
        self.step_ui = None;
        self.progress.reset();
        self.status = Some("Course restarted".into());
    }

    pub fn open_course_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Course", &["toml"])
            .pick_file();
        let Some(path) = picked else { return };
        self.open_course(path);
    }

    fn open_course(&mut self, path: PathBuf) {
        match CourseConfig::load(&path) {
            Ok(course) => match course.validate() {
                Ok(warnings) => {
                    info!(path = %path.display(), "course opened");
                    self.status = if warnings.is_empty() {
                        Some(format!("Opened {}", course.title))
                    } else {
                        Some(format!(
                            "Opened {} ({} authoring warnings)",
                            course.title,
                            warnings.len()
                        ))
                    };
                    self.course_dir = path.parent().map(|p| p.to_path_buf());
                    self.course = course;
                    self.step_index = 0;
                    self.step_ui = None;
                    self.progress.reset();
                }
                Err(err) => {
                    self.status = Some(format!("Invalid course: {err}"));
                }
            },
            Err(err) => {
                self.status = Some(format!("Failed to open course: {err}"));
            }
        }
    }
}

impl eframe::App for FacequestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::header::show(ctx, self);
        panels::footer::show(ctx, self);
        panels::step::show(ctx, self);

        if self.show_about {
            egui::Window::new("About FaceQuest")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("FaceQuest");
                        ui.label("Learn how computers find faces");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
