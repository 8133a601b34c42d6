use facequest_core::course::config::StepConfig;

use crate::app::FacequestApp;
use crate::panels;
use crate::state::StepUi;

pub fn show(ctx: &egui::Context, app: &mut FacequestApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(step) = app.course.steps.get(app.step_index).cloned() else {
            ui.centered_and_justified(|ui| {
                ui.label("This course has no steps");
            });
            return;
        };

        let mut step_ui = app.take_step_ui(&step);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            match (&step, &mut step_ui) {
                (StepConfig::Reading(cfg), StepUi::Reading(state)) => {
                    panels::reading::show(ui, app, cfg, state);
                }
                (StepConfig::FeatureMatch(cfg), StepUi::FeatureMatch(state)) => {
                    panels::feature_match::show(ui, app, cfg, state);
                }
                (StepConfig::PatternChoice(cfg), StepUi::PatternChoice(state)) => {
                    panels::pattern_choice::show(ui, app, cfg, state);
                }
                (StepConfig::Quiz(cfg), StepUi::Quiz(state)) => {
                    panels::quiz::show(ui, app, cfg, state);
                }
                // take_step_ui builds the matching variant; this arm is
                // unreachable in practice.
                _ => {}
            }
        });

        app.put_step_ui(step_ui);
    });
}
