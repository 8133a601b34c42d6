use facequest_core::course::config::QuizConfig;

use crate::app::FacequestApp;
use crate::state::QuizUi;

pub fn show(ui: &mut egui::Ui, app: &mut FacequestApp, cfg: &QuizConfig, state: &mut QuizUi) {
    ui.vertical_centered(|ui| {
        ui.heading(&cfg.title);
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&cfg.question).strong());
        ui.add_space(12.0);

        for (i, option) in cfg.options.iter().enumerate() {
            let selected = state.selected == Some(i);
            let response = ui.selectable_label(selected, option);
            if response.clicked() && !state.submitted {
                state.selected = Some(i);
            }
        }

        ui.add_space(12.0);
        let can_submit = state.selected.is_some() && !state.submitted;
        if ui
            .add_enabled(can_submit, egui::Button::new("Submit"))
            .clicked()
        {
            state.submitted = true;
            let selected = state.selected.unwrap_or(0);
            let correct = selected == cfg.correct;
            app.progress.record_quiz(app.step_index, selected, correct);
        }

        if let Some(feedback) = state.feedback(cfg) {
            ui.add_space(8.0);
            ui.label(feedback);
        } else if state.submitted {
            ui.add_space(8.0);
            let correct = state.selected == Some(cfg.correct);
            ui.label(if correct { "Correct!" } else { "Not quite." });
        }
    });
}
