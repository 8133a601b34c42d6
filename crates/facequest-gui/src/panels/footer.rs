use crate::app::FacequestApp;

pub fn show(ctx: &egui::Context, app: &mut FacequestApp) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let back = ui.add_enabled(app.step_index > 0, egui::Button::new("Back"));
            if back.clicked() {
                app.go_back();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let can_continue = app.can_advance() && !app.is_last_step();
                let next = ui.add_enabled(can_continue, egui::Button::new("Continue"));
                if next.clicked() {
                    app.go_next();
                }

                ui.label(format!(
                    "Step {} of {}",
                    app.step_index + 1,
                    app.course.steps.len()
                ));
            });
        });

        ui.horizontal(|ui| {
            let (correct, answered) = app.progress.score();
            if answered > 0 {
                ui.label(format!("Quiz score: {correct}/{answered}"));
                ui.separator();
            }
            if let Some(ref status) = app.status {
                ui.label(status);
            }
        });

        ui.add_space(4.0);
    });
}
