use crate::app::FacequestApp;

pub fn show(ctx: &egui::Context, app: &mut FacequestApp) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Course...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.open_course_dialog();
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Course", |ui| {
                if ui.button("Restart").clicked() {
                    ui.close();
                    app.restart();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        ui.vertical_centered(|ui| {
            ui.heading(&app.course.title);
            if !app.course.description.is_empty() {
                ui.label(&app.course.description);
            }
        });
        ui.add_space(4.0);
    });
}
