use facequest_core::course::config::PatternChoiceConfig;

use crate::app::FacequestApp;
use crate::assets;
use crate::panels::image_display_size;
use crate::state::PatternUi;

pub fn show(
    ui: &mut egui::Ui,
    app: &FacequestApp,
    cfg: &PatternChoiceConfig,
    state: &mut PatternUi,
) {
    if !state.textures_loaded {
        state.textures_loaded = true;
        let base = app.course_dir.as_deref();
        if let Some(ref authored) = cfg.image {
            state.texture = assets::texture_from_path(ui.ctx(), base, authored, "pattern");
        }
        if let Some(ref authored) = cfg.alt_image {
            state.alt_texture = assets::texture_from_path(ui.ctx(), base, authored, "pattern_alt");
        }
    }

    ui.vertical_centered(|ui| {
        ui.heading(&cfg.title);
        ui.add_space(4.0);
        ui.label(&cfg.prompt);
        ui.add_space(12.0);

        // The computer-vision toggle swaps in the alternate image when one
        // is authored.
        let shown = if state.computer_vision && state.alt_texture.is_some() {
            state.alt_texture.as_ref()
        } else {
            state.texture.as_ref()
        };
        let size = image_display_size(ui, shown, 220.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        match shown {
            Some(tex) => {
                ui.painter().image(
                    tex.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => assets::draw_placeholder(ui, rect, "image unavailable"),
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Human Vision");
            let label = if state.computer_vision { "on" } else { "off" };
            ui.toggle_value(&mut state.computer_vision, label);
            ui.label("Computer Vision");
        });

        ui.add_space(12.0);
        for (i, choice) in cfg.choices.iter().enumerate() {
            let selected = state.selected == Some(i);
            if ui
                .selectable_label(selected, &choice.label)
                .clicked()
            {
                state.selected = Some(i);
            }
        }

        ui.add_space(8.0);
        let feedback = state
            .selected
            .and_then(|i| cfg.choices.get(i))
            .map(|c| c.feedback.as_str())
            .unwrap_or(&cfg.hint);
        ui.label(feedback);
    });
}
