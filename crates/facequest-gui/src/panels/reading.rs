use facequest_core::course::config::ReadingConfig;

use crate::app::FacequestApp;
use crate::assets;
use crate::panels::image_display_size;
use crate::state::ReadingUi;

pub fn show(ui: &mut egui::Ui, app: &FacequestApp, cfg: &ReadingConfig, state: &mut ReadingUi) {
    if !state.texture_loaded {
        state.texture_loaded = true;
        if let Some(ref authored) = cfg.image {
            state.texture = assets::texture_from_path(
                ui.ctx(),
                app.course_dir.as_deref(),
                authored,
                "reading",
            );
        }
    }

    ui.vertical_centered(|ui| {
        ui.heading(&cfg.title);
        if let Some(ref tip) = cfg.tip {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(tip).italics());
        }
        ui.add_space(12.0);

        if cfg.image.is_some() {
            let size = image_display_size(ui, state.texture.as_ref(), 320.0);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            match state.texture {
                Some(ref tex) => {
                    ui.painter().image(
                        tex.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                None => assets::draw_placeholder(ui, rect, "image unavailable"),
            }
            ui.add_space(12.0);
        }

        ui.label(&cfg.body);
    });
}
