use facequest_core::course::config::FeatureMatchConfig;
use facequest_core::geometry::{Point, ViewportRect};

use crate::app::FacequestApp;
use crate::assets;
use crate::panels::image_display_size;
use crate::state::ExerciseUi;

pub fn show(ui: &mut egui::Ui, app: &FacequestApp, cfg: &FeatureMatchConfig, ex: &mut ExerciseUi) {
    load_textures(ui.ctx(), app, cfg, ex);

    ui.vertical_centered(|ui| {
        ui.heading(&cfg.title);
        ui.add_space(4.0);
        ui.label(&cfg.prompt);
        ui.add_space(12.0);

        let size = image_display_size(ui, ex.texture.as_ref(), 360.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

        match ex.texture {
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

        // Layout probe: report the measured container box every pass so the
        // target and bounds track the on-screen size.
        ex.session.set_viewport(ViewportRect::new(
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
        ));

        handle_marker(ui, app, cfg, ex, rect);

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!(
                "Current Similarity Match: {}",
                ex.session.last_verdict().score
            ))
            .strong(),
        );
        ui.add_space(4.0);
        ui.label(ex.session.hint());
    });
}

fn load_textures(
    ctx: &egui::Context,
    app: &FacequestApp,
    cfg: &FeatureMatchConfig,
    ex: &mut ExerciseUi,
) {
    if ex.textures_loaded {
        return;
    }
    ex.textures_loaded = true;
    let base = app.course_dir.as_deref();
    if let Some(ref authored) = cfg.image {
        ex.texture = assets::texture_from_path(ctx, base, authored, "exercise");
    }
    if let Some(ref authored) = cfg.marker_image {
        ex.marker_texture = assets::texture_from_path(ctx, base, authored, "marker");
    }
}

fn handle_marker(
    ui: &mut egui::Ui,
    app: &FacequestApp,
    cfg: &FeatureMatchConfig,
    ex: &mut ExerciseUi,
    rect: egui::Rect,
) {
    let marker_size = egui::vec2(
        cfg.marker_fraction[0] * rect.width(),
        cfg.marker_fraction[1] * rect.height(),
    );

    let center = match ex.drag_pos {
        Some(p) => clamp_to_bounds(p, cfg, ex, rect),
        None => {
            let overlay = ex.session.overlay();
            rect.min + egui::vec2(overlay.x, overlay.y)
        }
    };
    let marker_rect = egui::Rect::from_center_size(center, marker_size);

    let sense = if ex.session.locked() {
        egui::Sense::hover()
    } else {
        egui::Sense::drag()
    };
    let response = ui.interact(marker_rect, ui.id().with("marker"), sense);

    if response.dragged() {
        if let Some(p) = response.interact_pointer_pos() {
            ex.drag_pos = Some(p);
        }
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() && !ex.session.locked() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    if response.drag_stopped() {
        if let Some(p) = ex.drag_pos.take() {
            ex.session.release(Point::new(p.x, p.y));
        }
    }

    draw_marker(ui, app, ex, marker_rect);
}

/// Keep the marker visually inside the authored bounds while it is dragged;
/// the release itself is clamped again by the session.
fn clamp_to_bounds(
    p: egui::Pos2,
    cfg: &FeatureMatchConfig,
    ex: &ExerciseUi,
    rect: egui::Rect,
) -> egui::Pos2 {
    let viewport = ex.session.viewport();
    let local = viewport.to_local(Point::new(p.x, p.y));
    let clamped = cfg.bounds.resolve(&viewport).clamp(local);
    rect.min + egui::vec2(clamped.x, clamped.y)
}

fn draw_marker(ui: &egui::Ui, app: &FacequestApp, ex: &ExerciseUi, marker_rect: egui::Rect) {
    match ex.marker_texture {
        Some(ref tex) if app.caps.nested_marker_image => {
            // Half-transparent tint so the feature under the filter stays
            // visible.
            ui.painter().image(
                tex.id(),
                marker_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::from_white_alpha(128),
            );
        }
        _ => {
            ui.painter().rect_filled(
                marker_rect,
                3.0,
                egui::Color32::from_rgba_unmultiplied(50, 180, 150, 100),
            );
            ui.painter().rect_stroke(
                marker_rect,
                3.0,
                egui::Stroke::new(1.5, egui::Color32::from_rgb(50, 180, 150)),
                egui::epaint::StrokeKind::Outside,
            );
        }
    }
}
