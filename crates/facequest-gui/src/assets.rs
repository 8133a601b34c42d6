use std::path::Path;

use facequest_core::course::assets;

/// Load an authored lesson image into a texture. Missing or undecodable
/// imagery yields `None`; screens draw a placeholder instead.
pub fn texture_from_path(
    ctx: &egui::Context,
    base: Option<&Path>,
    authored: &str,
    name: &str,
) -> Option<egui::TextureHandle> {
    let path = assets::resolve(base, authored);
    let asset = assets::try_load_rgba(&path)?;
    let image = egui::ColorImage::from_rgba_unmultiplied(
        [asset.width, asset.height],
        &asset.pixels,
    );
    Some(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
}

/// Gray placeholder for a lesson image that could not be loaded.
pub fn draw_placeholder(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(60));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(140),
    );
}
