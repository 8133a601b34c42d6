pub mod feature_match;
pub mod footer;
pub mod header;
pub mod pattern_choice;
pub mod quiz;
pub mod reading;
pub mod step;

/// Shared sizing for lesson imagery: fit the texture's aspect ratio into the
/// available width, capped so tall images do not swallow the screen.
pub fn image_display_size(
    ui: &egui::Ui,
    texture: Option<&egui::TextureHandle>,
    max_height: f32,
) -> egui::Vec2 {
    let avail = ui.available_width().min(420.0);
    let aspect = texture
        .map(|t| {
            let size = t.size();
            size[0] as f32 / size[1] as f32
        })
        .unwrap_or(2.0);
    let mut size = egui::vec2(avail, avail / aspect);
    if size.y > max_height {
        size = egui::vec2(max_height * aspect, max_height);
    }
    size
}
