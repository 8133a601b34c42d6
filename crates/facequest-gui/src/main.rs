mod app;
mod assets;
mod panels;
mod state;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([540.0, 860.0])
            .with_min_inner_size([420.0, 640.0])
            .with_title("FaceQuest"),
        ..Default::default()
    };

    eframe::run_native(
        "FaceQuest",
        options,
        Box::new(|cc| Ok(Box::new(app::FacequestApp::new(&cc.egui_ctx)))),
    )
}
