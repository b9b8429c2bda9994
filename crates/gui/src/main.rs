mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::asset`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use partview_gui_lib::asset;
pub use partview_gui_lib::state;
pub use partview_gui_lib::text3d;
pub use partview_gui_lib::validation;

use std::path::PathBuf;

use app::{StartupOptions, ViewerApp};

const DEFAULT_MODEL: &str = "assets/models/FormalShoe.glb";
const DEFAULT_FONT: &str = "assets/fonts/Roboto-Regular.ttf";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "partview=info".into()),
        )
        .init();

    let options = parse_args();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PartView — GLB Part Viewer")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "partview",
        native_options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, options)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Parse `--model <path>` and `--font <path>` arguments.
fn parse_args() -> StartupOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut model: Option<PathBuf> = None;
    let mut font: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model" if i + 1 < args.len() => {
                model = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--font" if i + 1 < args.len() => {
                font = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            other => {
                tracing::warn!("Ignoring unknown argument: {other}");
            }
        }
        i += 1;
    }

    // Without an explicit --model, load the bundled demo model if it exists
    let model = model.or_else(|| {
        let default = PathBuf::from(DEFAULT_MODEL);
        default.exists().then_some(default)
    });

    StartupOptions {
        model,
        font: font.unwrap_or_else(|| PathBuf::from(DEFAULT_FONT)),
    }
}
