//! DSNOW presentation viewer

use anyhow::Result;
use deck_core::DeckSettings;
use deck_ui::{apply_theme, PresentationView, Theme};
use std::path::Path;
use tracing::{info, warn};

/// Optional settings file read from the working directory
const SETTINGS_FILE: &str = "dsnow.json";

/// Load settings from `path`, falling back to defaults
fn load_settings(path: &Path) -> DeckSettings {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return DeckSettings::default(),
        Err(err) => {
            warn!("Could not read {}: {}", path.display(), err);
            return DeckSettings::default();
        }
    };

    match DeckSettings::from_json(&json) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            warn!("Ignoring {}: {}", path.display(), err);
            DeckSettings::default()
        }
    }
}

/// Main application
struct DeckApp {
    view: PresentationView,
}

impl DeckApp {
    fn new(cc: &eframe::CreationContext<'_>, view: PresentationView) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::from(&view.settings().theme));
        Self { view }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.show(ctx);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let settings = load_settings(Path::new(SETTINGS_FILE));
    let presentation = deck_slides::presentation()?;
    info!("Starting DSNOW presentation: {}", presentation.chrome.title);

    let window = &settings.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height]),
        default_theme: if settings.theme.dark_mode {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        follow_system_theme: false,
        ..Default::default()
    };

    let title = presentation.chrome.title.clone();
    let view = PresentationView::new(presentation, settings);

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(DeckApp::new(cc, view))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_settings(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dsnow-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("dsnow-does-not-exist.json");
        assert_eq!(load_settings(&path), DeckSettings::default());
    }

    #[test]
    fn test_settings_file_is_applied() {
        let path = temp_settings("valid", r#"{ "chart_height": 320, "theme": { "dark_mode": true } }"#);
        let settings = load_settings(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.chart_height, 320.0);
        assert!(settings.theme.dark_mode);
        assert!(settings.keyboard_navigation);
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let path = temp_settings("malformed", "{ not json");
        let settings = load_settings(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings, DeckSettings::default());
    }
}
