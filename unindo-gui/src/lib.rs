use eframe::egui;
use notification_center::NotificationSettings;

mod app;
pub mod toast;

pub use toast::{slide_factor, toast_palette, ToastOverlay, ToastPalette};

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Unindo Destinos".to_string(),
            width: 1024.0,
            height: 720.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Opens the demo window with the toast overlay and blocks until it closes.
///
/// # Parameters
/// - `config`: window title and dimensions
/// - `settings`: toast timeout, expiry policy and stack size
///
/// # Returns
/// - `Err(GuiError::Gui)` if eframe fails to create or run the window
pub fn run_gui(config: GuiConfig, settings: NotificationSettings) -> Result<(), GuiError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    log::info!(
        "starting gui (timeout {} ms, policy {:?})",
        settings.timeout_ms,
        settings.policy
    );
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(app::DemoApp::new(&settings))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}
