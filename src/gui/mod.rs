mod app;
mod message;
mod state;
mod widgets;

pub use app::CoinsegApp;
pub use message::Message;
pub use state::{AppState, Notice, RenderedResult};

/// Open the interactive window
pub fn run() -> iced::Result {
    iced::application(CoinsegApp::boot, CoinsegApp::update, CoinsegApp::view)
        .title(CoinsegApp::title)
        .theme(CoinsegApp::theme)
        .window_size((1400.0, 900.0))
        .run()
}
