//! Local chess GUI
//!
//! A two-player chessboard in one window: click-to-move or drag-and-drop,
//! with all rule decisions delegated to the shakmaty crate.

mod app;
mod board;
mod settings;
mod styles;

use app::ChessApp;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    application("Local Chess", ChessApp::update, ChessApp::view)
        .subscription(ChessApp::subscription)
        .theme(ChessApp::theme)
        .window_size((920.0, 680.0))
        .run_with(ChessApp::new)
}
