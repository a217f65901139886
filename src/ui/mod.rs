//! Terminal UI: a thin front end that drives the game engine from the
//! keyboard and redraws from its observable state.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
pub use game_view::status_line;

/// Front end settings, loadable from the `[ui]` table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on after launch and after each restart
    pub initial_column: usize,
    /// How long to wait for a key press before redrawing
    pub poll_interval_ms: u64,
    pub highlight_win_line: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            initial_column: 3,
            poll_interval_ms: 100,
            highlight_win_line: true,
        }
    }
}
