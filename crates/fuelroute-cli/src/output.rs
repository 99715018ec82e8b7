//! Output format selection.

use clap::ValueEnum;

use fuelroute_lib::RouteRenderMode;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Route length followed by the node list.
    #[default]
    Text,
    /// Per-step table with roles and fuel levels.
    Detailed,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Textual render mode, or `None` for JSON.
    pub fn render_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::Plain),
            OutputFormat::Detailed => Some(RouteRenderMode::Detailed),
            OutputFormat::Json => None,
        }
    }
}

/// Append a trailing newline if `text` lacks one.
pub(crate) fn terminated(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
