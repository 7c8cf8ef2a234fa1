//! Render sink for the end-of-session screen.
//!
//! At session end the lifecycle hands the sink:
//! - a one-row results table (`<tr><td>..</td>...</tr>`)
//! - the medal earned
//! - visibility toggles for the game selection and reload regions

use crate::core::PortError;
use crate::session::Medal;

/// Named UI regions the lifecycle toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The game selection buttons/menu.
    GameSelection,
    /// The "play again" affordance.
    GameReload,
}

/// Destination of rendered session results.
pub trait RenderSink {
    /// Show the results table row.
    fn render_results(&mut self, row: &str) -> Result<(), PortError>;

    /// Show the medal image and caption.
    fn render_medal(&mut self, medal: Medal) -> Result<(), PortError>;

    /// Show or hide a region.
    fn set_region_visible(&mut self, region: Region, visible: bool) -> Result<(), PortError>;
}

/// Sink that keeps the last value written to each slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingSink {
    /// Last results row rendered.
    pub results: Option<String>,
    /// Last medal rendered.
    pub medal: Option<Medal>,
    /// Whether the game selection region is shown.
    pub selection_visible: bool,
    /// Whether the reload region is shown.
    pub reload_visible: bool,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            results: None,
            medal: None,
            selection_visible: true,
            reload_visible: false,
        }
    }
}

impl RecordingSink {
    /// Create a sink in the initial page layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for RecordingSink {
    fn render_results(&mut self, row: &str) -> Result<(), PortError> {
        self.results = Some(row.to_string());
        Ok(())
    }

    fn render_medal(&mut self, medal: Medal) -> Result<(), PortError> {
        self.medal = Some(medal);
        Ok(())
    }

    fn set_region_visible(&mut self, region: Region, visible: bool) -> Result<(), PortError> {
        match region {
            Region::GameSelection => self.selection_visible = visible,
            Region::GameReload => self.reload_visible = visible,
        }
        Ok(())
    }
}

/// Sink that prints results as plain text.
pub struct TerminalSink<W> {
    output: W,
}

impl<W: std::io::Write> TerminalSink<W> {
    /// Create a sink writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: std::io::Write> RenderSink for TerminalSink<W> {
    fn render_results(&mut self, row: &str) -> Result<(), PortError> {
        writeln!(self.output, "Games played | Wins | Win rate")?;
        writeln!(self.output, "{}", table_row_text(row))?;
        Ok(())
    }

    fn render_medal(&mut self, medal: Medal) -> Result<(), PortError> {
        writeln!(self.output, "{} [{}]", medal.caption(), medal.image_path())?;
        Ok(())
    }

    fn set_region_visible(&mut self, region: Region, visible: bool) -> Result<(), PortError> {
        if region == Region::GameReload && visible {
            writeln!(self.output, "Thanks for playing!")?;
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Flatten a `<tr><td>..</td></tr>` row into `a | b | c`.
fn table_row_text(row: &str) -> String {
    row.trim_start_matches("<tr>")
        .trim_end_matches("</tr>")
        .split("</td>")
        .map(|cell| cell.trim_start_matches("<td>"))
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}
