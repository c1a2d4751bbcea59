use base64::Engine;
use std::f64::consts::PI;
use std::fs;
use std::io::Write;
use std::path::Path;
use trustscore::error::AppError;
use trustscore::workflows::questionnaire::gauge::{GaugeBackground, GaugeGeometry, GaugeSurface};
use trustscore::workflows::questionnaire::share::{ClipboardError, ClipboardSink};
use trustscore::workflows::questionnaire::ProfileInput;

pub(crate) fn load_profile(path: &Path) -> Result<ProfileInput, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// System clipboard through `arboard`; unavailable on headless hosts.
pub(crate) struct ArboardClipboard;

impl ClipboardSink for ArboardClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let sink_error = |err: arboard::Error| ClipboardError::Sink {
            sink: "system",
            reason: err.to_string(),
        };
        let mut clipboard = arboard::Clipboard::new().map_err(sink_error)?;
        clipboard.set_text(text.to_owned()).map_err(sink_error)
    }
}

/// Asks the terminal emulator to set its clipboard with an OSC 52 sequence.
pub(crate) struct Osc52Clipboard<W> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{payload}\x07")
            .and_then(|()| self.out.flush())
            .map_err(|err| ClipboardError::Sink {
                sink: "terminal",
                reason: err.to_string(),
            })
    }
}

const GAUGE_COLUMNS: usize = 41;
const ZONE_GLYPHS: [char; 3] = ['.', ':', '='];

/// One-line gauge: zone glyphs along a bar, `|` for the needle, score label after.
pub(crate) struct TerminalGauge<W> {
    out: W,
    cells: Vec<char>,
    label: String,
}

impl<W: Write + Send + 'static> TerminalGauge<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            cells: vec![' '; GAUGE_COLUMNS],
            label: String::new(),
        }
    }

    #[cfg(test)]
    fn line(&self) -> String {
        format!("[{}] {}", self.cells.iter().collect::<String>(), self.label)
    }

    pub(crate) fn finish(&mut self) {
        if let Err(err) = writeln!(self.out) {
            tracing::debug!(error = %err, "gauge output closed");
        }
    }
}

fn column_for(angle: f64) -> usize {
    let fraction = ((angle + PI) / PI).clamp(0.0, 1.0);
    (fraction * (GAUGE_COLUMNS - 1) as f64).round() as usize
}

impl<W: Write + Send + 'static> GaugeSurface for TerminalGauge<W> {
    fn clear(&mut self) {
        self.cells.fill(' ');
        self.label.clear();
    }

    fn draw_background(&mut self, background: &GaugeBackground) {
        for (arc, glyph) in background.arcs.iter().zip(ZONE_GLYPHS) {
            let from = column_for(arc.start_angle);
            let to = column_for(arc.end_angle);
            self.cells[from..=to].fill(glyph);
        }
    }

    fn draw_needle(&mut self, angle: f64, _geometry: &GaugeGeometry) {
        self.cells[column_for(angle)] = '|';
    }

    fn draw_hub(&mut self, _geometry: &GaugeGeometry) {}

    fn draw_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn present(&mut self) {
        let bar: String = self.cells.iter().collect();
        let written = write!(self.out, "\r[{bar}] {:<7}", self.label)
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            tracing::debug!(error = %err, "gauge frame dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustscore::workflows::questionnaire::gauge::angle_for_score;

    #[test]
    fn osc52_encodes_link() {
        let mut sink = Osc52Clipboard::new(Vec::new());
        sink.copy_text("hi").expect("memory write");
        assert_eq!(sink.into_inner(), b"\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn terminal_gauge_marks_needle_over_zones() {
        let geometry = GaugeGeometry::default();
        let background = GaugeBackground::prerender(geometry);
        let mut gauge = TerminalGauge::new(Vec::new());

        gauge.clear();
        gauge.draw_background(&background);
        gauge.draw_needle(angle_for_score(100.0), &geometry);
        gauge.draw_label("100/100");

        let line = gauge.line();
        assert!(line.starts_with("[....."));
        assert!(line.ends_with("=|] 100/100"));
        assert_eq!(line.matches('|').count(), 1);
    }

    #[test]
    fn needle_columns_span_the_bar() {
        assert_eq!(column_for(-PI), 0);
        assert_eq!(column_for(0.0), GAUGE_COLUMNS - 1);
        assert_eq!(column_for(-PI / 2.0), GAUGE_COLUMNS / 2);
    }
}
