//! Masked, paginated export of a score result.

mod layout;
mod masking;
mod pdf;

pub use layout::{ReportLayout, ReportPage, TextLine, PAGE_BOTTOM, REPORT_FOOTER, REPORT_TITLE};
pub use masking::{mask_email, mask_phone};
pub use pdf::PdfBackend;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::domain::ProfileInput;
use super::scoring::ScoreResult;
use super::validation::has_value;

pub const REPORT_FILE_NAME: &str = "trust-report.pdf";

const PLACEHOLDER: &str = "-";

/// Report content with PII already masked; the only input to layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score_label: String,
    pub risk_label: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub generated_on: NaiveDate,
}

impl ReportSnapshot {
    pub fn capture(profile: &ProfileInput, result: &ScoreResult, generated_on: NaiveDate) -> Self {
        let or_placeholder = |value: &str, mask: fn(&str) -> String| {
            if has_value(value) {
                mask(value.trim())
            } else {
                PLACEHOLDER.to_string()
            }
        };

        Self {
            name: or_placeholder(&profile.name, str::to_string),
            email: or_placeholder(&profile.email, mask_email),
            phone: or_placeholder(&profile.phone, mask_phone),
            score_label: result.score_label(),
            risk_label: result.risk_label(),
            insights: result.insights.iter().map(|i| i.text.clone()).collect(),
            recommendations: result
                .recommendations
                .iter()
                .map(|r| r.text.clone())
                .collect(),
            generated_on,
        }
    }
}

/// Output format seam; the layout is format independent.
pub trait DocumentBackend {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("document backend unavailable: {0}")]
    Backend(String),
    #[error("report has no pages")]
    EmptyDocument,
    #[error("unable to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ReportExporter<B = PdfBackend> {
    backend: B,
}

impl<B: DocumentBackend> ReportExporter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn render(&self, snapshot: &ReportSnapshot) -> Result<Vec<u8>, ExportError> {
        let layout = ReportLayout::build(snapshot);
        self.backend.render(&layout)
    }

    /// Writes the report only after rendering succeeded, so failures leave no file.
    pub fn export_to(&self, snapshot: &ReportSnapshot, path: &Path) -> Result<usize, ExportError> {
        let bytes = self.render(snapshot)?;
        fs::write(path, &bytes).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "trust report exported");
        Ok(bytes.len())
    }
}
