use rand::Rng;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://trustscore.app/report";

const ID_LEN: usize = 6;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Synthesizes `<base>/<6 base-36 chars>`.
pub fn share_link<R: Rng>(base_url: &str, rng: &mut R) -> String {
    let id: String = (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("{}/{id}", base_url.trim_end_matches('/'))
}

/// Destination for copied text, e.g. the system clipboard.
pub trait ClipboardSink {
    fn name(&self) -> &'static str;
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("{sink} clipboard failed: {reason}")]
    Sink { sink: &'static str, reason: String },
    #[error("no clipboard accepted the link (primary: {primary}; fallback: {fallback})")]
    Unavailable {
        primary: Box<ClipboardError>,
        fallback: Box<ClipboardError>,
    },
}

/// Which sink ended up holding the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopiedVia {
    Primary,
    Fallback,
}

/// Tries the primary sink and silently falls back to the secondary one.
pub fn copy_share_link(
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
    link: &str,
) -> Result<CopiedVia, ClipboardError> {
    let primary_err = match primary.copy_text(link) {
        Ok(()) => return Ok(CopiedVia::Primary),
        Err(err) => err,
    };
    tracing::debug!(sink = primary.name(), error = %primary_err, "primary clipboard failed");

    match fallback.copy_text(link) {
        Ok(()) => Ok(CopiedVia::Fallback),
        Err(fallback_err) => Err(ClipboardError::Unavailable {
            primary: Box::new(primary_err),
            fallback: Box::new(fallback_err),
        }),
    }
}
