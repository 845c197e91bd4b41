//! Keeps player-typed text on a single, bounded log line.

const MAX_PREVIEW: usize = 120;

/// Escapes control characters and caps the length of `s` for logging.
pub fn escape_log(s: &str) -> String {
    let mut out = String::new();
    for ch in s.chars().take(MAX_PREVIEW) {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    if s.chars().nth(MAX_PREVIEW).is_some() {
        out.push('…');
    }
    out
}
