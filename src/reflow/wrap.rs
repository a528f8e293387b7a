use super::WhitespaceSet;

/// Start and end (exclusive) of the whitespace run containing `pos`.
fn run_bounds(line: &[u8], pos: usize, ws: &WhitespaceSet) -> (usize, usize) {
    let start = line[..pos]
        .iter()
        .rposition(|&b| !ws.contains(b))
        .map_or(0, |p| p + 1);
    let end = line[pos..]
        .iter()
        .position(|&b| !ws.contains(b))
        .map_or(line.len(), |p| pos + p);
    (start, end)
}

/// Picks the whitespace run to break `line` at, as `(start, end)` relative to
/// the line. `line` is longer than `width`.
///
/// Prefers the last run starting at or before column `width`; a run covering
/// the line start is leading indentation and never breaks. When the first
/// word is longer than `width` it overflows and the first run after it is
/// used instead.
fn find_break(line: &[u8], width: usize, ws: &WhitespaceSet) -> Option<(usize, usize)> {
    if let Some(pos) = (1..=width).rev().find(|&p| ws.contains(line[p])) {
        let (start, end) = run_bounds(line, pos, ws);
        if start > 0 {
            return Some((start, end));
        }
    }
    (width + 1..line.len())
        .find(|&p| ws.contains(line[p]) && !ws.contains(line[p - 1]))
        .map(|p| run_bounds(line, p, ws))
}

/// Wraps `text` so that no line is longer than `width` bytes, unless a single
/// word is.
///
/// Each chosen whitespace run (characters of `whitespace`) is replaced by one
/// newline. Lines that already fit, as delimited by existing newlines, are
/// left untouched. A `width` of zero returns the text unchanged.
pub fn wrap(text: &str, width: usize, whitespace: &str) -> String {
    if width == 0 {
        log::debug!("wrap called with zero width, returning text unchanged");
        return text.to_owned();
    }
    let ws = WhitespaceSet::new(whitespace);
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut line_start = 0;

    while line_start < bytes.len() {
        let line_end = bytes[line_start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(bytes.len(), |p| line_start + p);
        let line = &bytes[line_start..line_end];
        if line.len() <= width {
            line_start = line_end + 1;
            continue;
        }
        let Some((start, end)) = find_break(line, width, &ws) else {
            log::trace!("no break point in line at byte {}, leaving it long", line_start);
            line_start = line_end + 1;
            continue;
        };
        let (start, end) = (line_start + start, line_start + end);
        out.push_str(&text[copied..start]);
        // A run reaching an existing newline is dropped; that newline ends the line.
        if end < line_end || line_end == bytes.len() {
            out.push('\n');
        }
        log::trace!("break at bytes {}..{} ({} whitespace collapsed)", start, end, end - start);
        copied = end;
        line_start = end;
    }
    out.push_str(&text[copied..]);
    out
}
