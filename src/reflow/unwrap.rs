/// Merges wrapped text back into a single line.
///
/// Runs of spaces collapse to one space. A lone newline becomes a space,
/// while a run of two or more newlines collapses to a single newline, so
/// paragraph breaks survive.
pub fn unwrap(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b' ' && b != b'\n' {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|&&c| c == b).count();
        out.push_str(&text[copied..i]);
        out.push(if b == b'\n' && run > 1 { '\n' } else { ' ' });
        i += run;
        copied = i;
    }
    out.push_str(&text[copied..]);
    out
}
