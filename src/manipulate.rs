//! Trimming, alignment, case conversion, replacement and tokenizing.

/// Removes characters found in `pad` from both ends of `s`.
pub fn trim<'a>(s: &'a str, pad: &str) -> &'a str {
    s.trim_matches(|c: char| pad.contains(c))
}

/// Removes characters found in `pad` from the beginning of `s`.
pub fn ltrim<'a>(s: &'a str, pad: &str) -> &'a str {
    s.trim_start_matches(|c: char| pad.contains(c))
}

/// Removes characters found in `pad` from the end of `s`.
pub fn rtrim<'a>(s: &'a str, pad: &str) -> &'a str {
    s.trim_end_matches(|c: char| pad.contains(c))
}

/// Upper-cases ASCII letters; other bytes are kept as they are.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Lower-cases ASCII letters; other bytes are kept as they are.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Fill characters needed to bring `s` up to `width` bytes.
fn padding(s: &str, width: usize) -> usize {
    width.saturating_sub(s.len())
}

fn fill_str(fill: char, n: usize) -> String {
    std::iter::repeat_n(fill, n).collect()
}

/// Left-aligns `s` in a field of `width` bytes. A multi-byte `fill` adds its
/// own UTF-8 length per fill character.
pub fn lalign(s: &str, width: usize, fill: char) -> String {
    let mut out = s.to_owned();
    out.push_str(&fill_str(fill, padding(s, width)));
    out
}

/// Right-aligns `s` in a field of `width` bytes.
pub fn ralign(s: &str, width: usize, fill: char) -> String {
    let mut out = fill_str(fill, padding(s, width));
    out.push_str(s);
    out
}

/// Centers `s` in a field of `width` bytes. An odd fill goes right.
pub fn calign(s: &str, width: usize, fill: char) -> String {
    let pad = padding(s, width);
    let left = pad / 2;
    let mut out = fill_str(fill, left);
    out.push_str(s);
    out.push_str(&fill_str(fill, pad - left));
    out
}

/// Replaces up to `count` occurrences (`0` = all) of `from` with `to` in place.
///
/// Searching resumes after each inserted substitute, so a `to` containing
/// `from` is never re-matched.
pub fn replace_inplace<'a>(
    s: &'a mut String,
    from: &str,
    to: &str,
    count: usize,
) -> &'a mut String {
    if from.is_empty() {
        return s;
    }
    let mut remaining = count;
    let mut pos = 0;
    while let Some(found) = s[pos..].find(from) {
        let start = pos + found;
        s.replace_range(start..start + from.len(), to);
        pos = start + to.len();
        if count > 0 {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
    }
    s
}

/// Returns a copy of `s` with up to `count` occurrences of `from` replaced.
pub fn replace(s: &str, from: &str, to: &str, count: usize) -> String {
    let mut out = s.to_owned();
    replace_inplace(&mut out, from, to, count);
    out
}

/// Removes every occurrence of `c`.
pub fn strip(s: &str, c: char) -> String {
    s.chars().filter(|&x| x != c).collect()
}

/// Splits `s` on any character of `delimiters`. Never yields empty tokens.
pub fn split<'a>(s: &'a str, delimiters: &str) -> Vec<&'a str> {
    s.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Applies `convert` to word starts: an ASCII letter at position 0 or any
/// character right after a space. Every word start counts towards `count`
/// (`0` = all), even when `convert` leaves it unchanged.
fn convert_word_starts(s: &str, count: usize, convert: fn(&mut u8)) -> String {
    let mut bytes = s.as_bytes().to_vec();
    let mut done = 0;
    for i in 0..bytes.len() {
        if count > 0 && done == count {
            break;
        }
        let at_word_start = if i == 0 {
            bytes[i].is_ascii_alphabetic()
        } else {
            bytes[i - 1] == b' '
        };
        if at_word_start {
            convert(&mut bytes[i]);
            done += 1;
        }
    }
    // Only ASCII letters were touched.
    String::from_utf8(bytes).unwrap_or_else(|_| s.to_owned())
}

/// Upper-cases the first character of up to `count` words (`0` = all).
/// Words are only recognized after a literal space.
pub fn capitalize(s: &str, count: usize) -> String {
    convert_word_starts(s, count, u8::make_ascii_uppercase)
}

/// Lower-cases the first character of up to `count` words (`0` = all).
pub fn decapitalize(s: &str, count: usize) -> String {
    convert_word_starts(s, count, u8::make_ascii_lowercase)
}
