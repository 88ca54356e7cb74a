//! Raw document text to an ordered sequence of clean lines.

/// Turn a raw document (plain text or HTML) into ordered, non-empty,
/// trimmed lines.
///
/// Tags are dropped with a single-pass scanner; each tag boundary becomes a
/// line break so text from adjacent elements does not run together. A small
/// set of common entities is decoded. Anything fancier than that is left to
/// the sources themselves; the parsers only need ordered lines of text.
pub fn extract_lines(doc: &str) -> Vec<String> {
    let text = strip_tags(doc);
    text.lines()
        .map(|l| decode_entities(l.trim()))
        .filter(|l| !l.is_empty())
        .collect()
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push('\n');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}
