//! JSON string escaping (RFC 8259).

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Append `s` to `out` with JSON escaping applied.
///
/// Escapes the double quote, backslash, and every control character below
/// U+0020 (short forms for `\b \t \n \f \r`, `\u00XX` for the rest).
/// Clean stretches are copied as whole slices.
pub fn escape_into(out: &mut String, s: &str) {
    let mut last = 0;
    for (i, ch) in s.char_indices() {
        let replacement = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{0008}' => "\\b",
            '\t' => "\\t",
            '\n' => "\\n",
            '\u{000C}' => "\\f",
            '\r' => "\\r",
            '\u{0000}'..='\u{001F}' => {
                out.push_str(&s[last..i]);
                let code = ch as u32;
                out.push_str("\\u00");
                out.push(HEX[(code >> 4) as usize] as char);
                out.push(HEX[(code & 0xF) as usize] as char);
                last = i + ch.len_utf8();
                continue;
            }
            _ => continue,
        };
        out.push_str(&s[last..i]);
        out.push_str(replacement);
        last = i + ch.len_utf8();
    }
    out.push_str(&s[last..]);
}

/// Escape special characters in a string for JSON serialization.
///
/// # Examples
///
/// ```
/// use json_tree_text::escape::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// ```
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}
