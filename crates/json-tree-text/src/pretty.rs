//! Indented diagnostic printer.
//!
//! Renders a value tree in a human-readable form with two-space-per-level
//! indentation, optionally colorized with ANSI 256-color codes. Intended
//! for debugging, not data interchange: the colors are not part of any
//! data contract, and the plain palette is the semantic output.

use std::fmt::{self, Write};

use json_tree_core::{JsonArray, JsonObject, JsonValue, Member};

use crate::escape::escape_into;
use crate::number::format_number;

#[derive(Debug, Clone, Copy)]
struct Palette {
    key: &'static str,
    string: &'static str,
    literal: &'static str,
    reset: &'static str,
}

const PLAIN: Palette = Palette {
    key: "",
    string: "",
    literal: "",
    reset: "",
};

const ANSI: Palette = Palette {
    key: "\x1b[38;5;132m",
    string: "\x1b[38;5;145m",
    literal: "\x1b[38;5;108m",
    reset: "\x1b[m",
};

/// Recursive renderer writing an indented view of a tree to a sink.
///
/// Object members appear in physical slot order, like the compact
/// serializer. Output is deterministic for a fixed tree.
pub struct PrettyPrinter<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> PrettyPrinter<W> {
    /// Plain-text printer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            palette: PLAIN,
        }
    }

    /// Colorized printer: keys, strings, and literals each get their own
    /// ANSI color; punctuation stays uncolored.
    pub fn colored(out: W) -> Self {
        Self { out, palette: ANSI }
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render a value starting at `level` spaces of indentation.
    pub fn print_value(&mut self, value: &JsonValue, level: usize) -> fmt::Result {
        self.value_at(value, level, false)
    }

    /// Render an object starting at `level` spaces of indentation.
    pub fn print_object(&mut self, obj: &JsonObject, level: usize) -> fmt::Result {
        self.object_at(obj, level, false)
    }

    /// Render an array starting at `level` spaces of indentation.
    pub fn print_array(&mut self, arr: &JsonArray, level: usize) -> fmt::Result {
        self.array_at(arr, level, false)
    }

    fn indent(&mut self, level: usize) -> fmt::Result {
        for _ in 0..level {
            self.out.write_char(' ')?;
        }
        Ok(())
    }

    fn literal(&mut self, text: &str) -> fmt::Result {
        self.out.write_str(self.palette.literal)?;
        self.out.write_str(text)?;
        self.out.write_str(self.palette.reset)
    }

    fn string(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(self.palette.string)?;
        self.quoted(s)?;
        self.out.write_str(self.palette.reset)
    }

    fn quoted(&mut self, s: &str) -> fmt::Result {
        let mut buf = String::with_capacity(s.len() + 2);
        buf.push('"');
        escape_into(&mut buf, s);
        buf.push('"');
        self.out.write_str(&buf)
    }

    // `inline` is set when the value continues a line that already starts
    // with `"key": `, so no leading indent is written.
    fn value_at(&mut self, value: &JsonValue, level: usize, inline: bool) -> fmt::Result {
        match value {
            JsonValue::Array(arr) => self.array_at(arr, level, inline),
            JsonValue::Object(obj) => self.object_at(obj, level, inline),
            JsonValue::Null => {
                self.lead(level, inline)?;
                self.literal("null")
            }
            JsonValue::Bool(b) => {
                self.lead(level, inline)?;
                self.literal(if *b { "true" } else { "false" })
            }
            JsonValue::Number(n) => {
                self.lead(level, inline)?;
                self.literal(&format_number(*n))
            }
            JsonValue::Str(s) => {
                self.lead(level, inline)?;
                self.string(s)
            }
        }
    }

    fn lead(&mut self, level: usize, inline: bool) -> fmt::Result {
        if inline {
            Ok(())
        } else {
            self.indent(level)
        }
    }

    fn array_at(&mut self, arr: &JsonArray, level: usize, inline: bool) -> fmt::Result {
        if !inline {
            self.indent(level)?;
        }
        if arr.is_empty() {
            return self.out.write_str("[]");
        }
        self.out.write_str("[\n")?;
        let last = arr.len() - 1;
        for (i, item) in arr.iter().enumerate() {
            self.value_at(item, level + 2, false)?;
            self.out.write_str(if i < last { ",\n" } else { "\n" })?;
        }
        self.indent(level)?;
        self.out.write_char(']')
    }

    fn object_at(&mut self, obj: &JsonObject, level: usize, inline: bool) -> fmt::Result {
        if !inline {
            self.indent(level)?;
        }
        if obj.is_empty() {
            return self.out.write_str("{}");
        }
        self.out.write_str("{\n")?;
        let count = obj.len();
        let mut written = 0;
        for member in obj.iter() {
            self.member_at(member, level + 2)?;
            written += 1;
            self.out.write_str(if written < count { ",\n" } else { "\n" })?;
        }
        self.indent(level)?;
        self.out.write_char('}')
    }

    fn member_at(&mut self, member: &Member, level: usize) -> fmt::Result {
        self.indent(level)?;
        self.out.write_str(self.palette.key)?;
        self.quoted(member.key())?;
        self.out.write_str(self.palette.reset)?;
        self.out.write_str(": ")?;
        self.value_at(member.value(), level, true)
    }
}

/// Render a tree to an owned string, plain palette.
pub fn to_pretty_string(value: &JsonValue) -> String {
    let mut out = String::new();
    PrettyPrinter::new(&mut out)
        .print_value(value, 0)
        .expect("writing to a String cannot fail");
    out
}

/// Render a tree to an owned string with ANSI colors.
pub fn to_colored_string(value: &JsonValue) -> String {
    let mut out = String::new();
    PrettyPrinter::colored(&mut out)
        .print_value(value, 0)
        .expect("writing to a String cannot fail");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_tree_core::Member;

    fn sample() -> JsonValue {
        // Slot order for capacity 64 puts "a" (home slot 6) before "list"
        // (home slot 33), so the rendering below is stable.
        let mut list = JsonArray::new();
        list.push(true).expect("push");
        list.push(JsonValue::Null).expect("push");
        let mut obj = JsonObject::new();
        obj.insert(Member::new("a", 1.0)).expect("insert");
        obj.insert(Member::new("list", list)).expect("insert");
        JsonValue::Object(obj)
    }

    #[test]
    fn scalars_render_bare() {
        assert_eq!(to_pretty_string(&JsonValue::Null), "null");
        assert_eq!(to_pretty_string(&JsonValue::Bool(false)), "false");
        assert_eq!(to_pretty_string(&JsonValue::Number(1.5)), "1.5");
        assert_eq!(to_pretty_string(&JsonValue::from("s")), "\"s\"");
    }

    #[test]
    fn empty_containers_render_closed() {
        assert_eq!(to_pretty_string(&JsonValue::Array(JsonArray::new())), "[]");
        assert_eq!(
            to_pretty_string(&JsonValue::Object(JsonObject::new())),
            "{}"
        );
    }

    #[test]
    fn nested_tree_indents_two_spaces_per_level() {
        let expected = "\
{
  \"a\": 1,
  \"list\": [
    true,
    null
  ]
}";
        assert_eq!(to_pretty_string(&sample()), expected);
    }

    #[test]
    fn starting_indent_shifts_the_whole_block() {
        let mut arr = JsonArray::new();
        arr.push(1.0).expect("push");
        let value = JsonValue::Array(arr);
        let mut out = String::new();
        PrettyPrinter::new(&mut out)
            .print_value(&value, 4)
            .expect("fmt");
        assert_eq!(out, "    [\n      1\n    ]");
    }

    #[test]
    fn colored_output_wraps_values_in_ansi_codes() {
        let text = to_colored_string(&sample());
        assert!(text.contains("\x1b[38;5;132m\"a\"\x1b[m"));
        assert!(text.contains("\x1b[38;5;108m1\x1b[m"));
        assert!(text.contains("\x1b[38;5;108mtrue\x1b[m"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        assert!(!to_pretty_string(&sample()).contains('\x1b'));
    }

    #[test]
    fn keys_are_escaped_in_diagnostics_too() {
        let mut obj = JsonObject::new();
        obj.insert(Member::new("bad\nkey", 1.0)).expect("insert");
        let text = to_pretty_string(&JsonValue::Object(obj));
        assert!(text.contains("\"bad\\nkey\""));
    }
}
