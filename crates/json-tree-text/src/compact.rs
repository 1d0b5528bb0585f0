//! Compact JSON text serializer.

use json_tree_core::{JsonArray, JsonObject, JsonValue};

use crate::escape::escape_into;
use crate::number::format_number;

/// Writes a value tree as strict JSON text with no inserted whitespace.
///
/// Object members are emitted in the table's physical slot order (see
/// [`JsonObject::iter`]): stable for a fixed tree, but not the insertion
/// order. Strings are escaped per RFC 8259.
pub struct JsonTextWriter {
    out: String,
}

impl Default for JsonTextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonTextWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Consume the writer and return the accumulated text.
    pub fn finish(self) -> String {
        self.out
    }

    pub fn write_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_bool(*b),
            JsonValue::Number(n) => self.write_number(*n),
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_array(arr),
            JsonValue::Object(obj) => self.write_object(obj),
        }
    }

    fn write_null(&mut self) {
        self.out.push_str("null");
    }

    fn write_bool(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    fn write_number(&mut self, n: f64) {
        self.out.push_str(&format_number(n));
    }

    fn write_str(&mut self, s: &str) {
        self.out.push('"');
        escape_into(&mut self.out, s);
        self.out.push('"');
    }

    fn write_array(&mut self, arr: &JsonArray) {
        self.out.push('[');
        let last = arr.len().saturating_sub(1);
        for (i, item) in arr.iter().enumerate() {
            self.write_value(item);
            if i < last {
                self.out.push(',');
            }
        }
        self.out.push(']');
    }

    fn write_object(&mut self, obj: &JsonObject) {
        self.out.push('{');
        // Separator placement is driven by the member count, not by slot
        // positions: empty slots are skipped without leaving commas behind.
        let count = obj.len();
        let mut written = 0;
        for member in obj.iter() {
            self.write_str(member.key());
            self.out.push(':');
            self.write_value(member.value());
            written += 1;
            if written < count {
                self.out.push(',');
            }
        }
        self.out.push('}');
    }
}

/// Serialize a value tree to compact JSON text.
pub fn to_json_string(value: &JsonValue) -> String {
    let mut writer = JsonTextWriter::new();
    writer.write_value(value);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_tree_core::Member;

    #[test]
    fn scalars() {
        assert_eq!(to_json_string(&JsonValue::Null), "null");
        assert_eq!(to_json_string(&JsonValue::Bool(true)), "true");
        assert_eq!(to_json_string(&JsonValue::Bool(false)), "false");
        assert_eq!(to_json_string(&JsonValue::Number(2.5)), "2.5");
        assert_eq!(to_json_string(&JsonValue::from("hi")), "\"hi\"");
    }

    #[test]
    fn array_of_three_numbers() {
        let mut arr = JsonArray::new();
        arr.push(1.0).expect("push");
        arr.push(2.0).expect("push");
        arr.push(3.0).expect("push");
        assert_eq!(to_json_string(&JsonValue::Array(arr)), "[1,2,3]");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(to_json_string(&JsonValue::Array(JsonArray::new())), "[]");
        assert_eq!(to_json_string(&JsonValue::Object(JsonObject::new())), "{}");
    }

    #[test]
    fn object_members_are_some_permutation() {
        let mut obj = JsonObject::new();
        obj.insert(Member::new("a", 1.0)).expect("insert");
        obj.insert(Member::new("b", true)).expect("insert");
        obj.insert(Member::new("c", JsonValue::Null)).expect("insert");
        let text = to_json_string(&JsonValue::Object(obj));

        assert!(text.starts_with('{') && text.ends_with('}'));
        let inner = &text[1..text.len() - 1];
        let mut entries: Vec<&str> = inner.split(',').collect();
        entries.sort_unstable();
        assert_eq!(entries, vec!["\"a\":1", "\"b\":true", "\"c\":null"]);
    }

    #[test]
    fn strings_are_escaped() {
        let mut obj = JsonObject::new();
        obj.insert(Member::new("quote\"key", "line\nbreak"))
            .expect("insert");
        let text = to_json_string(&JsonValue::Object(obj));
        assert_eq!(text, "{\"quote\\\"key\":\"line\\nbreak\"}");
    }

    #[test]
    fn nested_structures() {
        let mut inner = JsonArray::new();
        inner.push(false).expect("push");
        let mut obj = JsonObject::new();
        obj.insert(Member::new("list", inner)).expect("insert");
        let mut outer = JsonArray::new();
        outer.push(JsonValue::Object(obj)).expect("push");
        assert_eq!(
            to_json_string(&JsonValue::Array(outer)),
            "[{\"list\":[false]}]"
        );
    }

    #[test]
    fn output_is_deterministic_for_a_fixed_tree() {
        let mut obj = JsonObject::new();
        for i in 0..20 {
            obj.insert(Member::new(format!("k{i}"), i as f64))
                .expect("insert");
        }
        let value = JsonValue::Object(obj);
        assert_eq!(to_json_string(&value), to_json_string(&value));
    }
}
