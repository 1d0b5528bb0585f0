use json_tree_core::{JsonArray, JsonValue};
use proptest::prelude::*;

fn expected_capacity(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut capacity = 64;
    while capacity < len {
        capacity *= 2;
    }
    capacity
}

#[test]
fn mixed_tags_keep_their_order() {
    let mut arr = JsonArray::new();
    arr.push(JsonValue::Null).expect("push");
    arr.push(true).expect("push");
    arr.push(2.0).expect("push");
    arr.push("three").expect("push");

    assert_eq!(arr.len(), 4);
    assert!(arr[0].is_null());
    assert_eq!(arr[1].as_bool(), Some(true));
    assert_eq!(arr[2].as_f64(), Some(2.0));
    assert_eq!(arr[3].as_str(), Some("three"));
}

proptest! {
    /// Appending N values never loses or reorders earlier values; `len`
    /// equals the number of successful appends; capacity doubles from 64.
    #[test]
    fn append_preserves_order_and_count(values in prop::collection::vec(any::<f64>(), 0..300)) {
        let mut arr = JsonArray::new();
        for (i, &n) in values.iter().enumerate() {
            arr.push(n).expect("push");
            prop_assert_eq!(arr.len(), i + 1);
            prop_assert!(arr.len() <= arr.capacity());
        }
        prop_assert_eq!(arr.len(), values.len());
        prop_assert_eq!(arr.capacity(), expected_capacity(values.len()));
        for (i, &n) in values.iter().enumerate() {
            // Compare bit patterns so NaN elements count as preserved too.
            let stored = arr[i].as_f64().expect("number");
            prop_assert_eq!(stored.to_bits(), n.to_bits());
        }
    }
}
