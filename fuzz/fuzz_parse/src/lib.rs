use acorn_json::{ReadSource, Value};

pub fn de(input: &[u8]) {
    // Make sure we don't panic when reading documents
    let slice = acorn_json::parse_slice(input);
    let reader = acorn_json::parse(ReadSource::with_capacity(3, input));

    match (&slice, &reader) {
        (Ok(slice), Ok(reader)) => assert_eq!(slice, reader),
        (Err(slice), Err(reader)) => {
            assert!(!slice.is_internal(), "internal error: {}", slice);
            assert_eq!(slice.to_string(), reader.to_string());
        }
        _ => panic!("slice and reader disagree: {:?} vs {:?}", slice, reader),
    }

    // Strings aren't unescaped, so only documents without escapes can be compared
    if input.contains(&b'\\') {
        return;
    }

    if let (Ok(value), Ok(expected)) = (slice, serde_json::from_slice::<serde_json::Value>(input)) {
        // If both parsers manage to read the document then make sure they're equal
        assert_same(&value, &expected);
    }
}

fn assert_same(value: &Value, expected: &serde_json::Value) {
    match (value, expected) {
        (Value::Null, serde_json::Value::Null) => (),
        (Value::Bool(a), serde_json::Value::Bool(b)) => assert_eq!(a, b),
        (Value::Str(a), serde_json::Value::String(b)) => assert_eq!(a, b),
        (Value::Int(a), serde_json::Value::Number(b)) => match b.as_i64() {
            Some(b) => assert_eq!(*a, b),
            // `-0` is a float to serde_json
            None => assert_eq!(Some(*a as f64), b.as_f64()),
        },
        (Value::Float(a), serde_json::Value::Number(b)) => {
            let b = b.as_f64().expect("non-float number");

            // the two parsers may round long decimals differently
            assert!((a - b).abs() <= f64::EPSILON * a.abs().max(1.0), "{} != {}", a, b);
        }
        (Value::Arr(a), serde_json::Value::Array(b)) => {
            assert_eq!(a.len(), b.len());

            for (a, b) in a.iter().zip(b) {
                assert_same(a, b);
            }
        }
        (Value::Map(a), serde_json::Value::Object(b)) => {
            assert_eq!(a.len(), b.len());

            for (k, a) in a {
                assert_same(a, b.get(k).expect("missing key"));
            }
        }
        (a, b) => panic!("{:?} != {:?}", a, b),
    }
}
