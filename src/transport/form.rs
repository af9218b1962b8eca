use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::{ParamValue, Params};

/// RFC 3986 unreserved characters stay literal; everything else is escaped.
/// Notably space becomes `%20`, never `+`.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Serialize an argument bag to a `application/x-www-form-urlencoded` body.
///
/// Sequences flatten to repeated `key[]` pairs, nested mappings to
/// `key[sub]` pairs, both recursively.
pub fn encode_form(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        flatten(&mut pairs, key.to_owned(), value);
    }
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn flatten(out: &mut Vec<(String, String)>, key: String, value: &ParamValue) {
    match value {
        ParamValue::Scalar(scalar) => out.push((key, scalar.clone())),
        ParamValue::Seq(items) => {
            for item in items {
                flatten(out, format!("{key}[]"), item);
            }
        }
        ParamValue::Map(entries) => {
            for (sub, item) in entries {
                flatten(out, format!("{key}[{sub}]"), item);
            }
        }
    }
}

fn escape(input: &str) -> String {
    utf8_percent_encode(input, FORM_ENCODE_SET).to_string()
}
