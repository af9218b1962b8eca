//! Transport layer: wire-format details (form encoding and response
//! decoding).

mod form;
mod response;

pub use form::encode_form;
pub use response::{
    ApiFailure, DecodeError, clean_error_message, decode_json_object, extract_api_failure,
};
