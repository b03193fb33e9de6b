//! Request inspection helpers.
//!
//! Small, pure functions over the pieces of an incoming request an
//! authentication layer typically looks at: the path below the application's
//! mount point, a snapshot of the headers, and the decoded body.

use std::collections::BTreeMap;

use encoding_rs::{Encoding, UTF_8};
use reqwest::header::HeaderMap;

use crate::error_handling::RequestError;
use crate::header_keys::HeaderKeyName;

/// Returns the request URI with the application's context path stripped.
///
/// An empty context path means the application is mounted at the root and the
/// URI is returned unchanged.
///
/// # Errors
///
/// Returns [`RequestError::ContextPathMismatch`] if `request_uri` does not
/// start with `context_path`.
pub fn application_path<'a>(
    request_uri: &'a str,
    context_path: &str,
) -> Result<&'a str, RequestError> {
    request_uri
        .strip_prefix(context_path)
        .ok_or_else(|| RequestError::ContextPathMismatch {
            request_uri: request_uri.to_string(),
            context_path: context_path.to_string(),
        })
}

/// Snapshots the headers into a name/value map.
///
/// Names are in the lowercase form `HeaderMap` stores them in. When a header
/// repeats, the first value wins. Values are read as ISO-8859-1, so obs-text
/// bytes (0x80-0xff) come through as the matching Latin-1 characters.
pub fn header_infos(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            headers.get(name).map(|value| {
                let decoded: String = value.as_bytes().iter().map(|&b| b as char).collect();
                (name.as_str().to_string(), decoded)
            })
        })
        .collect()
}

/// Reads the header named by a registry entry.
///
/// Returns `None` if the header is absent or its value is not visible ASCII.
pub fn header_value(headers: &HeaderMap, key: HeaderKeyName) -> Option<&str> {
    headers.get(key.value()).and_then(|value| value.to_str().ok())
}

/// Decodes a request body.
///
/// `charset` is the request's declared character encoding, resolved as a
/// WHATWG encoding label; `None` means UTF-8.
///
/// # Errors
///
/// Returns [`RequestError::UnsupportedCharset`] for labels no encoding is
/// known under, and [`RequestError::InvalidBody`] if the bytes are malformed
/// in the resolved encoding.
pub fn request_body(body: &[u8], charset: Option<&str>) -> Result<String, RequestError> {
    let encoding = match charset {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| RequestError::UnsupportedCharset(label.to_string()))?,
        None => UTF_8,
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|decoded| decoded.into_owned())
        .ok_or_else(|| RequestError::InvalidBody {
            charset: encoding.name().to_string(),
        })
}
