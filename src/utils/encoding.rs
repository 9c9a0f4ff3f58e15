//! Binary column encoding for JSON payloads

use base64::{Engine, engine::general_purpose::STANDARD};

/// Base64 text for an optional blob column
pub fn encode_blob(blob: Option<&[u8]>) -> Option<String> {
    blob.map(|bytes| STANDARD.encode(bytes))
}
