//! Utility functions

pub mod crypto;
pub mod encoding;
pub mod multipart;
pub mod time;
pub mod validation;

pub use crypto::{generate_secure_token, hash_password, verify_password};
pub use encoding::encode_blob;
pub use multipart::MultipartForm;
pub use time::{now_utc, today};
