//! Multipart form collection
//!
//! Uploads are small (photos, logos) and are read fully into memory.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// All parts of a multipart body, split into text fields and files
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl MultipartForm {
    /// Drain a multipart body.
    ///
    /// Parts carrying a file name are kept as bytes, everything else must be UTF-8 text.
    pub async fn collect(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if field.file_name().is_some() {
                let data = field.bytes().await?;
                form.files.insert(name, data.to_vec());
            } else {
                let text = field.text().await?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Non-empty, trimmed text field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Text field that must be present
    pub fn required_text(&self, name: &str) -> AppResult<&str> {
        self.text(name)
            .ok_or_else(|| AppError::Validation(format!("Field '{}' is required", name)))
    }

    /// Take ownership of an uploaded file, if one was sent under `name`
    pub fn take_file(&mut self, name: &str) -> Option<Vec<u8>> {
        self.files.remove(name).filter(|bytes| !bytes.is_empty())
    }

    /// Uploaded file that must be present
    pub fn take_required_file(&mut self, name: &str) -> AppResult<Vec<u8>> {
        self.take_file(name)
            .ok_or_else(|| AppError::Validation(format!("No file uploaded in '{}'", name)))
    }
}

#[cfg(test)]
impl MultipartForm {
    pub fn from_parts(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: files.iter().map(|(k, v)| (k.to_string(), v.to_vec())).collect(),
        }
    }
}
