//! Multipart upload forms
//!
//! Project files, packages and templates are uploaded as a single file part.

use reqwest::multipart::{Form, Part};
use tms_core::{Error, Result};

/// Content type of zipped project files
pub const ZIP: &str = "application/zip";

/// Form with one file part of a fixed content type
pub fn file_form(field: &str, data: &[u8], file_name: &str, content_type: &str) -> Result<Form> {
    let part = Part::bytes(data.to_vec())
        .file_name(file_name.to_string())
        .mime_str(content_type)
        .map_err(|e| Error::General(format!("Invalid content type {content_type}: {e}")))?;

    Ok(Form::new().part(field.to_string(), part))
}

/// Form with one file part whose content type is guessed from the file name
pub fn guessed_form(field: &str, data: &[u8], file_name: &str) -> Result<Form> {
    file_form(field, data, file_name, &content_type_for(file_name))
}

/// Content type for a file name, falling back to octet-stream
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
