//! Logo uploads and their storage.

use crate::error::RosterError;
use std::future::Future;
use validify::{schema_err, schema_validation, Validate, ValidationErrors};

/// Directory, relative to the public storage root, logos are written to.
pub const LOGO_DIR: &str = "logos";

/// Upper bound for a logo upload, 2 MiB.
pub const MAX_LOGO_SIZE: usize = 2 * 1024 * 1024;

/// Accepted image extensions.
pub const LOGO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];

/// Persists company logos. Serves as indirection to decouple the records from
/// the storage backend.
pub trait LogoStore {
    /// Write the logo and return its path relative to the public storage root,
    /// i.e. `logos/<name>.<ext>`. The file is fully written when this returns.
    ///
    /// * `logo`: The uploaded logo.
    fn write(&self, logo: &LogoUpload) -> impl Future<Output = Result<String, RosterError>> + Send;

    /// Read the contents of a previously written logo.
    ///
    /// * `path`: Path relative to the public storage root.
    fn read(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, RosterError>> + Send;

    /// Delete a previously written logo.
    ///
    /// * `path`: Path relative to the public storage root.
    fn delete(&self, path: &str) -> impl Future<Output = Result<(), RosterError>> + Send;
}

/// A logo file obtained from a form.
#[derive(Debug, Clone, Validate)]
#[validate(Self::validate_schema)]
pub struct LogoUpload {
    /// Original file name as sent by the client.
    pub file_name: String,

    pub bytes: Vec<u8>,
}

impl LogoUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// The lowercased extension of the original file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    #[schema_validation]
    fn validate_schema(&self) -> Result<(), ValidationErrors> {
        match self.extension() {
            Some(ext) if LOGO_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                schema_err!("logo_image", "`logo` must be an image (jpg, jpeg, png, gif, bmp, svg, webp)");
            }
        }

        if self.bytes.is_empty() {
            schema_err!("logo_empty", "`logo` must not be empty");
        }

        if self.bytes.len() > MAX_LOGO_SIZE {
            schema_err!("logo_size", "`logo` must not be larger than 2048 kilobytes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LogoUpload, MAX_LOGO_SIZE};
    use validify::Validate;

    #[test]
    fn accepts_images() {
        let logo = LogoUpload::new("acme.PNG", vec![1u8; 5 * 1024]);
        assert_eq!(Some("png".to_string()), logo.extension());
        assert!(logo.validate().is_ok());
    }

    #[test]
    fn rejects_non_images() {
        assert!(LogoUpload::new("notes.txt", vec![1u8; 16]).validate().is_err());
        assert!(LogoUpload::new("no_extension", vec![1u8; 16]).validate().is_err());
        assert!(LogoUpload::new("trailing.", vec![1u8; 16]).validate().is_err());
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(LogoUpload::new("acme.png", vec![]).validate().is_err());
        assert!(LogoUpload::new("acme.png", vec![0u8; MAX_LOGO_SIZE + 1])
            .validate()
            .is_err());
        assert!(LogoUpload::new("acme.png", vec![0u8; MAX_LOGO_SIZE])
            .validate()
            .is_ok());
    }
}
