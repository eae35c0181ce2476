use std::fs;
use std::path::PathBuf;

use actix_multipart::form::tempfile::TempFile;
use uuid::Uuid;

use crate::{constants::ALLOWED_UPLOAD_TYPES, errors::AppError};

/// Mime types a stored file may actually contain, after alias normalization.
const STORED_TYPES: &[&str] = &["image/png", "image/jpeg", "application/pdf"];

/// Local-disk store for uploaded certificate files. Served statically
/// under `/uploads`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: &str) -> std::io::Result<Self> {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir)?;
        Ok(UploadStore { dir })
    }

    /// Validates and persists one uploaded file, returning the relative path
    /// recorded on the certificate record. The declared content type must be
    /// an allowed type and the file magic must agree with it; nothing is
    /// written to the store on rejection.
    pub fn store(&self, file: TempFile) -> Result<String, AppError> {
        let declared = file
            .content_type
            .as_ref()
            .map(|mime| mime.essence_str().to_string())
            .ok_or_else(|| {
                AppError::InvalidContentType("Missing file content type".to_string())
            })?;

        if !ALLOWED_UPLOAD_TYPES.contains(&declared.as_str()) {
            return Err(AppError::InvalidContentType(format!(
                "{declared} is not allowed; expected PNG, JPEG or PDF"
            )));
        }

        let sniffed = infer::get_from_path(file.file.path())?
            .map(|kind| kind.mime_type())
            .ok_or_else(|| {
                AppError::InvalidContentType("Unrecognized file content".to_string())
            })?;

        if !STORED_TYPES.contains(&sniffed) || sniffed != normalize_mime(&declared) {
            return Err(AppError::InvalidContentType(format!(
                "File content ({sniffed}) does not match declared type ({declared})"
            )));
        }

        let original = file.file_name.as_deref().unwrap_or("file");
        let stored_name = format!("{}_{}", Uuid::new_v4().simple(), sanitize_file_name(original));

        // TempFile lives on a tmpfs on some hosts, so copy rather than rename.
        fs::copy(file.file.path(), self.dir.join(&stored_name))?;

        tracing::info!(file = %stored_name, "Stored uploaded file");
        Ok(format!("uploads/{stored_name}"))
    }
}

/// `image/jpg` is accepted on the wire but stored files are sniffed
/// as `image/jpeg`.
fn normalize_mime(declared: &str) -> &str {
    match declared {
        "image/jpg" => "image/jpeg",
        other => other,
    }
}

pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn temp_upload(bytes: &[u8], content_type: Option<mime::Mime>, name: &str) -> TempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(bytes).expect("write temp file");
        file.flush().expect("flush temp file");

        TempFile {
            file,
            content_type,
            file_name: Some(name.to_string()),
            size: bytes.len(),
        }
    }

    fn test_store() -> (UploadStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = UploadStore::new(dir.path().to_str().unwrap()).expect("store");
        (store, dir)
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("my cert (final).png"), "my_cert__final_.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("plain-name_1.pdf"), "plain-name_1.pdf");
    }

    #[test]
    fn stores_png_and_returns_relative_path() {
        let (store, dir) = test_store();
        let upload = temp_upload(PNG_MAGIC, Some(mime::IMAGE_PNG), "cert image.png");

        let path = store.store(upload).expect("store succeeds");

        assert!(path.starts_with("uploads/"));
        assert!(path.ends_with("_cert_image.png"));

        let stored = dir.path().join(path.trim_start_matches("uploads/"));
        assert!(stored.exists());
    }

    #[test]
    fn rejects_disallowed_declared_type() {
        let (store, dir) = test_store();
        let upload = temp_upload(b"hello world", Some(mime::TEXT_PLAIN), "notes.txt");

        let err = store.store(upload).expect_err("text/plain must be rejected");
        assert!(matches!(err, AppError::InvalidContentType(_)));

        // Nothing written on rejection.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn rejects_content_that_does_not_match_declared_type() {
        let (store, dir) = test_store();
        let upload = temp_upload(b"just text pretending", Some(mime::IMAGE_PNG), "fake.png");

        let err = store.store(upload).expect_err("mismatched magic must be rejected");
        assert!(matches!(err, AppError::InvalidContentType(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn accepts_jpg_alias_for_jpeg_content() {
        let (store, _dir) = test_store();
        let jpeg_magic = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        let alias: mime::Mime = "image/jpg".parse().unwrap();
        let upload = temp_upload(&jpeg_magic, Some(alias), "photo.jpg");

        let path = store.store(upload).expect("jpg alias accepted");
        assert!(path.ends_with("photo.jpg"));
    }
}
