//! Uploaded photo decoding into data URLs.
//!
//! The page never writes an uploaded file anywhere: the bytes are read
//! in the browser and held only as a `data:` URL for use as an
//! `<img src>`. Encoding goes through `Window.btoa`, so everything in
//! this module past the MIME lookup requires a browser environment
//! (`wasm32-unknown-unknown` target).

use dioxus::html::FileData;
use wasm_bindgen::JsValue;

/// Accepted image extensions and their MIME types.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

/// Errors that can occur while turning a chosen file into a data URL.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The filename does not carry an accepted image extension.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// Reading the file's bytes failed.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The file was empty.
    #[error("file contains no data")]
    Empty,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for UploadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Look up the MIME type for a filename by extension, case-insensitive.
///
/// Returns `None` for unrecognized or missing extensions.
#[must_use]
pub fn mime_for_filename(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|&(_, mime)| mime)
}

/// Read a chosen file and encode it as a base64 data URL.
///
/// The read is asynchronous; callers snapshot the selection state's
/// upload generation *before* awaiting this so a stale result can be
/// discarded on completion.
///
/// # Errors
///
/// Returns [`UploadError::UnsupportedType`] for non-image filenames,
/// [`UploadError::Read`] if the browser read fails,
/// [`UploadError::Empty`] for zero-length files, and
/// [`UploadError::JsError`] if encoding fails.
pub async fn read_to_data_url(file: &FileData) -> Result<String, UploadError> {
    let name = file.name();
    let mime = mime_for_filename(&name).ok_or_else(|| UploadError::UnsupportedType(name))?;

    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| UploadError::Read(e.to_string()))?
        .to_vec();
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }

    encode_data_url(&bytes, mime)
}

/// Encode raw bytes as a `data:{mime};base64,...` URL.
///
/// # Errors
///
/// Returns [`UploadError::JsError`] if no global window is available
/// or `btoa` rejects the input.
pub fn encode_data_url(bytes: &[u8], mime: &str) -> Result<String, UploadError> {
    let window = web_sys::window().ok_or_else(|| UploadError::JsError("no global window".into()))?;

    // btoa takes a latin-1 string: one char per byte, code points 0-255.
    let binary: String = bytes.iter().map(|&b| char::from(b)).collect();
    let base64 = window.btoa(&binary)?;

    Ok(format!("data:{mime};base64,{base64}"))
}
