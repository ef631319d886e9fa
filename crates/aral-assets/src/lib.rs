//! Frontend asset serving for the aral lesson planner.
//!
//! Provides a single API for accessing frontend assets in both embedded and
//! filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from `frontend/` at runtime

use std::borrow::Cow;
use std::path::Path;

/// Embedded frontend assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../frontend"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset serving (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = "frontend";

/// Get a frontend asset by path (relative to `frontend/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get a frontend asset by path (relative to `frontend/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    let full_path = Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    // Leak the string to get a `&'static str`; the set of MIME types is
    // bounded so this cannot grow without limit.
    Box::leak(mime.to_string().into_boxed_str())
}
