//! Remote texture fetching and decoding.

use std::io::Read;
use std::time::Duration;

/// Response bodies larger than this are rejected.
const MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;

/// Per-request timeouts.
const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// A decoded RGBA8 image.
#[derive(Clone, Debug)]
pub struct RemoteImage {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Tightly packed RGBA8 bytes, row-major.
    pub rgba: Vec<u8>,
}

/// Errors that can occur while fetching or decoding a remote image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request failed (connection, DNS, non-2xx status).
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// Reading the response body failed.
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// The response body exceeded [`MAX_IMAGE_BYTES`].
    #[error("response larger than {MAX_IMAGE_BYTES} bytes")]
    TooLarge,

    /// The bytes were not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Fetch and decode a remote texture, best-effort.
///
/// On any failure the error is logged at warn level and `None` is returned;
/// the body simply renders untextured.
#[must_use]
pub fn fetch_rgba_image(url: &str) -> Option<RemoteImage> {
    match try_fetch(url) {
        Ok(image) => {
            log::info!(
                "Fetched texture {url} ({}x{})",
                image.width,
                image.height
            );
            Some(image)
        }
        Err(e) => {
            log::warn!("Texture fetch failed for {url}: {e}");
            None
        }
    }
}

fn try_fetch(url: &str) -> Result<RemoteImage, FetchError> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(HTTP_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build();

    let response = agent.get(url).call().map_err(Box::new)?;

    let mut bytes = Vec::new();
    let read = response
        .into_reader()
        .take(MAX_IMAGE_BYTES + 1)
        .read_to_end(&mut bytes)?;
    if read as u64 > MAX_IMAGE_BYTES {
        return Err(FetchError::TooLarge);
    }

    decode_rgba(&bytes)
}

/// Decode image bytes (format sniffed from content) into RGBA8.
pub(crate) fn decode_rgba(bytes: &[u8]) -> Result<RemoteImage, FetchError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(RemoteImage {
        width,
        height,
        rgba: decoded.into_raw(),
    })
}
