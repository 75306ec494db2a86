// File: crates/gantt-core/src/transport.rs
// Summary: GET URL construction and POST image fetching against the chart service.
// Notes:
// - Transport failures (network errors, non-2xx) are absorbed: `fetch_image`
//   logs them and returns `Ok(None)`. Bad chart data and undecodable or
//   unsaveable images are still errors.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

use crate::chart::Chart;
use crate::config::TransportConfig;
use crate::error::{GanttError, Result, TransportError};

/// `base_url?<params>` with the chart's parameters in insertion order.
pub fn build_url(base_url: &str, chart: &Chart) -> Result<String> {
    Ok(format!("{base_url}?{}", chart.params()?.to_query_string()))
}

/// The HTTP capability the client needs: one form POST returning the body.
pub trait HttpTransport {
    fn post_form(&self, url: &str, body: String) -> std::result::Result<Vec<u8>, TransportError>;
}

/// Blocking `reqwest` transport.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GanttError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form(&self, url: &str, body: String) -> std::result::Result<Vec<u8>, TransportError> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()?
            .error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }
}

/// A decoded chart image and the format the service sent it in.
#[derive(Clone, Debug)]
pub struct ChartImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

impl ChartImage {
    /// Decode raw bytes, guessing the format from the content.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode()?;
        // decode() only succeeds once a format was recognised.
        let format = format.unwrap_or(ImageFormat::Png);
        Ok(Self { image, format })
    }

    pub fn width(&self) -> u32 { self.image.width() }
    pub fn height(&self) -> u32 { self.image.height() }
    pub fn format(&self) -> ImageFormat { self.format }

    /// Write to `path`, in the format its extension names or else the
    /// format the image arrived in.
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path).unwrap_or(self.format);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.image.save_with_format(path, format)?;
        Ok(())
    }
}

/// Talks to the chart service on behalf of a [`Chart`].
pub struct ChartClient<T: HttpTransport = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl ChartClient<ReqwestTransport> {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { base_url: config.base_url.clone(), transport: ReqwestTransport::new(config)? })
    }
}

impl<T: HttpTransport> ChartClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub fn transport(&self) -> &T { &self.transport }

    /// GET URL for embedding.
    pub fn url(&self, chart: &Chart) -> Result<String> {
        build_url(&self.base_url, chart)
    }

    /// POST the chart parameters and return the raw response body, or `None`
    /// if the exchange failed.
    pub fn fetch_bytes(&self, chart: &Chart) -> Result<Option<Vec<u8>>> {
        let body = chart.params()?.to_query_string();
        debug!(url = %self.base_url, bytes = body.len(), "posting chart params");
        match self.transport.post_form(&self.base_url, body) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) => {
                warn!(url = %self.base_url, error = %err, "chart request failed");
                Ok(None)
            }
        }
    }

    /// Fetch and decode the chart image, optionally saving it to `save_path`.
    ///
    /// Returns `Ok(None)` when the service could not be reached or answered
    /// with a non-success status.
    pub fn fetch_image(&self, chart: &Chart, save_path: Option<&Path>) -> Result<Option<ChartImage>> {
        let Some(bytes) = self.fetch_bytes(chart)? else {
            return Ok(None);
        };
        let image = ChartImage::decode(&bytes)?;
        if let Some(path) = save_path {
            image.save(path)?;
            info!(path = %path.display(), "saved chart image");
        }
        Ok(Some(image))
    }
}
