use std::time::Duration;

use crate::canvas::placement::DEFAULT_PLACEMENT_EXTENT;

pub const DEFAULT_LISTING_URL: &str =
    "https://github.com/hfg-gmuend/openmoji/raw/master/src/symbols/geometric/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listing_url: String,
    /// Substring a listing line must contain to be considered an image link.
    pub listing_marker: String,
    pub placement_extent: i32,
    pub request_timeout: Duration,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            listing_marker: "geometric".to_string(),
            placement_extent: DEFAULT_PLACEMENT_EXTENT,
            request_timeout: Duration::from_secs(30),
            window_title: "icon-canvas".to_string(),
            window_size: [800.0, 600.0],
        }
    }
}
