use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::app::error::AppError;
use crate::app::ports::{ImageFetcher, ImageLister};
use crate::catalog::listing::parse_listing;

fn build_client(timeout: Duration) -> Result<Client, AppError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

fn get_ok(client: &Client, url: &str) -> Result<Response, AppError> {
    let response = client.get(url).send()?;
    let status = response.status();
    debug!("GET {url} -> {status}");
    if status != StatusCode::OK {
        return Err(AppError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Scrapes image links out of an HTML listing page.
#[derive(Debug, Clone)]
pub struct HttpImageLister {
    client: Client,
    marker: String,
}

impl HttpImageLister {
    pub fn new(marker: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: build_client(timeout)?,
            marker: marker.into(),
        })
    }
}

impl ImageLister for HttpImageLister {
    fn list_images(&self, listing_url: &str) -> Result<Vec<String>, AppError> {
        let body = get_ok(&self.client, listing_url)?.text()?;
        let urls = parse_listing(&body, listing_url, &self.marker);
        info!("listing {listing_url} offered {} image(s)", urls.len());
        Ok(urls)
    }
}

#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let bytes = get_ok(&self.client, url)?.bytes()?;
        Ok(bytes.to_vec())
    }
}
