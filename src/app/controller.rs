use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::events::AppEvent;
use crate::app::info::InfoDisplay;
use crate::app::ports::{ImageDecoder, ImageFetcher, ImageLister};
use crate::app::state::AppState;
use crate::canvas::{Canvas, ItemId};
use crate::catalog::ImageCatalog;
use crate::engine::flatten::{group_selection, GroupOutcome};
use crate::infra::config::AppConfig;

/// Application context handed to every UI handler. Owns the discovered
/// catalog, the canvas and the status line.
pub struct ApplicationController {
    config: AppConfig,
    state: AppState,
    catalog: ImageCatalog,
    canvas: Canvas,
    info: InfoDisplay,
    lister: Box<dyn ImageLister>,
    fetcher: Box<dyn ImageFetcher>,
    decoder: Box<dyn ImageDecoder>,
    rng: StdRng,
}

impl ApplicationController {
    pub fn new(
        config: AppConfig,
        canvas: Canvas,
        lister: Box<dyn ImageLister>,
        fetcher: Box<dyn ImageFetcher>,
        decoder: Box<dyn ImageDecoder>,
    ) -> Self {
        Self {
            config,
            state: AppState::default(),
            catalog: ImageCatalog::default(),
            canvas,
            info: InfoDisplay::default(),
            lister,
            fetcher,
            decoder,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Loads the remote listing. A failed listing leaves the catalog empty.
    pub fn bootstrap(&mut self) -> usize {
        let listing_url = self.config.listing_url.clone();
        match self.lister.list_images(&listing_url) {
            Ok(urls) => {
                self.catalog = ImageCatalog::new(urls);
                self.state.catalog_loaded = true;
                info!("discovered {} image(s)", self.catalog.len());
            }
            Err(error) => {
                warn!("image listing unavailable: {error}");
                self.catalog = ImageCatalog::default();
            }
        }
        self.catalog.len()
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::AddImage => {
                self.add_image();
            }
            AppEvent::GroupImages => {
                self.group_images();
            }
            AppEvent::SelectOnly(id) => self.canvas.select_only(id),
            AppEvent::ToggleSelected(id) => self.canvas.toggle_selected(id),
            AppEvent::ClearSelection => self.canvas.clear_selection(),
            AppEvent::MoveSelection { dx, dy } => self.canvas.move_selected(dx, dy),
        }
    }

    /// Fetches a random catalog image and places it. Every failure is a silent no-op.
    pub fn add_image(&mut self) -> Option<ItemId> {
        let Some(url) = self.catalog.choose(&mut self.rng).map(str::to_string) else {
            debug!("add image skipped: catalog is empty");
            return None;
        };

        let bytes = match self.fetcher.fetch(&url) {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!("fetch failed for {url}: {error}");
                return None;
            }
        };

        let bitmap = match self.decoder.decode(&bytes, &url) {
            Ok(bitmap) => bitmap,
            Err(error) => {
                warn!("decode failed for {url}: {error}");
                return None;
            }
        };

        self.info.update(&bitmap);
        let id = self.canvas.add(bitmap);
        self.state.last_reported = Some(id);
        Some(id)
    }

    pub fn group_images(&mut self) -> Option<GroupOutcome> {
        let outcome = group_selection(&mut self.canvas)?;
        if let Some(snapshot) = self.canvas.image(outcome.flattened) {
            self.info.update(&snapshot.bitmap);
        }
        self.state.last_reported = Some(outcome.flattened);
        Some(outcome)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    pub fn info_text(&self) -> Option<&str> {
        self.info.text()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
