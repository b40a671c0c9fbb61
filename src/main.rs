#![allow(dead_code)]

mod app;
mod canvas;
mod catalog;
mod engine;
mod infra;
mod ui;

use std::process::ExitCode;

use log::{error, info};

use app::controller::ApplicationController;
use app::error::AppError;
use canvas::{Canvas, RandomPlacement};
use engine::decode::TempFileDecoder;
use infra::config::AppConfig;
use infra::http::{HttpImageFetcher, HttpImageLister};

fn main() -> ExitCode {
    infra::logging::init_logging();
    let config = AppConfig::default();

    let mut controller = match build_controller(&config) {
        Ok(controller) => controller,
        Err(error) => {
            error!("failed to set up icon-canvas: {error}");
            return ExitCode::from(1);
        }
    };

    let discovered = controller.bootstrap();
    info!(
        "icon-canvas ready (listing: {}, images: {discovered})",
        config.listing_url
    );

    match ui::app_shell::launch_window(controller, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::from(1)
        }
    }
}

fn build_controller(config: &AppConfig) -> Result<ApplicationController, AppError> {
    Ok(ApplicationController::new(
        config.clone(),
        Canvas::new(Box::new(RandomPlacement::new(config.placement_extent))),
        Box::new(HttpImageLister::new(
            config.listing_marker.clone(),
            config.request_timeout,
        )?),
        Box::new(HttpImageFetcher::new(config.request_timeout)?),
        Box::new(TempFileDecoder::new()),
    ))
}
