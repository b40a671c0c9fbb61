use std::collections::HashMap;

use eframe::egui;
use egui::{Color32, ColorImage, Pos2, Rect, Sense, Stroke, StrokeKind, TextureHandle, Vec2};

use crate::app::controller::ApplicationController;
use crate::app::error::AppError;
use crate::app::events::AppEvent;
use crate::canvas::{Bounds, ItemId, Position};
use crate::infra::config::AppConfig;

const CANVAS_BACKGROUND: Color32 = Color32::from_gray(245);
const SELECTION_STROKE: Stroke = Stroke {
    width: 2.0,
    color: Color32::from_rgb(40, 120, 220),
};

pub struct AppShellState {
    controller: ApplicationController,
    textures: HashMap<ItemId, TextureHandle>,
    drag_remainder: Vec2,
}

impl AppShellState {
    fn new(controller: ApplicationController) -> Self {
        Self {
            controller,
            textures: HashMap::new(),
            drag_remainder: Vec2::ZERO,
        }
    }

    fn texture_for(&mut self, ctx: &egui::Context, id: ItemId) -> Option<TextureHandle> {
        if let Some(texture) = self.textures.get(&id) {
            return Some(texture.clone());
        }

        let image = self.controller.canvas().image(id)?;
        let size = [image.width() as usize, image.height() as usize];
        let pixels = ColorImage::from_rgba_unmultiplied(size, image.bitmap.as_raw());
        let texture = ctx.load_texture(
            format!("canvas-item-{}", id.get()),
            pixels,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(id, texture.clone());
        Some(texture)
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Image").clicked() {
                self.controller.dispatch(AppEvent::AddImage);
            }
            if ui.button("Group Images").clicked() {
                self.controller.dispatch(AppEvent::GroupImages);
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, CANVAS_BACKGROUND);

        let to_canvas = |pos: Pos2| {
            Position::new(
                (pos.x - origin.x).floor() as i32,
                (pos.y - origin.y).floor() as i32,
            )
        };

        if response.clicked() {
            let additive = ui.input(|input| input.modifiers.command);
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| self.controller.canvas().hit_test(to_canvas(pos)));
            match (hit, additive) {
                (Some(id), true) => self.controller.dispatch(AppEvent::ToggleSelected(id)),
                (Some(id), false) => self.controller.dispatch(AppEvent::SelectOnly(id)),
                (None, _) => self.controller.dispatch(AppEvent::ClearSelection),
            }
        }

        if response.drag_started() {
            self.drag_remainder = Vec2::ZERO;
            let hit = ui
                .input(|input| input.pointer.press_origin())
                .and_then(|pos| self.controller.canvas().hit_test(to_canvas(pos)));
            if let Some(id) = hit {
                if !self.controller.canvas().selected().contains(&id) {
                    self.controller.dispatch(AppEvent::SelectOnly(id));
                }
            }
        }

        if response.dragged() {
            let delta = self.drag_remainder + response.drag_delta();
            let (dx, dy) = (delta.x.trunc(), delta.y.trunc());
            self.drag_remainder = Vec2::new(delta.x - dx, delta.y - dy);
            self.controller.dispatch(AppEvent::MoveSelection {
                dx: dx as i32,
                dy: dy as i32,
            });
        }

        let to_screen = |bounds: Bounds| {
            Rect::from_min_size(
                origin + Vec2::new(bounds.x as f32, bounds.y as f32),
                Vec2::new(bounds.width as f32, bounds.height as f32),
            )
        };

        let images: Vec<(ItemId, Bounds)> = self
            .controller
            .canvas()
            .items()
            .iter()
            .filter_map(|item| item.as_image().map(|image| (item.id, image.bounds())))
            .collect();
        for (id, bounds) in images {
            if let Some(texture) = self.texture_for(ui.ctx(), id) {
                painter.image(
                    texture.id(),
                    to_screen(bounds),
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        }

        for id in self.controller.canvas().selected() {
            if let Some(bounds) = self.controller.canvas().bounds_of(id) {
                painter.rect_stroke(to_screen(bounds), 0.0, SELECTION_STROKE, StrokeKind::Outside);
            }
        }
    }
}

impl eframe::App for AppShellState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        egui::TopBottomPanel::bottom("info")
            .exact_height(50.0)
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(self.controller.info_text().unwrap_or_default());
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.canvas(ui));
    }
}

/// Runs the window until it is closed. Blocks the calling thread.
pub fn launch_window(controller: ApplicationController, config: &AppConfig) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(AppShellState::new(controller)))),
    )
    .map_err(|error| AppError::Ui(error.to_string()))
}
