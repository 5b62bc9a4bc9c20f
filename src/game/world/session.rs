//! One table: the scene, the deck manager and the player's view, stepped once per frame.

use log::{info, warn};
use winit::keyboard::KeyCode;

use crate::engine::input::FrameInput;
use crate::engine::{Instance, Renderer, Scene};
use crate::game::cards::CardEngine;
use crate::game::config::GameConfig;
use crate::game::error::GameResult;
use crate::game::player::{ControlledView, ViewRequests};
use crate::game::world::table::build_table;

pub struct TableSession {
    pub scene: Scene,
    pub card_engine: CardEngine,
    pub view: ControlledView,
}

impl TableSession {
    /// Builds the table and lays out the deck; the first round is already scheduled.
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        let mut scene = Scene::new();
        let layout = build_table(&mut scene, &config.table);
        let mut card_engine = CardEngine::new(
            layout.deck,
            layout.values,
            layout.card_back_material,
            config.table.clone(),
            config.deal.clone(),
        );
        card_engine.start(&mut scene)?;
        info!("Table ready with {} cards", card_engine.card_list.len());

        Ok(Self {
            scene,
            card_engine,
            view: ControlledView::new(config.view.clone()),
        })
    }

    pub fn start(&mut self) -> ViewRequests {
        self.view.start()
    }

    /// `screen` is the drawable size in pixels.
    pub fn frame(
        &mut self,
        dt: f32,
        input: &FrameInput,
        window_holds_cursor: bool,
        screen: (f32, f32),
    ) -> ViewRequests {
        let requests = self.view.update(dt, input, window_holds_cursor);
        if requests.select {
            self.view.handle_selection(&mut self.scene, &mut self.card_engine, screen);
        }

        if input.was_pressed(KeyCode::KeyN) {
            if let Err(e) = self.card_engine.start_new_game(&mut self.scene) {
                warn!("Could not start a new round: {}", e);
            }
        }
        if input.was_pressed(KeyCode::Space) {
            if let Err(e) = self.card_engine.player_stand(&mut self.scene) {
                warn!("Cannot stand: {}", e);
            }
        }

        self.card_engine.update(dt, &mut self.scene);
        requests
    }

    /// One instance per visible object that has a material.
    pub fn scene_instances(&self) -> Vec<Instance> {
        self.scene
            .iter()
            .filter(|(_, obj)| obj.visible)
            .filter_map(|(id, obj)| {
                obj.material
                    .as_ref()
                    .map(|m| Instance::new(self.scene.world_matrix(id), m.color))
            })
            .collect()
    }

    pub fn overlay_instances(&self, screen: (f32, f32)) -> Vec<Instance> {
        self.view
            .crosshair(screen)
            .map(|c| Renderer::overlay_rect(c.center, (c.size, c.size), c.color))
            .into_iter()
            .collect()
    }
}
