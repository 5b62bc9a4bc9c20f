//! Builds the table, the deck and its cards in a scene.

use std::collections::HashMap;

use glam::Vec3;

use crate::engine::physics::BoxCollider;
use crate::engine::scene::Material;
use crate::engine::{ObjectId, Scene, SceneObject, Transform};
use crate::game::cards::card::{standard_deck, CardValue, MAX_CARD_VALUE, MIN_CARD_VALUE};
use crate::game::config::TableConfig;

pub struct TableLayout {
    pub deck: ObjectId,
    pub values: HashMap<ObjectId, CardValue>,
    pub card_back_material: Material,
}

fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Face colour shades from plain towards the suit colour as the value rises.
fn face_material(card: &CardValue, config: &TableConfig) -> Material {
    let tint = if card.suit.is_red() {
        config.red_suit_tint
    } else {
        config.black_suit_tint
    };
    let span = (MAX_CARD_VALUE - MIN_CARD_VALUE) as f32;
    let t = 0.15 + 0.45 * (card.value() - MIN_CARD_VALUE) as f32 / span;
    Material::new(format!("{} face", card), mix(config.card_face_color, tint, t))
}

/// Spawns one card: an empty root with the face as child 0 and the back as child 1.
/// The card is one stacking step thick, split evenly between its two halves.
fn spawn_card(scene: &mut Scene, deck: ObjectId, card: &CardValue, config: &TableConfig) -> Option<ObjectId> {
    let (width, length) = config.card_size;
    let half = config.card_stack_step * 0.5;
    let scale = Vec3::new(width, half, length);
    let collider = BoxCollider::new(Vec3::ZERO, Vec3::splat(0.5));

    let root = scene.spawn_child(deck, SceneObject::new(card.to_string(), Transform::default()))?;
    scene.spawn_child(
        root,
        SceneObject::new("Face", Transform::from_position(Vec3::new(0.0, -half * 0.5, 0.0)).with_scale(scale))
            .with_material(face_material(card, config))
            .with_collider(collider)
            .with_layer(config.card_layer),
    )?;
    scene.spawn_child(
        root,
        SceneObject::new("Back", Transform::from_position(Vec3::new(0.0, half * 0.5, 0.0)).with_scale(scale))
            .with_material(Material::new("Unpainted", [0.8, 0.8, 0.8, 1.0]))
            .with_collider(collider)
            .with_layer(config.card_layer),
    )?;
    Some(root)
}

pub fn build_table(scene: &mut Scene, config: &TableConfig) -> TableLayout {
    scene.spawn(
        SceneObject::new("Table", Transform::from_position(config.table_center).with_scale(config.table_size))
            .with_material(Material::new("Felt", config.table_color))
            .with_collider(BoxCollider::new(Vec3::ZERO, Vec3::splat(0.5))),
    );
    let deck = scene.spawn(SceneObject::new("Deck", Transform::default()));

    let mut values = HashMap::new();
    for card in standard_deck() {
        if let Some(root) = spawn_card(scene, deck, &card, config) {
            values.insert(root, card);
        }
    }

    TableLayout {
        deck,
        values,
        card_back_material: Material::new("Card Back", config.card_back_color),
    }
}
