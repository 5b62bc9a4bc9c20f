//! The deck manager: lays out the deck, deals into the two hands and runs a round.

use std::collections::HashMap;
use std::fmt;

use glam::{Quat, Vec3};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::scene::Material;
use crate::engine::{ObjectId, Scene, Timers, Transform, Tweens};
use crate::game::cards::card::CardValue;
use crate::game::cards::hand::{hand_total, Hand, BLACKJACK};
use crate::game::config::{DealConfig, TableConfig};
use crate::game::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    PlayerBlackjack,
    PlayerWins,
    ComputerWins,
    PlayerBust,
    ComputerBust,
    Push,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RoundOutcome::PlayerBlackjack => "blackjack, player wins",
            RoundOutcome::PlayerWins => "player wins",
            RoundOutcome::ComputerWins => "computer wins",
            RoundOutcome::PlayerBust => "player busts, computer wins",
            RoundOutcome::ComputerBust => "computer busts, player wins",
            RoundOutcome::Push => "push",
        };
        f.write_str(text)
    }
}

/// Calls deferred to a later frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DealAction {
    OpeningDeal,
}

/// Card lying with its face up, flipped over about its long edge.
pub fn face_up_rotation() -> Quat {
    Quat::from_rotation_z(std::f32::consts::PI)
}

/// Card standing on its edge halfway through a flip; every flip turns through it.
pub fn flip_midway_rotation() -> Quat {
    Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)
}

pub struct CardEngine {
    deck: ObjectId,
    /// Cards still in the deck, bottom first.
    pub card_list: Vec<ObjectId>,
    pub card_back_material: Material,
    game_in_session: bool,
    player_hand: Hand,
    computer_hand: Hand,
    values: HashMap<ObjectId, CardValue>,
    hole_card: Option<ObjectId>,
    outcome: Option<RoundOutcome>,
    rng: StdRng,
    timers: Timers<DealAction>,
    tweens: Tweens,
    table: TableConfig,
    deal: DealConfig,
}

impl CardEngine {
    pub fn new(
        deck: ObjectId,
        values: HashMap<ObjectId, CardValue>,
        card_back_material: Material,
        table: TableConfig,
        deal: DealConfig,
    ) -> Self {
        let rng = match deal.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            deck,
            card_list: Vec::new(),
            card_back_material,
            game_in_session: false,
            player_hand: Hand::new(),
            computer_hand: Hand::new(),
            values,
            hole_card: None,
            outcome: None,
            rng,
            timers: Timers::new(),
            tweens: Tweens::new(),
            table,
            deal,
        }
    }

    /// Lays the deck out, dresses the card backs and opens the first round.
    pub fn start(&mut self, scene: &mut Scene) -> GameResult<()> {
        self.card_position(scene)?;
        self.assign_card_backs(scene)?;
        self.start_new_game(scene)
    }

    /// Rebuilds `card_list` from the deck's children and stacks them face down,
    /// then moves the deck to its resting place on the table.
    pub fn card_position(&mut self, scene: &mut Scene) -> GameResult<()> {
        self.card_list.clear();
        for &child in scene.children(self.deck) {
            if self.values.contains_key(&child) {
                self.card_list.push(child);
            } else {
                warn!("Deck child {:?} carries no card value, skipping", child);
            }
        }

        let mut j = 0.0;
        for &card in &self.card_list {
            let position = Vec3::new(0.0, j, 0.0);
            let obj = scene.get_mut(card).ok_or(GameError::UnknownObject(card))?;
            obj.transform = Transform::from_position(position);
            if let Some(value) = self.values.get_mut(&card) {
                value.card_position = position;
            }
            j += self.table.card_stack_step;
        }

        let deck = scene.get_mut(self.deck).ok_or(GameError::UnknownObject(self.deck))?;
        deck.transform.position = self.table.deck_position;
        debug!("Stacked {} cards at {:?}", self.card_list.len(), self.table.deck_position);
        Ok(())
    }

    /// Puts the back material on every card's second child.
    pub fn assign_card_backs(&self, scene: &mut Scene) -> GameResult<()> {
        for &card in &self.card_list {
            let back = scene.child(card, 1).ok_or(GameError::MissingCardBack(card))?;
            if let Some(obj) = scene.get_mut(back) {
                obj.material = Some(self.card_back_material.clone());
            }
        }
        Ok(())
    }

    /// Gathers all cards back into the deck and schedules the opening deal.
    /// Does nothing while a round is still running.
    pub fn start_new_game(&mut self, scene: &mut Scene) -> GameResult<()> {
        if self.game_in_session {
            info!("A round is already in session");
            return Ok(());
        }

        let mut returned = self.player_hand.clear();
        returned.extend(self.computer_hand.clear());
        if !returned.is_empty() {
            for &card in &returned {
                self.tweens.cancel(card);
                if !scene.set_parent_keep_world(card, Some(self.deck)) {
                    return Err(GameError::UnknownObject(card));
                }
            }
            self.card_position(scene)?;
        }

        self.timers.cancel_all();
        self.hole_card = None;
        self.outcome = None;
        self.game_in_session = true;
        self.timers.schedule(self.deal.deal_delay, DealAction::OpeningDeal);
        info!("New round started, dealing in {:.1}s", self.deal.deal_delay);
        Ok(())
    }

    /// Advances the pending deal and the card animations.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        // Tweens started by a firing action begin moving on the next frame.
        self.tweens.update(dt, scene);
        for action in self.timers.update(dt) {
            match action {
                DealAction::OpeningDeal => {
                    if let Err(e) = self.deal_opening_hands(scene) {
                        warn!("Opening deal failed: {}", e);
                    }
                }
            }
        }
    }

    fn deal_opening_hands(&mut self, scene: &mut Scene) -> GameResult<()> {
        if !self.game_in_session {
            return Err(GameError::NotInSession);
        }
        let sequence = [
            (Seat::Player, true),
            (Seat::Computer, true),
            (Seat::Player, true),
            (Seat::Computer, false),
        ];
        for (i, (seat, face_up)) in sequence.into_iter().enumerate() {
            let card = self.deal_to(scene, seat, face_up, i as f32 * self.deal.deal_interval)?;
            if !face_up {
                self.hole_card = Some(card);
            }
        }
        info!(
            "Opening hands dealt: player {}, computer shows {}",
            self.player_total(),
            self.computer_hand
                .cards()
                .first()
                .and_then(|c| self.values.get(c))
                .map(|v| v.value() as u32)
                .unwrap_or(0)
        );
        self.settle_opening_hands(scene)
    }

    /// A player dealt 21 has nothing to decide and stands at once.
    fn settle_opening_hands(&mut self, scene: &mut Scene) -> GameResult<()> {
        if self.player_total() == BLACKJACK {
            info!("Player opened on {}, standing", BLACKJACK);
            self.player_stand(scene)?;
        }
        Ok(())
    }

    /// Fails unless a round is running and its opening hands are on the table.
    fn ensure_player_turn(&self) -> GameResult<()> {
        if !self.game_in_session {
            return Err(GameError::NotInSession);
        }
        if self.deal_pending() {
            return Err(GameError::DealPending);
        }
        Ok(())
    }

    /// Draws a random card from the deck and sends it to the player, face up.
    pub fn give_player_card(&mut self, scene: &mut Scene) -> GameResult<ObjectId> {
        self.ensure_player_turn()?;
        let card = self.deal_to(scene, Seat::Player, true, 0.0)?;
        let total = self.player_total();
        debug!("Player total is now {}", total);
        if total > BLACKJACK {
            self.reveal_hole_card(scene);
            self.finish(RoundOutcome::PlayerBust);
        }
        Ok(card)
    }

    pub fn give_computer_card(&mut self, scene: &mut Scene, face_up: bool) -> GameResult<ObjectId> {
        self.ensure_player_turn()?;
        let card = self.deal_to(scene, Seat::Computer, face_up, 0.0)?;
        if !face_up && self.hole_card.is_none() {
            self.hole_card = Some(card);
        }
        Ok(card)
    }

    /// Ends the player's turn: the computer reveals its hole card and draws until it
    /// reaches its standing total, then the round is scored.
    pub fn player_stand(&mut self, scene: &mut Scene) -> GameResult<RoundOutcome> {
        self.ensure_player_turn()?;
        self.reveal_hole_card(scene);

        let mut draws = 0;
        while self.computer_total() < self.deal.computer_stands_on {
            let delay = (draws + 1) as f32 * self.deal.deal_interval;
            match self.deal_to(scene, Seat::Computer, true, delay) {
                Ok(_) => draws += 1,
                Err(GameError::DeckEmpty) => {
                    warn!("Deck ran out while the computer was drawing");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        let outcome = self.score();
        self.finish(outcome);
        Ok(outcome)
    }

    fn score(&self) -> RoundOutcome {
        let player = self.player_total();
        let computer = self.computer_total();
        let player_blackjack = self.player_hand.len() == 2 && player == BLACKJACK;
        let computer_blackjack = self.computer_hand.len() == 2 && computer == BLACKJACK;

        if player > BLACKJACK {
            RoundOutcome::PlayerBust
        } else if player_blackjack && !computer_blackjack {
            RoundOutcome::PlayerBlackjack
        } else if computer > BLACKJACK {
            RoundOutcome::ComputerBust
        } else if player > computer {
            RoundOutcome::PlayerWins
        } else if player < computer {
            RoundOutcome::ComputerWins
        } else {
            RoundOutcome::Push
        }
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.game_in_session = false;
        self.outcome = Some(outcome);
        info!(
            "Round over ({} vs {}): {}",
            self.player_total(),
            self.computer_total(),
            outcome
        );
    }

    fn reveal_hole_card(&mut self, scene: &Scene) {
        let Some(hole) = self.hole_card.take() else { return };
        let Some(slot) = self.computer_hand.cards().iter().position(|c| *c == hole) else {
            return;
        };
        if scene.get(hole).is_none() {
            return;
        }
        let target = self.slot_position(Seat::Computer, slot);
        self.tweens.start_via(
            hole,
            target,
            flip_midway_rotation(),
            face_up_rotation(),
            self.deal.move_duration,
            0.0,
        );
        debug!("Revealing hole card {:?}", hole);
    }

    /// Removes a random card from the deck and animates it into the next slot of `seat`.
    fn deal_to(&mut self, scene: &mut Scene, seat: Seat, face_up: bool, delay: f32) -> GameResult<ObjectId> {
        if self.card_list.is_empty() {
            warn!("Cannot deal to {:?}, the deck is empty", seat);
            return Err(GameError::DeckEmpty);
        }
        let index = self.rng.random_range(0..self.card_list.len());
        let card = self.card_list[index];
        if !scene.set_parent_keep_world(card, None) {
            return Err(GameError::UnknownObject(card));
        }
        self.card_list.remove(index);

        let slot = self.hand(seat).len();
        match seat {
            Seat::Player => self.player_hand.push(card),
            Seat::Computer => self.computer_hand.push(card),
        }
        debug_assert!(
            !(self.player_hand.contains(card) && self.computer_hand.contains(card)),
            "card held by both hands"
        );

        let target = self.slot_position(seat, slot);
        if face_up {
            self.tweens.start_via(
                card,
                target,
                flip_midway_rotation(),
                face_up_rotation(),
                self.deal.move_duration,
                delay,
            );
        } else {
            self.tweens.start(card, target, Quat::IDENTITY, self.deal.move_duration, delay);
        }

        if let Some(value) = self.values.get(&card) {
            if face_up {
                info!("Dealt {} to {:?}", value, seat);
            } else {
                info!("Dealt a face-down card to {:?}", seat);
            }
        }
        Ok(card)
    }

    /// World position of slot `index` in a hand, lifted so stacked cards never overlap.
    pub fn slot_position(&self, seat: Seat, index: usize) -> Vec3 {
        let origin = match seat {
            Seat::Player => self.table.player_hand_origin,
            Seat::Computer => self.table.computer_hand_origin,
        };
        let step = self.table.card_stack_step;
        origin
            + self.table.slot_direction.normalize_or_zero() * self.table.slot_spacing * index as f32
            + Vec3::Y * (step * 0.5 + step * index as f32)
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player_hand,
            Seat::Computer => &self.computer_hand,
        }
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn computer_hand(&self) -> &Hand {
        &self.computer_hand
    }

    fn total(&self, hand: &Hand) -> u32 {
        hand_total(hand.cards().iter().filter_map(|c| self.values.get(c)).map(|v| v.value()))
    }

    pub fn player_total(&self) -> u32 {
        self.total(&self.player_hand)
    }

    pub fn computer_total(&self) -> u32 {
        self.total(&self.computer_hand)
    }

    pub fn is_deck_card(&self, object: ObjectId) -> bool {
        self.card_list.contains(&object)
    }

    pub fn card_value(&self, card: ObjectId) -> GameResult<&CardValue> {
        self.values.get(&card).ok_or(GameError::NotACard(card))
    }

    pub fn deck(&self) -> ObjectId {
        self.deck
    }

    pub fn game_in_session(&self) -> bool {
        self.game_in_session
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn hole_card(&self) -> Option<ObjectId> {
        self.hole_card
    }

    /// True while the opening deal is still waiting on its delay.
    pub fn deal_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GameConfig;
    use crate::game::world::table::build_table;

    fn setup(seed: u64) -> (Scene, CardEngine) {
        let mut config = GameConfig::default();
        config.deal.rng_seed = Some(seed);
        let mut scene = Scene::new();
        let table = build_table(&mut scene, &config.table);
        let engine = CardEngine::new(
            table.deck,
            table.values,
            table.card_back_material,
            config.table.clone(),
            config.deal.clone(),
        );
        (scene, engine)
    }

    /// Keeps aces out of the draw pile so no hand can open on 21.
    fn without_aces(engine: &mut CardEngine) {
        let CardEngine { card_list, values, .. } = engine;
        card_list.retain(|c| !values[c].is_ace());
    }

    fn only_value(engine: &mut CardEngine, value: u8) {
        let CardEngine { card_list, values, .. } = engine;
        card_list.retain(|c| values[c].value() == value);
    }

    /// Skips the opening deal and puts hand-picked cards straight into the hands.
    /// The computer's second card is the hole card.
    fn rig(engine: &mut CardEngine, player: &[u8], computer: &[u8]) {
        engine.timers.cancel_all();
        for (seat, values) in [(Seat::Player, player), (Seat::Computer, computer)] {
            for &v in values {
                let idx = engine
                    .card_list
                    .iter()
                    .position(|c| engine.values[c].value() == v)
                    .unwrap();
                let card = engine.card_list.remove(idx);
                match seat {
                    Seat::Player => engine.player_hand.push(card),
                    Seat::Computer => engine.computer_hand.push(card),
                }
            }
        }
        engine.hole_card = engine.computer_hand.cards().get(1).copied();
    }

    fn started(seed: u64) -> (Scene, CardEngine) {
        let (mut scene, mut engine) = setup(seed);
        engine.start(&mut scene).unwrap();
        (scene, engine)
    }

    #[test]
    fn start_stacks_deck_and_dresses_backs() {
        let (scene, engine) = started(1);

        assert_eq!(engine.card_list.len(), 52);
        assert_eq!(scene.get(engine.deck()).unwrap().transform.position, Vec3::new(4.0, 0.976, 0.0));
        for (i, &card) in engine.card_list.iter().enumerate() {
            let expected = Vec3::new(0.0, i as f32 * 0.002, 0.0);
            assert!(engine.card_value(card).unwrap().card_position.abs_diff_eq(expected, 1e-6));
            let back = scene.child(card, 1).unwrap();
            assert_eq!(scene.get(back).unwrap().material.as_ref(), Some(&engine.card_back_material));
        }
        assert!(engine.game_in_session());
        assert!(engine.deal_pending());
    }

    #[test]
    fn missing_back_is_reported() {
        let mut scene = Scene::new();
        let deck = scene.spawn(crate::engine::SceneObject::new("Deck", Transform::default()));
        let card = scene
            .spawn_child(deck, crate::engine::SceneObject::new("Lonely", Transform::default()))
            .unwrap();
        let mut values = HashMap::new();
        values.insert(card, CardValue::new(5, crate::game::cards::Suit::Club, "Five").unwrap());
        let mut engine = CardEngine::new(
            deck,
            values,
            Material::new("Back", [0.0; 4]),
            TableConfig::default(),
            DealConfig::default(),
        );

        assert_eq!(engine.start(&mut scene), Err(GameError::MissingCardBack(card)));
    }

    #[test]
    fn opening_deal_waits_for_delay() {
        let (mut scene, mut engine) = started(2);

        engine.update(0.5, &mut scene);
        assert!(engine.player_hand().is_empty());

        engine.update(0.6, &mut scene);
        assert_eq!(engine.player_hand().len(), 2);
        assert_eq!(engine.computer_hand().len(), 2);
        assert_eq!(engine.card_list.len(), 48);
    }

    #[test]
    fn no_play_before_opening_deal() {
        let (mut scene, mut engine) = started(12);
        without_aces(&mut engine);

        assert_eq!(engine.give_player_card(&mut scene), Err(GameError::DealPending));
        assert_eq!(engine.player_stand(&mut scene), Err(GameError::DealPending));
        assert_eq!(engine.give_computer_card(&mut scene, true), Err(GameError::DealPending));
        assert!(engine.player_hand().is_empty());
        assert!(engine.computer_hand().is_empty());
        assert!(engine.game_in_session());
        assert_eq!(engine.outcome(), None);

        engine.update(1.0, &mut scene);
        assert_eq!(engine.player_hand().len(), 2);
        assert_eq!(engine.computer_hand().len(), 2);
        assert!(engine.give_player_card(&mut scene).is_ok());
        assert_eq!(engine.player_hand().len(), 3);
    }

    #[test]
    fn hole_card_stays_face_down() {
        let (mut scene, mut engine) = started(3);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        for _ in 0..40 {
            engine.update(0.1, &mut scene);
        }

        assert!(engine.game_in_session());
        let hole = engine.computer_hand().cards()[1];
        assert_eq!(engine.hole_card(), Some(hole));
        let rot = scene.get(hole).unwrap().transform.rotation;
        assert!(rot.dot(Quat::IDENTITY).abs() > 0.9999);

        let first = engine.player_hand().cards()[0];
        let rot = scene.get(first).unwrap().transform.rotation;
        assert!(rot.dot(face_up_rotation()).abs() > 0.9999);
    }

    #[test]
    fn face_up_cards_flip_through_the_same_edge() {
        let (mut scene, mut engine) = started(13);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        // First card: no delay, halfway through its move.
        engine.update(engine.deal.move_duration * 0.5, &mut scene);

        let first = engine.player_hand().cards()[0];
        let rot = scene.get(first).unwrap().transform.rotation;
        assert!(rot.dot(flip_midway_rotation()).abs() > 0.9999);
    }

    #[test]
    fn dealt_cards_come_to_rest_in_slots() {
        let (mut scene, mut engine) = started(4);
        engine.update(1.0, &mut scene);
        for _ in 0..40 {
            engine.update(0.1, &mut scene);
        }
        assert!(!engine.is_animating());

        for (slot, &card) in engine.player_hand().cards().iter().enumerate() {
            assert_eq!(scene.parent(card), None);
            let pos = scene.world_position(card);
            assert!(pos.abs_diff_eq(engine.slot_position(Seat::Player, slot), 1e-5));
        }
    }

    #[test]
    fn no_card_is_in_two_places() {
        let (mut scene, mut engine) = started(5);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        assert!(engine.game_in_session());
        while engine.game_in_session() {
            engine.give_player_card(&mut scene).unwrap();
        }

        for &card in engine.player_hand().cards() {
            assert!(!engine.computer_hand().contains(card));
            assert!(!engine.is_deck_card(card));
        }
        for &card in engine.computer_hand().cards() {
            assert!(!engine.is_deck_card(card));
        }
        let aces = 4;
        let total = engine.card_list.len() + engine.player_hand().len() + engine.computer_hand().len();
        assert_eq!(total + aces, 52);
    }

    #[test]
    fn bust_ends_round_and_blocks_more_cards() {
        let (mut scene, mut engine) = started(6);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        assert!(engine.game_in_session());
        // Without a stand the only way out of the round is going over 21.
        while engine.game_in_session() {
            engine.give_player_card(&mut scene).unwrap();
        }

        assert!(engine.player_total() > BLACKJACK);
        assert_eq!(engine.outcome(), Some(RoundOutcome::PlayerBust));
        assert_eq!(engine.hole_card(), None);
        assert_eq!(engine.give_player_card(&mut scene), Err(GameError::NotInSession));
    }

    #[test]
    fn stand_lets_computer_draw_to_seventeen() {
        let (mut scene, mut engine) = started(7);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        assert!(engine.game_in_session());

        let outcome = engine.player_stand(&mut scene).unwrap();
        assert!(!engine.game_in_session());
        assert_eq!(engine.outcome(), Some(outcome));
        assert!(engine.computer_total() >= 17);
        assert_eq!(engine.hole_card(), None);
        assert_eq!(engine.player_stand(&mut scene), Err(GameError::NotInSession));
    }

    #[test]
    fn new_game_is_ignored_while_in_session() {
        let (mut scene, mut engine) = started(8);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        assert!(engine.game_in_session());
        let hand = engine.player_hand().clone();

        engine.start_new_game(&mut scene).unwrap();
        assert_eq!(engine.player_hand(), &hand);
        assert!(!engine.deal_pending());
    }

    #[test]
    fn new_game_returns_cards_to_deck() {
        let (mut scene, mut engine) = started(9);
        without_aces(&mut engine);
        engine.update(1.0, &mut scene);
        engine.player_stand(&mut scene).unwrap();

        engine.start_new_game(&mut scene).unwrap();
        assert!(engine.player_hand().is_empty());
        assert!(engine.computer_hand().is_empty());
        assert_eq!(engine.card_list.len(), 52);
        assert_eq!(engine.outcome(), None);
        assert!(engine.deal_pending());
        for &card in &engine.card_list {
            assert_eq!(scene.parent(card), Some(engine.deck()));
            assert_eq!(scene.get(card).unwrap().transform.rotation, Quat::IDENTITY);
        }
    }

    #[test]
    fn empty_deck_is_an_error() {
        let (mut scene, mut engine) = started(10);
        engine.timers.cancel_all();
        engine.card_list.clear();
        assert_eq!(engine.give_player_card(&mut scene), Err(GameError::DeckEmpty));
    }

    #[test]
    fn higher_total_wins() {
        let (mut scene, mut engine) = started(11);
        rig(&mut engine, &[10, 9], &[10, 8]);
        assert_eq!(engine.player_stand(&mut scene).unwrap(), RoundOutcome::PlayerWins);
    }

    #[test]
    fn lower_total_loses() {
        let (mut scene, mut engine) = started(14);
        rig(&mut engine, &[10, 7], &[10, 9]);
        assert_eq!(engine.player_stand(&mut scene).unwrap(), RoundOutcome::ComputerWins);
        assert_eq!(engine.computer_hand().len(), 2);
    }

    #[test]
    fn equal_totals_push() {
        let (mut scene, mut engine) = started(15);
        rig(&mut engine, &[10, 8], &[10, 8]);
        assert_eq!(engine.player_stand(&mut scene).unwrap(), RoundOutcome::Push);
    }

    #[test]
    fn computer_busts_drawing_on_sixteen() {
        let (mut scene, mut engine) = started(16);
        rig(&mut engine, &[10, 8], &[10, 6]);
        only_value(&mut engine, 10);

        assert_eq!(engine.player_stand(&mut scene).unwrap(), RoundOutcome::ComputerBust);
        assert_eq!(engine.computer_hand().len(), 3);
        assert_eq!(engine.computer_total(), 26);
    }

    #[test]
    fn player_busts_on_hit() {
        let (mut scene, mut engine) = started(17);
        rig(&mut engine, &[10, 9], &[10, 7]);
        only_value(&mut engine, 10);

        engine.give_player_card(&mut scene).unwrap();
        assert_eq!(engine.outcome(), Some(RoundOutcome::PlayerBust));
        assert!(!engine.game_in_session());
        assert_eq!(engine.hole_card(), None);
        assert_eq!(engine.computer_hand().len(), 2);
    }

    #[test]
    fn two_card_twenty_one_beats_drawn_twenty_one() {
        let (mut scene, mut engine) = started(18);
        rig(&mut engine, &[11, 10], &[10, 4]);
        only_value(&mut engine, 7);

        assert_eq!(engine.player_stand(&mut scene).unwrap(), RoundOutcome::PlayerBlackjack);
        assert_eq!(engine.computer_total(), 21);
        assert_eq!(engine.computer_hand().len(), 3);
    }

    #[test]
    fn both_blackjacks_push() {
        let (mut scene, mut engine) = started(19);
        rig(&mut engine, &[11, 10], &[11, 10]);
        assert_eq!(engine.player_stand(&mut scene).unwrap(), RoundOutcome::Push);
    }

    #[test]
    fn opening_twenty_one_stands_automatically() {
        let (mut scene, mut engine) = started(20);
        rig(&mut engine, &[11, 10], &[9, 8]);

        engine.settle_opening_hands(&mut scene).unwrap();
        assert!(!engine.game_in_session());
        assert_eq!(engine.outcome(), Some(RoundOutcome::PlayerBlackjack));
        assert_eq!(engine.hole_card(), None);
    }

    #[test]
    fn opening_below_twenty_one_waits_for_player() {
        let (mut scene, mut engine) = started(21);
        rig(&mut engine, &[10, 9], &[9, 8]);

        engine.settle_opening_hands(&mut scene).unwrap();
        assert!(engine.game_in_session());
        assert_eq!(engine.outcome(), None);
        assert!(engine.hole_card().is_some());
    }
}
