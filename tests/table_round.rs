use card_table::engine::input::FrameInput;
use card_table::game::{GameConfig, GameError, RoundOutcome, TableSession};
use glam::Vec3;
use winit::keyboard::KeyCode;

const SCREEN: (f32, f32) = (1280.0, 720.0);
const DT: f32 = 1.0 / 60.0;

/// A seeded table with the camera hovering just in front of the deck.
fn session_looking(pitch: f32, yaw: f32) -> TableSession {
    let mut config = GameConfig::default();
    config.deal.rng_seed = Some(42);
    config.view.camera_position = Vec3::new(4.0, 2.0, -0.3);
    config.view.camera_euler = (pitch, yaw);
    let mut session = TableSession::new(&config).expect("table builds");
    session.start();
    session
}

fn click() -> FrameInput {
    FrameInput {
        left_pressed: true,
        ..Default::default()
    }
}

fn press(key: KeyCode) -> FrameInput {
    let mut input = FrameInput::default();
    input.keys_pressed.insert(key);
    input
}

/// Takes the aces out of play: nobody can open on 21 and clicks pass straight through them.
fn set_aside_aces(session: &mut TableSession) {
    let engine = &mut session.card_engine;
    let aces: Vec<_> = engine
        .card_list
        .iter()
        .copied()
        .filter(|&c| engine.card_value(c).map(|v| v.is_ace()).unwrap_or(false))
        .collect();
    assert_eq!(aces.len(), 4);
    engine.card_list.retain(|c| !aces.contains(c));
    for ace in aces {
        for part in session.scene.children(ace).to_vec() {
            if let Some(obj) = session.scene.get_mut(part) {
                obj.collider = None;
            }
        }
    }
}

fn idle(session: &mut TableSession, seconds: f32) {
    let steps = (seconds / DT).ceil() as usize;
    for _ in 0..steps {
        session.frame(DT, &FrameInput::default(), true, SCREEN);
    }
}

#[test]
fn clicking_the_deck_deals_to_the_player() {
    let mut session = session_looking(72.0, 180.0);
    set_aside_aces(&mut session);
    idle(&mut session, 3.0);
    assert_eq!(session.card_engine.player_hand().len(), 2);
    assert_eq!(session.card_engine.card_list.len(), 44);

    let requests = session.frame(DT, &click(), true, SCREEN);
    assert!(requests.select);
    assert_eq!(session.card_engine.player_hand().len(), 3);
    assert_eq!(session.card_engine.card_list.len(), 43);
    let dealt = session.card_engine.player_hand().cards()[2];
    assert!(!session.card_engine.is_deck_card(dealt));
}

#[test]
fn nothing_happens_before_the_opening_deal() {
    let mut session = session_looking(72.0, 180.0);
    set_aside_aces(&mut session);

    session.frame(DT, &press(KeyCode::Space), true, SCREEN);
    session.frame(DT, &click(), true, SCREEN);
    assert!(session.card_engine.game_in_session());
    assert_eq!(session.card_engine.outcome(), None);
    assert!(session.card_engine.player_hand().is_empty());
    assert_eq!(
        session.card_engine.player_stand(&mut session.scene),
        Err(GameError::DealPending)
    );

    idle(&mut session, 3.0);
    assert_eq!(session.card_engine.player_hand().len(), 2);
    assert_eq!(session.card_engine.computer_hand().len(), 2);
    assert!(session.card_engine.game_in_session());
}

#[test]
fn clicking_the_felt_deals_nothing() {
    let mut session = session_looking(45.0, 90.0);
    session.frame(DT, &click(), true, SCREEN);
    assert!(session.card_engine.player_hand().is_empty());
    assert_eq!(session.card_engine.card_list.len(), 52);
}

#[test]
fn unlocked_cursor_does_not_select() {
    let mut session = session_looking(72.0, 180.0);
    set_aside_aces(&mut session);
    idle(&mut session, 3.0);
    let requests = session.frame(DT, &press(KeyCode::Escape), true, SCREEN);
    assert_eq!(requests.cursor_lock, Some(false));
    assert!(session.overlay_instances(SCREEN).is_empty());

    let requests = session.frame(DT, &click(), false, SCREEN);
    assert!(!requests.select);
    assert_eq!(session.card_engine.player_hand().len(), 2);
}

#[test]
fn crosshair_drawn_while_locked() {
    let session = session_looking(72.0, 180.0);
    let overlay = session.overlay_instances(SCREEN);
    assert_eq!(overlay.len(), 1);
    assert_eq!(overlay[0].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn full_round_then_new_round() {
    let mut session = session_looking(72.0, 180.0);
    set_aside_aces(&mut session);
    idle(&mut session, 0.5);
    assert!(session.card_engine.player_hand().is_empty());

    idle(&mut session, 3.0);
    assert_eq!(session.card_engine.player_hand().len(), 2);
    assert_eq!(session.card_engine.computer_hand().len(), 2);
    assert!(!session.card_engine.is_animating());
    assert!(session.card_engine.game_in_session());

    session.frame(DT, &press(KeyCode::Space), true, SCREEN);
    assert!(!session.card_engine.game_in_session());
    let outcome = session.card_engine.outcome().expect("round was scored");
    let player = session.card_engine.player_total();
    let computer = session.card_engine.computer_total();
    match outcome {
        RoundOutcome::PlayerWins => assert!(player > computer),
        RoundOutcome::ComputerWins => assert!(computer > player),
        RoundOutcome::Push => assert_eq!(player, computer),
        RoundOutcome::ComputerBust => assert!(computer > 21),
        RoundOutcome::PlayerBlackjack => assert_eq!(player, 21),
        RoundOutcome::PlayerBust => assert!(player > 21),
    }

    // Clicking the deck between rounds is refused.
    session.frame(DT, &click(), true, SCREEN);
    assert_eq!(
        session.card_engine.give_player_card(&mut session.scene),
        Err(GameError::NotInSession)
    );

    session.frame(DT, &press(KeyCode::KeyN), true, SCREEN);
    assert!(session.card_engine.game_in_session());
    assert!(session.card_engine.player_hand().is_empty());
    assert_eq!(session.card_engine.card_list.len(), 52);
    assert!(session.card_engine.deal_pending());
}

#[test]
fn every_visible_part_is_drawn() {
    let session = session_looking(72.0, 180.0);
    // Table plus a face and a back for each of the 52 cards.
    assert_eq!(session.scene_instances().len(), 1 + 52 * 2);
}
