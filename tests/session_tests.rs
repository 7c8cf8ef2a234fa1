//! Session lifecycle and arcade runner integration tests.
//!
//! These tests verify that a whole visit (name entry, several games,
//! leaving) keeps the counters consistent and renders the right results.

use rust_arcade::arcade::SELECT_PROMPT;
use rust_arcade::session::lifecycle::{ENTER_NAME, PICK_ANOTHER};
use rust_arcade::{
    Arcade, ArcadeConfig, ArcadeError, ArcadeRng, GameId, Host, Medal, PortError, RecordingSink,
    ScriptedPort,
};

/// Test a visit spanning two games, ending with a rendered summary.
#[test]
fn test_run_across_games() {
    let seed = 17;
    let secret = ArcadeRng::new(seed)
        .for_context("guessing")
        .gen_range_inclusive(1..=10);

    let mut arcade = Arcade::new(ArcadeConfig::new().with_seed(seed));
    let mut port = ScriptedPort::new()
        .answer("oracle")
        .answer("Ada")
        .answer("Is this fun?")
        .answer("no") // keep playing
        .answer("yes") // pick another
        .answer("guess")
        .answer(secret.to_string())
        .answer("no") // keep playing
        .answer("no"); // pick another
    let mut sink = RecordingSink::new();

    let summary = arcade
        .run(&mut Host::new(&mut port, &mut sink))
        .unwrap();

    assert_eq!(port.remaining(), 0);
    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.wins, 2);
    assert_eq!(summary.medal, Medal::Silicon);

    // The name is asked once, on the first game only
    let prompts = port.prompts();
    assert_eq!(prompts.iter().filter(|p| **p == ENTER_NAME).count(), 1);
    assert_eq!(prompts.iter().filter(|p| **p == SELECT_PROMPT).count(), 2);
    assert_eq!(
        prompts.last().copied(),
        Some(format!("Ada, {PICK_ANOTHER}").as_str())
    );

    assert!(arcade.state().session_ended());
    assert_eq!(arcade.state().active_game(), None);
    assert!(!sink.selection_visible);
    assert!(sink.reload_visible);
}

/// Test leaving a duel without playing: 0 games, 0%, stone medal.
#[test]
fn test_no_games_played_is_stone() {
    let mut arcade = Arcade::new(ArcadeConfig::new().with_seed(1).with_player_name("Ada"));
    let mut port = ScriptedPort::from_answers(["duel", "no", "no"]);
    let mut sink = RecordingSink::new();

    let summary = arcade
        .run(&mut Host::new(&mut port, &mut sink))
        .unwrap();

    assert_eq!(summary.games_played, 0);
    assert_eq!(summary.win_percentage, 0.0);
    assert_eq!(summary.medal, Medal::Stone);
    assert_eq!(
        sink.results.as_deref(),
        Some("<tr><td>0</td><td>0</td><td>0.00%</td></tr>")
    );
    assert_eq!(sink.medal.map(Medal::caption).as_deref(), Some("You win the stone medal."));
}

/// Test that the same seed replays the same session.
#[test]
fn test_seed_replays_oracle_answers() {
    let script = ["Ada", "Q1?", "yes", "Q2?", "no", "no"];

    let answers = |seed: u64| {
        let mut arcade = Arcade::new(ArcadeConfig::new().with_seed(seed));
        let mut port = ScriptedPort::from_answers(script);
        let mut sink = RecordingSink::new();
        arcade
            .play(GameId::Oracle, &mut Host::new(&mut port, &mut sink))
            .unwrap();
        port.notices().into_iter().map(str::to_string).collect::<Vec<_>>()
    };

    assert_eq!(answers(99), answers(99));
}

/// Test that a reload starts a fresh session asking for the name again.
#[test]
fn test_reload_asks_name_again() {
    let mut arcade = Arcade::new(ArcadeConfig::new().with_seed(5));
    let mut sink = RecordingSink::new();

    let mut first = ScriptedPort::from_answers(["duel", "Ada", "no", "no"]);
    arcade.run(&mut Host::new(&mut first, &mut sink)).unwrap();
    arcade.reload(&mut sink).unwrap();

    let mut second = ScriptedPort::from_answers(["duel", "Grace", "no", "no"]);
    arcade.run(&mut Host::new(&mut second, &mut sink)).unwrap();

    assert_eq!(second.prompts()[1], ENTER_NAME);
    assert_eq!(arcade.state().player_name(), Some("Grace"));
}

/// Test that running out of input surfaces as a port error.
#[test]
fn test_run_surfaces_port_error() {
    let mut arcade = Arcade::new(ArcadeConfig::new().with_seed(5));
    let mut port = ScriptedPort::from_answers(["guess", "Ada"]);
    let mut sink = RecordingSink::new();

    let err = arcade
        .run(&mut Host::new(&mut port, &mut sink))
        .unwrap_err();

    assert!(matches!(err, ArcadeError::Port(PortError::Exhausted(2))));
    assert!(arcade.state().is_active(GameId::Guessing));
}
