use proptest::prelude::*;

use crate::commands::PlayerCommand;
use crate::components::StructureRef;
use crate::config::Rules;
use crate::constants::*;
use crate::enums::*;
use crate::events::GameEvent;
use crate::geometry::{distance, lerp_point, within_box, Point};
use crate::state::GameStateSnapshot;
use crate::types::SimTime;

// ---- Serde ----

#[test]
fn test_game_status_serde() {
    let variants = vec![
        GameStatus::Start,
        GameStatus::Playing,
        GameStatus::Won,
        GameStatus::Lost,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_player_command_tagged() {
    let json = serde_json::to_string(&PlayerCommand::Launch { x: 400.0, y: 300.0 }).unwrap();
    assert!(json.contains("\"type\":\"Launch\""), "got {json}");

    let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartGame"}"#).unwrap();
    assert_eq!(back, PlayerCommand::StartGame);
}

#[test]
fn test_event_serializes_with_type_tag() {
    let event = GameEvent::WaveCleared { wave: 3 };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"type":"WaveCleared","wave":3}"#);
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = GameStateSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status, GameStatus::Start);
    assert!(back.threats.is_empty());
}

// ---- Labels and status ----

#[test]
fn test_structure_labels() {
    let turret = StructureRef {
        kind: StructureKind::Turret,
        id: 1,
    };
    let city = StructureRef {
        kind: StructureKind::City,
        id: 5,
    };
    assert_eq!(turret.to_string(), "t1");
    assert_eq!(city.to_string(), "c5");
}

#[test]
fn test_terminal_statuses() {
    assert!(!GameStatus::Start.is_terminal());
    assert!(!GameStatus::Playing.is_terminal());
    assert!(GameStatus::Won.is_terminal());
    assert!(GameStatus::Lost.is_terminal());
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(16.0);
    time.advance(17.5);
    assert_eq!(time.frame, 2);
    assert!((time.elapsed_ms - 33.5).abs() < 1e-9);
}

// ---- Geometry ----

#[test]
fn test_distance_pythagorean() {
    let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert!((d - 5.0).abs() < 1e-12);
}

#[test]
fn test_lerp_point_midpoint_and_overshoot() {
    let a = Point::new(50.0, 550.0);
    let b = Point::new(400.0, 300.0);
    assert_eq!(lerp_point(a, b, 0.5), Point::new(225.0, 425.0));
    // Unclamped: t > 1 continues past the end.
    assert_eq!(lerp_point(a, b, 2.0), Point::new(750.0, 50.0));
}

#[test]
fn test_within_box_is_strict() {
    let c = Point::new(200.0, 570.0);
    assert!(within_box(c, Point::new(204.9, 565.1), IMPACT_TOLERANCE));
    assert!(!within_box(c, Point::new(205.0, 570.0), IMPACT_TOLERANCE));
    // A box, not a circle: the corner is inside even though it is ~6.9 away.
    assert!(within_box(c, Point::new(204.9, 574.9), IMPACT_TOLERANCE));
}

// ---- Rules ----

#[test]
fn test_default_rules_match_constants() {
    let rules = Rules::default();
    assert_eq!(rules.width, 800.0);
    assert_eq!(rules.height, 600.0);
    assert_eq!(rules.turrets, vec![Point::new(50.0, 550.0), Point::new(750.0, 550.0)]);
    assert_eq!(rules.cities.len(), 5);
    assert!(rules.cities.iter().all(|c| c.y == 570.0));
    assert_eq!(rules.win_score, 5000);
    assert_eq!(rules.turret_max_ammo, 30);
}

#[test]
fn test_wave_scaling() {
    let rules = Rules::default();
    assert_eq!(rules.threats_in_wave(1), 10);
    assert_eq!(rules.threats_in_wave(2), 15);
    assert_eq!(rules.threats_in_wave(5), 30);

    assert_eq!(rules.spawn_interval_ms(1), 2000.0);
    assert_eq!(rules.spawn_interval_ms(2), 1800.0);
    assert_eq!(rules.spawn_interval_ms(8), 600.0);
    assert_eq!(rules.spawn_interval_ms(9), 500.0);
    assert_eq!(rules.spawn_interval_ms(20), 500.0);

    assert_eq!(rules.threat_speed_multiplier(1), 1.0);
    assert!((rules.threat_speed_multiplier(3) - 1.4).abs() < 1e-12);
}

#[test]
fn test_rules_partial_json_override() {
    let rules = Rules::from_json_str(r#"{ "win_score": 100, "turret_max_ammo": 3 }"#).unwrap();
    assert_eq!(rules.win_score, 100);
    assert_eq!(rules.turret_max_ammo, 3);
    assert_eq!(rules.points_per_threat, POINTS_PER_THREAT);
    assert_eq!(rules.cities.len(), CITY_POSITIONS.len());
}

#[test]
fn test_rules_rejects_malformed_json() {
    assert!(Rules::from_json_str("{ win_score: ").is_err());
    assert!(Rules::from_json_str(r#"{ "win_score": "lots" }"#).is_err());
}

proptest! {
    #[test]
    fn prop_lerp_hits_endpoints(
        ax in -1000.0f64..1000.0, ay in -1000.0f64..1000.0,
        bx in -1000.0f64..1000.0, by in -1000.0f64..1000.0,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert!(distance(lerp_point(a, b, 0.0), a) < 1e-9);
        prop_assert!(distance(lerp_point(a, b, 1.0), b) < 1e-9);
    }

    #[test]
    fn prop_lerp_distance_is_proportional(
        bx in -1000.0f64..1000.0, by in -1000.0f64..1000.0, t in 0.0f64..1.0,
    ) {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(bx, by);
        let travelled = distance(a, lerp_point(a, b, t));
        prop_assert!((travelled - t * distance(a, b)).abs() < 1e-6);
    }
}
