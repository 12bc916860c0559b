//! Demo input source: chooses interceptor aim points from a snapshot.

use nova_core::config::Rules;
use nova_core::enums::GameStatus;
use nova_core::geometry::{distance, lerp_point, Point};
use nova_core::state::{GameStateSnapshot, ThreatView};

/// Extra reference frames of lead so the blast has grown when the threat arrives.
const BLAST_LEAD_FRAMES: f64 = 10.0;

/// Aim at the threat nearest to landing that no interceptor is already
/// heading for. Returns `None` when there is nothing worth firing at.
pub fn pick_target(snapshot: &GameStateSnapshot, rules: &Rules) -> Option<Point> {
    if snapshot.status != GameStatus::Playing || rules.interceptor_speed <= 0.0 {
        return None;
    }

    // Interceptors always take 1 / speed reference frames regardless of range.
    let lead = 1.0 / rules.interceptor_speed + BLAST_LEAD_FRAMES;
    let covered = |aim: Point| {
        snapshot
            .interceptors
            .iter()
            .any(|interceptor| distance(interceptor.target, aim) < rules.blast_max_radius)
    };

    let mut threats: Vec<&ThreatView> = snapshot.threats.iter().collect();
    threats.sort_by(|a, b| b.progress.total_cmp(&a.progress));

    threats
        .into_iter()
        .map(|threat| project(threat, lead))
        .find(|&aim| !covered(aim))
}

/// Where `threat` will be after `frames` more reference frames.
pub fn project(threat: &ThreatView, frames: f64) -> Point {
    let progress = (threat.progress + threat.speed * frames).min(1.0);
    lerp_point(threat.origin, threat.target, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::state::InterceptorView;

    fn threat(id: u32, origin: Point, target: Point, progress: f64) -> ThreatView {
        ThreatView {
            id,
            position: lerp_point(origin, target, progress),
            origin,
            target,
            progress,
            speed: 0.002,
        }
    }

    fn playing(threats: Vec<ThreatView>) -> GameStateSnapshot {
        GameStateSnapshot {
            status: GameStatus::Playing,
            threats,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_threats_no_target() {
        assert_eq!(pick_target(&playing(Vec::new()), &Rules::default()), None);
    }

    #[test]
    fn test_idle_session_never_fires() {
        let mut snapshot = playing(vec![threat(
            1,
            Point::new(100.0, 0.0),
            Point::new(200.0, 570.0),
            0.5,
        )]);
        snapshot.status = GameStatus::Won;
        assert_eq!(pick_target(&snapshot, &Rules::default()), None);
    }

    #[test]
    fn test_prefers_threat_nearest_to_landing() {
        let snapshot = playing(vec![
            threat(1, Point::new(100.0, 0.0), Point::new(200.0, 570.0), 0.2),
            threat(2, Point::new(700.0, 0.0), Point::new(600.0, 570.0), 0.6),
        ]);
        let aim = pick_target(&snapshot, &Rules::default()).unwrap();
        // 0.6 + 0.002 * 60 = 0.72 of the way down the second path.
        assert!(distance(aim, Point::new(628.0, 410.4)) < 1e-6);
    }

    #[test]
    fn test_skips_threat_already_engaged() {
        let mut snapshot = playing(vec![
            threat(1, Point::new(100.0, 0.0), Point::new(200.0, 570.0), 0.2),
            threat(2, Point::new(700.0, 0.0), Point::new(600.0, 570.0), 0.6),
        ]);
        snapshot.interceptors.push(InterceptorView {
            id: 1,
            position: Point::new(750.0, 550.0),
            launch: Point::new(750.0, 550.0),
            target: Point::new(628.0, 410.0),
            progress: 0.0,
        });
        let aim = pick_target(&snapshot, &Rules::default()).unwrap();
        assert!(aim.x < 200.0, "second choice is the western threat");
    }

    #[test]
    fn test_projection_stops_at_target() {
        let t = threat(1, Point::new(0.0, 0.0), Point::new(300.0, 570.0), 0.95);
        assert_eq!(project(&t, 1000.0), Point::new(300.0, 570.0));
    }
}
