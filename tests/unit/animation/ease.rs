use super::*;
use crate::foundation::core::Point;

fn set(points: &[(f64, f64)]) -> DotSet {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn converges_in_ceil_distance_over_speed_steps() {
    for speed in [1u32, 3, 5, 17] {
        for d0 in [0.5, 1.0, 7.0, 10.0, 33.3, 250.0] {
            for angle_deg in [0.0f64, 30.0, 135.0, 222.5, 300.0] {
                let a = angle_deg.to_radians();
                let goal = set(&[(12.0 + a.cos() * d0, -4.0 + a.sin() * d0)]);
                let mut live = set(&[(12.0, -4.0)]);

                let steps = (d0 / f64::from(speed)).ceil() as usize;
                let mut last = d0;
                for _ in 0..steps {
                    step_toward(&mut live, &goal, speed);
                    let d = live.get(0).unwrap().distance(goal.get(0).unwrap());
                    assert!(d <= last, "distance grew: {last} -> {d}");
                    last = d;
                }
                assert_eq!(live, goal, "speed={speed} d0={d0} angle={angle_deg}");
            }
        }
    }
}

#[test]
fn moves_exactly_speed_when_far() {
    let goal = set(&[(100.0, 0.0)]);
    let mut live = set(&[(0.0, 0.0)]);
    let out = step_toward(&mut live, &goal, 10);
    assert_eq!(live.get(0), Some(Point::new(10.0, 0.0)));
    assert_eq!(
        out,
        StepOutcome::Advanced {
            moving: 1,
            arrived: 0
        }
    );
    assert!(!out.is_settled());
}

#[test]
fn zero_speed_freezes_positions() {
    let goal = set(&[(5.0, 5.0), (-5.0, 0.0)]);
    let start = set(&[(0.0, 0.0), (1.0, 1.0)]);
    let mut live = start.clone();
    for _ in 0..20 {
        assert_eq!(step_toward(&mut live, &goal, 0), StepOutcome::Skipped);
    }
    assert_eq!(live, start);
}

#[test]
fn mismatched_or_empty_sets_are_skipped() {
    let mut live = set(&[(0.0, 0.0), (1.0, 1.0)]);
    let before = live.clone();
    assert_eq!(
        step_toward(&mut live, &set(&[(9.0, 9.0)]), 5),
        StepOutcome::Skipped
    );
    assert_eq!(step_toward(&mut live, &DotSet::new(), 5), StepOutcome::Skipped);
    assert_eq!(live, before);

    let mut empty = DotSet::new();
    assert_eq!(step_toward(&mut empty, &DotSet::new(), 5), StepOutcome::Skipped);
}

#[test]
fn settles_once_everything_arrives() {
    let goal = set(&[(3.0, 4.0), (0.0, 0.0)]);
    let mut live = set(&[(0.0, 0.0), (0.0, 0.0)]);
    let out = step_toward(&mut live, &goal, 5);
    assert!(out.is_settled());
    assert_eq!(live, goal);
}
