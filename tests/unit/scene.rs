use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::font::builtin;
use crate::render::recording::{RecordingSurface, SurfaceOp};

fn scene() -> Scene {
    let vp = Viewport::new(100.0, 100.0).unwrap();
    Scene::with_seed(builtin::glyph_table().unwrap(), vp, 7).unwrap()
}

fn small_text_scene() -> Scene {
    let mut s = scene();
    s.set_text_style(TextStyle {
        size: 2.0,
        ..TextStyle::default()
    })
    .unwrap();
    s.set_text("hi").unwrap();
    s
}

#[test]
fn defaults_match_the_original_style_state() {
    let s = scene();
    assert_eq!(s.speed(), DEFAULT_SPEED);
    assert_eq!(s.effect(), 0);
    assert_eq!(s.background(), Rgb8::BLACK);
    assert_eq!(s.color(), Rgb8::WHITE);
    assert_eq!(s.morph(), MorphMode::Assemble);
    assert!(s.source().is_empty() && s.target().is_empty() && s.live().is_empty());
}

#[test]
fn speed_setters_saturate_at_zero() {
    let mut s = scene();
    s.set_speed(1);
    s.decrease_speed();
    s.decrease_speed();
    assert_eq!(s.speed(), 0);
    s.increase_speed();
    assert_eq!(s.speed(), 1);
}

#[test]
fn effect_cursor_saturates_at_both_ends() {
    let mut s = scene();
    s.previous_effect();
    assert_eq!(s.effect(), 0);
    s.set_effect(registry::len() - 1);
    s.next_effect();
    assert_eq!(s.effect(), registry::len() - 1);
    s.apply_next_effect();
    assert_eq!(s.effect(), registry::len() - 1);
}

#[test]
fn set_text_replaces_source_and_live() {
    let mut s = small_text_scene();
    let n = s.source().len();
    assert!(n > 0);
    assert_eq!(s.live(), s.source());

    s.set_text("hi").unwrap();
    assert_eq!(s.source().len(), n);
    assert!(s.target().is_empty());
}

#[test]
fn add_text_appends_to_existing_dots() {
    let mut s = scene();
    s.add_dot(3.0, 4.0);
    let style = TextStyle {
        size: 1.0,
        ..TextStyle::default()
    };
    let added = s.add_text("i", &style).unwrap();
    assert!(added > 0);
    assert_eq!(s.source().len(), added + 1);
    assert_eq!(s.live().len(), added + 1);
    assert_eq!(s.source().get(0), Some(crate::foundation::core::Point::new(3.0, 4.0)));
}

#[test]
fn assemble_seeds_live_from_the_effect_and_returns_to_text() {
    let mut s = small_text_scene();
    let kind = s.apply_effect(Some(EffectKind::Ring.index()));
    assert_eq!(kind, Some(EffectKind::Ring));
    assert_eq!(s.live(), s.target());
    assert_ne!(s.live(), s.source());

    let mut frames = 0;
    while !s.is_settled() {
        s.advance();
        frames += 1;
        assert!(frames < 1_000, "never settled");
    }
    assert_eq!(s.live(), s.source());
}

#[test]
fn disperse_moves_live_toward_the_effect() {
    let mut s = small_text_scene();
    s.set_morph(MorphMode::Disperse);
    s.apply_effect(Some(EffectKind::Ring.index()));
    assert_eq!(s.live(), s.source());

    for _ in 0..1_000 {
        if s.advance().is_settled() {
            break;
        }
    }
    assert!(s.is_settled());
    assert_eq!(s.live(), s.target());
}

#[test]
fn out_of_range_apply_clears_target_and_keeps_cursor() {
    let mut s = small_text_scene();
    s.set_effect(3);
    s.apply_effect(None);
    assert!(!s.target().is_empty());

    assert_eq!(s.apply_effect(Some(registry::len())), None);
    assert!(s.target().is_empty());
    assert_eq!(s.effect(), 3);
}

#[test]
fn apply_effect_with_explicit_index_does_not_move_cursor() {
    let mut s = small_text_scene();
    s.apply_effect(Some(10));
    assert_eq!(s.effect(), 0);
}

#[test]
fn random_effect_lands_inside_the_registry() {
    let mut s = small_text_scene();
    for _ in 0..50 {
        let kind = s.apply_random_effect();
        assert!(kind.is_some());
        assert!(s.effect() < registry::len());
    }
}

#[test]
fn clear_dots_empties_every_set() {
    let mut s = small_text_scene();
    s.apply_effect(None);
    s.add_effect_dot(1.0, 1.0);
    s.clear_dots();
    assert_eq!(s.source().len(), 0);
    assert_eq!(s.live().len(), 0);
    assert_eq!(s.target().len(), 0);
}

#[test]
fn zero_speed_freezes_live_positions() {
    let mut s = small_text_scene();
    s.apply_effect(None);
    s.set_speed(0);
    let before = s.live().clone();
    let mut surface = RecordingSurface::new();
    for _ in 0..5 {
        s.render_frame(&mut surface).unwrap();
    }
    assert_eq!(s.live(), &before);
    assert!(!s.is_settled());
}

#[test]
fn truncating_effect_freezes_instead_of_panicking() {
    let mut s = small_text_scene();
    s.apply_effect(Some(EffectKind::Puzzle.index()));
    let before = s.live().clone();
    if before.len() != s.source().len() {
        assert_eq!(s.advance(), StepOutcome::Skipped);
        assert_eq!(s.live(), &before);
    }
}

#[test]
fn render_frame_runs_steps_in_order() {
    let mut s = small_text_scene();
    s.set_background(1, 2, 3);
    s.set_color(4, 5, 6);
    s.apply_effect(None);

    let log = Rc::new(RefCell::new(Vec::new()));
    let pre = Rc::clone(&log);
    let post = Rc::clone(&log);
    s.on_pre_draw(Some(Box::new(move || pre.borrow_mut().push("pre"))));
    s.on_post_draw(Some(Box::new(move || post.borrow_mut().push("post"))));

    let mut surface = RecordingSurface::new();
    let frame = s.render_frame(&mut surface).unwrap();

    assert_eq!(*log.borrow(), vec!["pre", "post"]);
    assert_eq!(frame.data, vec![1, 2, 3, 255]);
    let ops = surface.ops();
    assert_eq!(ops.len(), 4);
    assert_eq!(ops[0], SurfaceOp::Begin(*s.viewport()));
    assert_eq!(ops[1], SurfaceOp::Background(Rgb8::new(1, 2, 3)));
    match &ops[2] {
        SurfaceOp::Dots { dots, color } => {
            assert_eq!(*color, Rgb8::new(4, 5, 6));
            assert_eq!(dots.as_slice(), s.live().as_slice());
        }
        other => panic!("expected dots, got {other:?}"),
    }
    assert_eq!(ops[3], SurfaceOp::End);

    s.clear_callbacks();
    s.render_frame(&mut surface).unwrap();
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn empty_scene_draws_background_only() {
    let mut s = scene();
    let mut surface = RecordingSurface::new();
    s.render_frame(&mut surface).unwrap();
    assert!(
        !surface
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::Dots { .. }))
    );
}

#[test]
fn commands_drive_the_scene() {
    let mut s = small_text_scene();
    s.execute(&Command::Next).unwrap();
    assert_eq!(s.effect(), 1);
    s.execute(&Command::Previous).unwrap();
    s.execute(&Command::Previous).unwrap();
    assert_eq!(s.effect(), 0);
    s.execute(&Command::SpeedUp).unwrap();
    assert_eq!(s.speed(), DEFAULT_SPEED + 1);
    s.execute(&Command::SetSpeed(2)).unwrap();
    s.execute(&Command::SpeedDown).unwrap();
    assert_eq!(s.speed(), 1);

    let n = s.source().len();
    s.execute(&Command::SetText(String::new())).unwrap();
    assert_eq!(s.source().len(), n);

    s.execute(&Command::SetText("i".to_owned())).unwrap();
    assert!(s.source().len() < n);
    assert_eq!(s.target().len(), s.source().len());

    s.execute(&Command::Clear).unwrap();
    assert!(s.source().is_empty());
}

#[test]
fn commands_deserialize_from_snake_case_json() {
    let cmds: Vec<Command> =
        serde_json::from_str(r#"["next", {"select": 4}, {"set_text": "ok"}, "speed_up"]"#).unwrap();
    assert_eq!(
        cmds,
        vec![
            Command::Next,
            Command::Select(4),
            Command::SetText("ok".to_owned()),
            Command::SpeedUp
        ]
    );
}

#[test]
fn invalid_viewport_is_rejected() {
    let glyphs = builtin::glyph_table().unwrap();
    let vp = Viewport {
        width: 0.0,
        height: 10.0,
        scale: 1.0,
    };
    assert!(Scene::with_seed(glyphs, vp, 1).is_err());
}
