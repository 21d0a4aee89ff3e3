use super::*;
use crate::encode::sink::InMemorySink;
use crate::font::builtin;
use crate::foundation::core::Viewport;
use crate::layout::text::TextStyle;
use crate::render::recording::RecordingSurface;

fn session() -> Session {
    let vp = Viewport::new(120.0, 80.0).unwrap();
    let mut scene = Scene::with_seed(builtin::glyph_table().unwrap(), vp, 3).unwrap();
    scene
        .set_text_style(TextStyle {
            size: 2.0,
            ..TextStyle::default()
        })
        .unwrap();
    scene.set_text("ok").unwrap();
    scene.apply_effect(None);
    Session::new(scene, Box::new(RecordingSurface::new()))
}

#[test]
fn run_pushes_every_frame_in_order() {
    let mut s = session();
    let mut sink = InMemorySink::new();
    let stats = s.run(4, &mut sink).unwrap();

    assert_eq!(stats.frames_rendered, 4);
    assert_eq!(s.frame(), 4);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);
    assert!(sink.is_ended());
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 120,
            height: 80
        })
    );
}

#[test]
fn run_until_settled_stops_once_dots_arrive() {
    let mut s = session();
    let mut sink = InMemorySink::new();
    let stats = s.run_until_settled(10_000, &mut sink).unwrap();

    let settled = stats.settled_at.unwrap();
    assert_eq!(stats.frames_rendered, settled + 1);
    assert!(stats.frames_rendered < 10_000);
    assert_eq!(s.scene().live(), s.scene().source());
}

#[test]
fn run_until_settled_respects_the_cap() {
    let mut s = session();
    s.scene_mut().set_speed(0);
    let mut sink = InMemorySink::new();
    let stats = s.run_until_settled(5, &mut sink).unwrap();
    assert_eq!(stats.frames_rendered, 5);
    assert_eq!(stats.settled_at, None);
}

#[test]
fn scheduled_commands_run_before_their_frame() {
    let mut s = session();
    s.schedule(2, Command::Next).unwrap();
    s.schedule(2, Command::SpeedUp).unwrap();
    s.schedule(1, Command::SetSpeed(1)).unwrap();
    assert_eq!(s.pending().len(), 3);
    assert_eq!(s.pending()[0].frame, 1);

    let mut sink = InMemorySink::new();
    s.run(2, &mut sink).unwrap();
    assert_eq!(s.scene().speed(), 1);
    assert_eq!(s.scene().effect(), 0);

    s.run(1, &mut sink).unwrap();
    assert_eq!(s.scene().speed(), 2);
    assert_eq!(s.scene().effect(), 1);
    assert!(s.pending().is_empty());
}

#[test]
fn settling_waits_for_pending_commands() {
    let mut s = session();
    s.scene_mut().set_speed(1_000);
    s.schedule(5, Command::Next).unwrap();

    let mut sink = InMemorySink::new();
    let stats = s.run_until_settled(100, &mut sink).unwrap();
    assert!(stats.frames_rendered > 5);
    assert_eq!(s.scene().effect(), 1);
}

#[test]
fn scheduling_in_the_past_is_rejected() {
    let mut s = session();
    s.skip_frames(3).unwrap();
    assert_eq!(s.frame(), 3);
    assert!(s.schedule(1, Command::Apply).is_err());
    assert!(s.schedule(3, Command::Apply).is_ok());
}

#[test]
fn skip_frames_advances_without_drawing() {
    let mut s = session();
    let before = s.scene().live().clone();
    s.skip_frames(2).unwrap();
    assert_ne!(s.scene().live(), &before);
}
