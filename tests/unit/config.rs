use super::*;
use crate::render::recording::RecordingSurface;
use crate::scene::Command;

#[test]
fn empty_object_uses_defaults() {
    let cfg = SceneConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SceneConfig::default());
    assert_eq!(cfg.text, "checking");
    assert_eq!(cfg.speed, 5);
    assert_eq!(cfg.viewport, Viewport::default());
}

#[test]
fn parses_every_field() {
    let cfg = SceneConfig::from_json(
        r##"{
            "viewport": {"width": 200, "height": 100, "scale": 2},
            "text": "hello",
            "text_style": {"size": 3, "step": 2},
            "background": "#102030",
            "color": [1, 2, 3],
            "speed": 9,
            "effect": "spiral",
            "morph": "disperse",
            "seed": 42,
            "script": [{"frame": 10, "command": "next"}, {"frame": 20, "command": {"select": 7}}]
        }"##,
    )
    .unwrap();

    assert_eq!(cfg.viewport.scale, 2.0);
    assert_eq!(cfg.text_style.size, 3.0);
    assert_eq!(cfg.text_style.step, 2.0);
    assert_eq!(cfg.text_style.offset, 0.0);
    assert_eq!(cfg.background, Rgb8::new(0x10, 0x20, 0x30));
    assert_eq!(cfg.color, Rgb8::new(1, 2, 3));
    assert_eq!(cfg.effect, EffectRef::Name("spiral".to_owned()));
    assert_eq!(cfg.morph, MorphMode::Disperse);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.script[1].command, Command::Select(7));
}

#[test]
fn effect_accepts_index_or_name() {
    let by_index = SceneConfig::from_json(r#"{"effect": 3}"#).unwrap();
    assert_eq!(by_index.effect.resolve().unwrap().index(), 3);

    let by_name = SceneConfig::from_json(r#"{"effect": "ring"}"#).unwrap();
    assert_eq!(by_name.effect.resolve().unwrap(), EffectKind::Ring);

    assert_eq!("12".parse::<EffectRef>().unwrap(), EffectRef::Index(12));
    assert_eq!(
        "heart".parse::<EffectRef>().unwrap(),
        EffectRef::Name("heart".to_owned())
    );
}

#[test]
fn bad_input_is_a_config_error() {
    for json in [
        "not json",
        r#"{"unknown_field": 1}"#,
        r#"{"morph": "sideways"}"#,
    ] {
        assert!(
            matches!(SceneConfig::from_json(json), Err(DotsError::Config(_))),
            "{json}"
        );
    }

    let unknown_effect = SceneConfig::from_json(r#"{"effect": "nope"}"#).unwrap();
    assert!(matches!(unknown_effect.validate(), Err(DotsError::Config(_))));
    let out_of_range = SceneConfig::from_json(r#"{"effect": 999}"#).unwrap();
    assert!(matches!(out_of_range.validate(), Err(DotsError::Config(_))));
}

#[test]
fn missing_config_file_is_a_config_error() {
    let err = SceneConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, DotsError::Config(_)));
}

#[test]
fn json_round_trips() {
    let mut cfg = SceneConfig::default();
    cfg.seed = Some(1);
    cfg.effect = EffectRef::Name("heart".to_owned());
    let back = SceneConfig::from_json(&cfg.to_json().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn build_scene_lays_out_text_and_applies_effect() {
    let cfg = SceneConfig {
        viewport: Viewport::new(300.0, 200.0).unwrap(),
        text: "ab".to_owned(),
        text_style: TextStyle {
            size: 2.0,
            ..TextStyle::default()
        },
        effect: EffectRef::Name("circle".to_owned()),
        speed: 3,
        seed: Some(9),
        ..SceneConfig::default()
    };
    let scene = cfg.build_scene(Path::new(".")).unwrap();

    assert!(!scene.source().is_empty());
    assert_eq!(scene.target().len(), scene.source().len());
    assert_eq!(scene.effect(), EffectKind::Circle.index());
    assert_eq!(scene.speed(), 3);
    assert_eq!(scene.live(), scene.target());
}

#[test]
fn build_session_queues_the_script() {
    let cfg = SceneConfig::from_json(
        r#"{
            "seed": 1,
            "script": [
                {"frame": 4, "command": "random"},
                {"frame": 1, "command": "clear"}
            ]
        }"#,
    )
    .unwrap();
    let session = cfg
        .build_session(Path::new("."), Box::new(RecordingSurface::new()))
        .unwrap();
    let frames: Vec<u64> = session.pending().iter().map(|c| c.frame).collect();
    assert_eq!(frames, vec![1, 4]);
}

#[test]
fn missing_font_file_fails_to_build() {
    let cfg = SceneConfig {
        font: Some(FontConfig {
            path: PathBuf::from("no-such-font.png"),
            alphabet: "ab".to_owned(),
            cell_width: 2,
            cell_height: 2,
        }),
        ..SceneConfig::default()
    };
    assert!(cfg.build_scene(Path::new("/nonexistent")).is_err());
}
