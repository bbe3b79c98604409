//! End-to-end animator scenarios against the in-memory document.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use animator::mock::{MockDocument, MockElement, SequentialIdGenerator};
use animator::prelude::*;
use animator::{DELAY_PROPERTY, PLAY_STATE_PROPERTY};
use pretty_assertions::assert_eq;

const FADE_JSON: &str = r#"{
    "name": "fade",
    "duration": "2s",
    "keyframes": {
        "0%": {"opacity": 0},
        "100%": {"opacity": 1}
    }
}"#;

fn stage() -> (MockDocument, MockElement, MockElement) {
    let mut doc = MockDocument::new();
    let first = doc.add_element(MockElement::new("div").with_id("first"));
    let second = doc.add_element(MockElement::new("div").with_id("second"));
    (doc, first, second)
}

#[test]
fn json_options_to_injected_stylesheet() {
    let (mut doc, first, _) = stage();
    let config = AnimationConfig::from_json_str(FADE_JSON).unwrap();
    let mut ids = SequentialIdGenerator::new("xyz");

    let animator = Animator::create_with(
        &mut doc,
        "#first",
        &config,
        &AnimatorSettings::default(),
        &mut ids,
    )
    .unwrap();

    assert_eq!(animator.class_name(), "animator-xyz0");
    assert!(first.has_class("animator-xyz0"));
    assert_eq!(
        doc.stylesheets(),
        [".animator-xyz0 { animation: fade 2s      ; } \
          @keyframes fade { 0% { opacity: 0; } 100% { opacity: 1; } }"]
    );
}

#[test]
fn two_elements_get_independent_animators() {
    let (mut doc, first, second) = stage();
    let config = AnimationConfig::from_json_str(FADE_JSON).unwrap();

    let a = Animator::create(&mut doc, "#first", &config).unwrap();
    let b = Animator::create(&mut doc, Target::element(second.clone()), &config).unwrap();

    assert_ne!(a.class_name(), b.class_name());
    assert_eq!(doc.stylesheets().len(), 2);
    assert!(doc.stylesheets()[0].starts_with(&format!(".{} ", a.class_name())));
    assert!(doc.stylesheets()[1].starts_with(&format!(".{} ", b.class_name())));

    a.pause();
    assert_eq!(first.inline_style(PLAY_STATE_PROPERTY).as_deref(), Some("paused"));
    assert_eq!(second.inline_style(PLAY_STATE_PROPERTY), None);
}

#[test]
fn same_element_twice_appends_second_stylesheet() {
    let (mut doc, first, _) = stage();
    let config: AnimationConfig = AnimationSpec::new("spin").duration("1s").into();

    let a = Animator::create(&mut doc, "#first", &config).unwrap();
    let b = Animator::create(&mut doc, "#first", &config).unwrap();

    assert_eq!(doc.stylesheets().len(), 2);
    assert!(first.has_class(a.class_name()));
    assert!(first.has_class(b.class_name()));
    assert_eq!(first.id().as_deref(), Some("first"));
}

#[test]
fn sequence_options_from_yaml() {
    let (mut doc, _, _) = stage();
    let yaml = r"
- name: slide
  duration: 1s
  timingFunction: ease-out
  keyframes:
    from: { transform: translateX(0) }
    to: { transform: translateX(40px) }
- name: fade
  duration: 1s
  iterationCount: 2
  keyframes:
    from: { opacity: 0 }
    to: { opacity: 1 }
";
    let config = AnimationConfig::from_yaml_str(yaml).unwrap();
    let mut ids = SequentialIdGenerator::new("q");
    let animator = Animator::create_with(
        &mut doc,
        "#second",
        &config,
        &AnimatorSettings::default(),
        &mut ids,
    )
    .unwrap();

    assert_eq!(
        animator.stylesheet(),
        ".animator-q0 { animation: slide 1s ease-out     ,fade 1s   2   ; } \
         @keyframes slide { from { transform: translateX(0); } to { transform: translateX(40px); } } \
         @keyframes fade { from { opacity: 0; } to { opacity: 1; } }"
    );
}

#[test]
fn invalid_options_never_touch_the_document() {
    let (mut doc, first, _) = stage();
    for json in [r#"[{"name": "ok"}, {"duration": "1s"}]"#, r#"{"duration": "1s"}"#, "[]"] {
        let config = AnimationConfig::from_json_str(json).unwrap();
        let err = Animator::create(&mut doc, "#first", &config).unwrap_err();
        assert!(
            matches!(
                err,
                ConfigurationError::MissingName { .. } | ConfigurationError::EmptySequence
            ),
            "unexpected error for {json}: {err}"
        );
    }
    assert!(doc.stylesheets().is_empty());
    assert!(first.classes().is_empty());
}

#[test]
fn non_object_options_rejected() {
    let err = AnimationConfig::from_json_str(r#""fade 2s""#).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidShape { .. }));
}

#[test]
fn controls_round_trip() {
    let (mut doc, first, _) = stage();
    let config: AnimationConfig = AnimationSpec::new("pulse")
        .duration("800ms")
        .iteration_count("infinite")
        .play_state("paused")
        .keyframe("50%", [("transform", "scale(1.1)")])
        .into();
    first.set_computed_style(PLAY_STATE_PROPERTY, "paused");
    let settings = AnimatorSettings::new().with_toggle(ToggleMode::Live);
    let animator = Animator::create_with(
        &mut doc,
        "#first",
        &config,
        &settings,
        &mut SequentialIdGenerator::new("p"),
    )
    .unwrap();

    animator.toggle();
    assert_eq!(animator.inline_play_state(), Some(PlayState::Running));

    animator.seek("-400ms").pause();
    assert_eq!(first.inline_style(DELAY_PROPERTY).as_deref(), Some("-400ms"));
    assert_eq!(animator.inline_play_state(), Some(PlayState::Paused));

    animator.toggle();
    assert_eq!(animator.inline_play_state(), Some(PlayState::Running));
}

#[test]
fn settings_file_drives_prefixes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animator.json");
    std::fs::write(&path, r#"{"idPrefix": "fx_", "classPrefix": "fx-"}"#).unwrap();
    let settings = AnimatorSettings::load(&path).unwrap();

    let mut doc = MockDocument::new();
    let el = doc.add_element(MockElement::new("canvas"));
    let animator = Animator::create_with(
        &mut doc,
        "canvas",
        &AnimationSpec::new("glow").into(),
        &settings,
        &mut SequentialIdGenerator::new("1"),
    )
    .unwrap();

    assert_eq!(el.id().as_deref(), Some("fx_10"));
    assert_eq!(animator.class_name(), "fx-10");
}
