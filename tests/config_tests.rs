// Host-side tests for presets, JSON overrides and surface sizing.

use card_particles::core::*;

#[test]
fn presets_match_the_card_layers() {
    let hearts = Variant::Hearts.config();
    assert_eq!(hearts.count, 50);
    assert_eq!(hearts.size_range, [10.0, 20.0]);
    assert_eq!(hearts.speed_range, [-1.0, 1.0]);
    assert!(!hearts.poppable);

    let balloons = Variant::Balloons.config();
    assert_eq!(balloons.count, 30);
    assert_eq!(balloons.size_range, [40.0, 70.0]);
    assert!(balloons.poppable);
    assert_eq!(balloons.shape, SpriteShape::Balloon);

    let blossoms = Variant::Blossoms.config();
    assert_eq!(blossoms.shape, SpriteShape::Blossom);
    assert_eq!(blossoms.color_mode, ColorMode::Tinted);

    for v in [Variant::Hearts, Variant::Balloons, Variant::Blossoms] {
        assert_eq!(v.config().sprite_count, 3);
    }
}

#[test]
fn variant_names_parse_case_insensitively() {
    assert_eq!("Balloons".parse::<Variant>().unwrap(), Variant::Balloons);
    assert_eq!(" hearts ".parse::<Variant>().unwrap(), Variant::Hearts);
    assert_eq!("cherry-blossoms".parse::<Variant>().unwrap(), Variant::Blossoms);
    for v in [Variant::Hearts, Variant::Balloons, Variant::Blossoms] {
        assert_eq!(v.name().parse::<Variant>().unwrap(), v);
    }
}

#[test]
fn unknown_variant_is_reported_by_name() {
    let err = "confetti".parse::<Variant>().unwrap_err();
    assert!(matches!(err, FieldError::UnknownVariant(ref name) if name == "confetti"));
    assert_eq!(err.to_string(), "unknown particle variant `confetti`");
}

#[test]
fn json_overrides_apply_on_top_of_the_preset() {
    let base = Variant::Hearts.config();
    let config = FieldConfig::from_json(
        r#"{"count": 5, "poppable": true, "colorMode": "tinted", "speedRange": [0, 0]}"#,
        &base,
    )
    .unwrap();
    assert_eq!(config.count, 5);
    assert!(config.poppable);
    assert_eq!(config.color_mode, ColorMode::Tinted);
    assert_eq!(config.speed_range, [0.0, 0.0]);
    assert_eq!(config.size_range, base.size_range);
    assert_eq!(config.shape, SpriteShape::Heart);
}

#[test]
fn unknown_json_fields_are_ignored() {
    let base = Variant::Balloons.config();
    let config =
        FieldConfig::from_json(r#"{"sparkle": true, "trail": {"len": 3}}"#, &base).unwrap();
    assert_eq!(config, base);
}

#[test]
fn malformed_json_is_a_config_error() {
    let base = Variant::Hearts.config();
    for bad in ["[1, 2]", "{\"count\": -1}", "{\"colorMode\": \"sepia\"}", "not json"] {
        let err = FieldConfig::from_json(bad, &base).unwrap_err();
        assert!(matches!(err, FieldError::Config(_)), "{bad}: {err}");
    }
}

#[test]
fn palette_len_is_never_zero() {
    let mut config = Variant::Hearts.config();
    config.sprite_count = 0;
    assert_eq!(config.palette_len(), 1);
}

#[test]
fn surface_size_clamps_to_one_pixel() {
    assert_eq!(SurfaceSize::new(0, 0), SurfaceSize::new(1, 1));
    assert_eq!(SurfaceSize::new(-20, 600), SurfaceSize::new(1, 600));
    assert_eq!(SurfaceSize::new(800, 600).center(), (400.0, 300.0));
}

#[test]
fn vignette_radius_is_half_the_longer_side() {
    let v = Vignette::for_surface(SurfaceSize::new(600, 900));
    assert_eq!((v.cx, v.cy, v.radius), (300.0, 450.0, 450.0));
}

#[test]
fn mute_state_selects_color_mode() {
    assert_eq!(ColorMode::for_muted(true), ColorMode::Neutral);
    assert_eq!(ColorMode::for_muted(false), ColorMode::Tinted);
}
