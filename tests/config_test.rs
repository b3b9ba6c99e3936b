use scene_ngin::{
    config::{DragMode, RendererConfig},
    input::DragTarget,
};

#[test]
fn defaults_are_valid() {
    let config = RendererConfig::default();
    config.validate().unwrap();
    assert_eq!(config.drag_mode, DragMode::Camera);
    assert!(config.near_z < config.far_z);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let config = RendererConfig::from_toml_str(
        r#"
        fovy_degrees = 45.0
        camera_distance = 12.0
        "#,
    )
    .unwrap();

    assert_eq!(config.fovy_degrees, 45.0);
    assert_eq!(config.camera_distance, 12.0);
    assert_eq!(config.near_z, RendererConfig::default().near_z);
    assert_eq!(config.tap_slop, RendererConfig::default().tap_slop);
}

#[test]
fn an_empty_document_is_the_default() {
    assert_eq!(
        RendererConfig::from_toml_str("").unwrap(),
        RendererConfig::default()
    );
}

#[test]
fn drag_mode_selects_the_drag_target() {
    let config = RendererConfig::from_toml_str(r#"drag_mode = "selection""#).unwrap();
    assert_eq!(config.drag_mode, DragMode::Selection);
    assert_eq!(DragTarget::from(config.drag_mode), DragTarget::Selection);
    assert_eq!(DragTarget::from(DragMode::Camera), DragTarget::Camera);
}

#[test]
fn inverted_depth_range_is_rejected() {
    let err = RendererConfig::from_toml_str("near_z = 10.0\nfar_z = 1.0").unwrap_err();
    assert!(format!("{:#}", err).contains("far_z"), "{:#}", err);

    let err = RendererConfig::from_toml_str("near_z = 0.0").unwrap_err();
    assert!(format!("{:#}", err).contains("near_z"), "{:#}", err);
}

#[test]
fn degenerate_field_of_view_is_rejected() {
    assert!(RendererConfig::from_toml_str("fovy_degrees = 0.0").is_err());
    assert!(RendererConfig::from_toml_str("fovy_degrees = 180.0").is_err());
}

#[test]
fn input_tuning_is_validated() {
    assert!(RendererConfig::from_toml_str("tap_slop = 0.0").is_err());
    assert!(RendererConfig::from_toml_str("pick_half_extent = -1.0").is_err());
    assert!(RendererConfig::from_toml_str("drag_sensitivity = nan").is_err());
    assert!(RendererConfig::from_toml_str("camera_distance = inf").is_err());
}

#[test]
fn unknown_keys_and_bad_values_fail_to_parse() {
    let err = RendererConfig::from_toml_str("fov = 60.0").unwrap_err();
    assert!(
        format!("{:#}", err).contains("failed to parse renderer config"),
        "{:#}",
        err
    );
    assert!(RendererConfig::from_toml_str(r#"drag_mode = "sideways""#).is_err());
    assert!(RendererConfig::from_toml_str(r#"near_z = "close""#).is_err());
}

#[test]
fn loading_a_missing_file_names_the_path() {
    let path = std::env::temp_dir().join("scene-ngin-does-not-exist.toml");
    let err = RendererConfig::load(&path).unwrap_err();
    assert!(
        format!("{:#}", err).contains("scene-ngin-does-not-exist.toml"),
        "{:#}",
        err
    );
}

#[test]
fn loading_a_file_parses_and_validates_it() {
    let path = std::env::temp_dir().join(format!("scene-ngin-config-{}.toml", std::process::id()));
    std::fs::write(&path, "far_z = 250.0\ndrag_mode = \"selection\"\n").unwrap();

    let config = RendererConfig::load(&path);
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.far_z, 250.0);
    assert_eq!(config.drag_mode, DragMode::Selection);
}
