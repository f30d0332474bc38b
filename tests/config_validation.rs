use hexgrid::{GridConfig, TileProvider};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        radius: 10001,    // invalid (too big)
        tile_size: -10.0, // invalid
        ..GridConfig::default()
    };

    let err = TileProvider::<()>::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["radius", "tile_size"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_valid_config_accepted() {
    let config = GridConfig {
        radius: 10000,
        tile_size: 0.5,
        ..GridConfig::default()
    };
    assert!(TileProvider::<()>::new(config).is_ok());
}
