use std::path::Path;

use pacman_demo::asset::Asset;
use pacman_demo::error::AssetError;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

#[test]
fn test_asset_paths() {
    let paths: Vec<&str> = Asset::iter().map(|asset| asset.path()).collect();
    assert_that(&paths).is_equal_to(vec!["pacman.png", "inky.png", "pinky.png", "blinky.png", "clyde.png"]);
}

#[test]
fn test_resolve_joins_assets_dir() {
    let path = Asset::Clyde.resolve(Path::new("sprites"));
    assert_that(&path.as_path()).is_equal_to(Path::new("sprites/clyde.png"));
}

#[test]
fn test_missing_asset_is_not_found() {
    let dir = Path::new("definitely/not/a/real/assets/dir");
    let result = Asset::Pacman.read(dir);

    match result {
        Err(AssetError::NotFound(path)) => assert_that(&path).is_equal_to(dir.join("pacman.png")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
