//! Sprite assets, read from the configured asset directory at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strum_macros::EnumIter;

use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    Pacman,
    Inky,
    Pinky,
    Blinky,
    Clyde,
}

impl Asset {
    /// File name of the asset, relative to the asset directory.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Pacman => "pacman.png",
            Asset::Inky => "inky.png",
            Asset::Pinky => "pinky.png",
            Asset::Blinky => "blinky.png",
            Asset::Clyde => "clyde.png",
        }
    }

    pub fn resolve(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.path())
    }

    /// Reads the raw bytes of the asset.
    pub fn read(&self, assets_dir: &Path) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(assets_dir);
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(path),
            _ => AssetError::Io(e),
        })
    }
}
