use std::collections::HashMap;
use std::path::Path;

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{NonSend, NonSendMut, Query};
use glam::Vec2;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::asset::Asset;
use crate::constants::sprite::FALLBACK_SIZE;
use crate::error::{GameError, GameResult, TextureError};
use crate::map::wall::Wall;
use crate::systems::components::{Ghost, PlayerControlled, Sprite};
use crate::systems::movement::Position;

/// Character textures, keyed by asset. Assets that failed to load are simply absent.
///
/// Stored as a non-send resource, as SDL textures are tied to the render thread.
pub struct TextureStore {
    textures: HashMap<Asset, Texture>,
}

impl TextureStore {
    /// Loads every character texture, logging (and skipping) the ones that fail.
    pub fn load(texture_creator: &TextureCreator<WindowContext>, assets_dir: &Path) -> Self {
        let mut textures = HashMap::new();
        for asset in Asset::iter() {
            match Self::load_texture(texture_creator, assets_dir, asset) {
                Ok(texture) => {
                    debug!(asset = asset.path(), "Loaded texture");
                    textures.insert(asset, texture);
                }
                Err(e) => {
                    warn!(asset = asset.path(), error = %e, "Could not load texture, drawing a solid sprite instead");
                }
            }
        }

        info!(loaded = textures.len(), dir = %assets_dir.display(), "Loaded character textures");
        Self { textures }
    }

    fn load_texture(texture_creator: &TextureCreator<WindowContext>, assets_dir: &Path, asset: Asset) -> GameResult<Texture> {
        let bytes = asset.read(assets_dir)?;
        texture_creator
            .load_texture_bytes(&bytes)
            .map_err(|e| GameError::Texture(TextureError::LoadFailed(format!("{}: {e}", asset.path()))))
    }

    pub fn get(&self, asset: Asset) -> Option<&Texture> {
        self.textures.get(&asset)
    }

    /// The pixel size of a loaded texture, or the fallback sprite size.
    pub fn sprite_size(&self, asset: Asset) -> Vec2 {
        self.get(asset)
            .map(|texture| {
                let query = texture.query();
                Vec2::new(query.width as f32, query.height as f32)
            })
            .unwrap_or(FALLBACK_SIZE)
    }
}

/// Draws a sprite at a position, or its fallback square when there is no texture for it.
fn draw_sprite(
    canvas: &mut Canvas<Window>,
    textures: &TextureStore,
    position: &Position,
    sprite: &Sprite,
) -> Result<(), TextureError> {
    match textures.get(sprite.asset) {
        Some(texture) => {
            let top_left = (position.0 - sprite.origin).round();
            let dest = Rect::new(top_left.x as i32, top_left.y as i32, sprite.size.x as u32, sprite.size.y as u32);
            let pivot = Point::new(sprite.origin.x as i32, sprite.origin.y as i32);
            canvas
                .copy_ex(texture, None, dest, sprite.rotation as f64, pivot, false, false)
                .map_err(TextureError::RenderFailed)
        }
        None => {
            canvas.set_draw_color(sprite.fallback_color());
            canvas
                .fill_rect(sprite.global_bounds(position.0).to_rect())
                .map_err(TextureError::RenderFailed)
        }
    }
}

/// Clears the frame and draws walls, then ghosts, then the player on top.
#[allow(clippy::type_complexity)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    textures: NonSend<TextureStore>,
    walls: Query<&Wall>,
    ghosts: Query<(&Position, &Sprite), (With<Ghost>, Without<PlayerControlled>)>,
    player: Query<(&Position, &Sprite), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    canvas.set_draw_color(Wall::COLOR);
    for wall in walls.iter() {
        if let Err(e) = canvas.fill_rect(wall.visual_rect()) {
            errors.write(TextureError::RenderFailed(e).into());
        }
    }

    for (position, sprite) in ghosts.iter().chain(player.iter()) {
        if let Err(e) = draw_sprite(&mut canvas, &textures, position, sprite) {
            errors.write(e.into());
        }
    }
}

pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}
