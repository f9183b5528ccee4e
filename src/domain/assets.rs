use std::path::{Path, PathBuf};

use bevy::asset::LoadState;
use bevy::prelude::*;
use thiserror::Error;

use crate::domain::shell::ShellConfig;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read font {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a usable font", path.display())]
    InvalidFont { path: PathBuf },
}

/// Handles used by the menu screen. A failed font falls back to the
/// built-in default font; a failed background is simply not drawn.
#[derive(Resource, Debug, Clone)]
pub struct MenuAssets {
    pub background: Handle<Image>,
    pub font: Handle<Font>,
}

impl FromWorld for MenuAssets {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<ShellConfig>()
            .cloned()
            .unwrap_or_default();

        let background = world
            .resource::<AssetServer>()
            .load(config.background_path.clone());

        let font = match load_font_file(Path::new(&config.font_path)) {
            Ok(font) => {
                info!("Loaded font {}", config.font_path);
                world.resource_mut::<Assets<Font>>().add(font)
            }
            Err(err) => {
                warn!("{err}; falling back to the default font");
                Handle::default()
            }
        };

        Self { background, font }
    }
}

pub fn load_font_file(path: &Path) -> Result<Font, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_bytes(bytes).map_err(|_| AssetError::InvalidFont {
        path: path.to_path_buf(),
    })
}

pub struct AssetsPlugin;
impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuAssets>()
            .add_systems(Update, report_background_failure);
    }
}

fn report_background_failure(
    assets: Res<MenuAssets>,
    asset_server: Res<AssetServer>,
    config: Res<ShellConfig>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }
    match asset_server.get_load_state(&assets.background) {
        Some(LoadState::Failed(err)) => {
            warn!(
                "Failed to load background {}: {}",
                config.background_path, err
            );
            *reported = true;
        }
        Some(LoadState::Loaded) => {
            debug!("Loaded background {}", config.background_path);
            *reported = true;
        }
        _ => {}
    }
}
