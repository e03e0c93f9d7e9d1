// Asset management system
//
// Provides keyed loading and caching of textures and sounds. Keys are paths
// relative to the asset root, e.g. "graphics/playerJump.png".

mod handle;
mod loader;
mod manager;

pub use handle::{AssetHandle, AssetId, SoundHandle, TextureHandle};
pub use loader::AssetLoader;
pub use manager::AssetManager;

use crate::engine::renderer::SpriteFrame;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of loaded, reusable resources looked up by key.
///
/// Implementations cache by key, so asking twice for the same key is cheap
/// and yields an equivalent handle. What happens for a missing asset is up
/// to the implementation.
pub trait AssetProvider {
    /// Look up a texture and describe it as a drawable frame
    fn texture(&mut self, key: &str) -> Result<SpriteFrame, AssetError>;

    /// Look up a sound buffer
    fn sound(&mut self, key: &str) -> Result<SoundHandle, AssetError>;
}
