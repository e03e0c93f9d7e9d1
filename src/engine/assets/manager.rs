// Central asset management system

use super::{AssetError, AssetHandle, AssetId, AssetLoader, AssetProvider, SoundHandle};
use crate::engine::renderer::SpriteFrame;
use glam::UVec2;
use image::GenericImageView;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

/// Central asset manager for the game
///
/// Loads textures and sounds from disk once and hands out cached handles
/// afterwards. Textures are decoded only to learn their pixel size.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Pixel size of each loaded texture
    textures: HashMap<AssetId, UVec2>,

    /// Key to ID mapping for textures
    texture_keys: HashMap<String, AssetId>,

    /// Raw bytes of each loaded sound
    sounds: HashMap<AssetId, Vec<u8>>,

    /// Key to ID mapping for sounds
    sound_keys: HashMap<String, AssetId>,

    /// Size used for missing textures; `None` makes missing assets an error
    placeholder_size: Option<UVec2>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            textures: HashMap::new(),
            texture_keys: HashMap::new(),
            sounds: HashMap::new(),
            sound_keys: HashMap::new(),
            placeholder_size: None,
        }
    }

    /// Substitute missing assets instead of failing: textures get the given
    /// size, sounds get an empty buffer
    pub fn with_placeholder_size(mut self, size: UVec2) -> Self {
        self.placeholder_size = Some(size);
        self
    }

    /// Load a texture from disk, or return the cached one
    pub fn load_texture(&mut self, key: &str) -> Result<SpriteFrame, AssetError> {
        if let Some(frame) = self.cached_texture(key) {
            return Ok(frame);
        }

        let size = match self.loader.load_bytes(key) {
            Ok(bytes) => decode_size(key, &bytes)?,
            Err(AssetError::NotFound(path)) => match self.placeholder_size {
                Some(size) => {
                    warn!("Texture {} not found, using {}x{} placeholder", path, size.x, size.y);
                    size
                }
                None => return Err(AssetError::NotFound(path)),
            },
            Err(err) => return Err(err),
        };

        let id = AssetId::from_key(key);
        self.textures.insert(id, size);
        self.texture_keys.insert(key.to_string(), id);
        debug!("Loaded texture {} ({}x{})", key, size.x, size.y);

        Ok(SpriteFrame::new(AssetHandle::new(id), size.as_vec2()))
    }

    /// Load a sound from disk, or return the cached one
    pub fn load_sound(&mut self, key: &str) -> Result<SoundHandle, AssetError> {
        if let Some(&id) = self.sound_keys.get(key) {
            return Ok(AssetHandle::new(id));
        }

        let bytes = match self.loader.load_bytes(key) {
            Ok(bytes) => bytes,
            Err(AssetError::NotFound(path)) if self.placeholder_size.is_some() => {
                warn!("Sound {} not found, using silence", path);
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let id = AssetId::from_key(key);
        self.sounds.insert(id, bytes);
        self.sound_keys.insert(key.to_string(), id);
        debug!("Loaded sound {}", key);

        Ok(AssetHandle::new(id))
    }

    fn cached_texture(&self, key: &str) -> Option<SpriteFrame> {
        let id = *self.texture_keys.get(key)?;
        let size = self.textures.get(&id)?;
        Some(SpriteFrame::new(AssetHandle::new(id), size.as_vec2()))
    }

    /// Get the raw bytes of a loaded sound
    pub fn sound_bytes(&self, handle: SoundHandle) -> Option<&[u8]> {
        self.sounds.get(&handle.id()).map(Vec::as_slice)
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            texture_count: self.textures.len(),
            sound_count: self.sounds.len(),
        }
    }
}

impl AssetProvider for AssetManager {
    fn texture(&mut self, key: &str) -> Result<SpriteFrame, AssetError> {
        self.load_texture(key)
    }

    fn sound(&mut self, key: &str) -> Result<SoundHandle, AssetError> {
        self.load_sound(key)
    }
}

fn decode_size(key: &str, bytes: &[u8]) -> Result<UVec2, AssetError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AssetError::LoadError(format!("Failed to decode {}: {}", key, e)))?;
    let (width, height) = img.dimensions();
    Ok(UVec2::new(width, height))
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub texture_count: usize,
    pub sound_count: usize,
}
