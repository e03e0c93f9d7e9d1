// Character animation system
//
// Clip definitions are authored once and stay immutable; the player only
// moves a cursor (active clip name + elapsed time) across them.

use std::collections::HashMap;

/// Animation setup errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation clip already exists: {0}")]
    DuplicateClip(String),

    #[error("Unknown animation clip: {0}")]
    UnknownClip(String),

    #[error("Animation clip has no frames: {0}")]
    EmptyClip(String),

    #[error("Playback speed must be positive, got {0}")]
    InvalidPlaybackSpeed(f32),
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip<F> {
    /// Frames in playback order
    frames: Vec<F>,
    /// Whether the animation wraps around after the last frame
    looping: bool,
    /// Frames per second
    playback_speed: f32,
}

impl<F> Default for AnimationClip<F> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            looping: false,
            playback_speed: 1.0,
        }
    }
}

impl<F> AnimationClip<F> {
    /// Append a frame to the end of the clip
    pub fn add_frame(&mut self, frame: F) -> &mut Self {
        self.frames.push(frame);
        self
    }

    pub fn set_loop(&mut self, looping: bool) -> &mut Self {
        self.looping = looping;
        self
    }

    /// Set playback speed in frames per second
    pub fn set_playback_speed(&mut self, fps: f32) -> Result<&mut Self, AnimationError> {
        if fps.is_nan() || fps <= 0.0 {
            return Err(AnimationError::InvalidPlaybackSpeed(fps));
        }
        self.playback_speed = fps;
        Ok(self)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[allow(dead_code)]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[allow(dead_code)]
    pub fn playback_speed(&self) -> f32 {
        self.playback_speed
    }

    /// Frame index shown after `elapsed` seconds of playback
    pub fn frame_index_at(&self, elapsed: f32) -> usize {
        let count = self.frames.len();
        if count == 0 {
            return 0;
        }

        let raw = (elapsed * self.playback_speed).floor() as usize;
        if self.looping {
            raw % count
        } else {
            raw.min(count - 1)
        }
    }

    pub fn frame(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }
}

/// Plays named clips for a character
#[derive(Debug)]
pub struct AnimationPlayer<F> {
    /// All available animations
    animations: HashMap<String, AnimationClip<F>>,
    /// Currently playing animation name (empty until the first play)
    current_animation: String,
    /// Seconds since the current animation started
    elapsed: f32,
}

impl<F> Default for AnimationPlayer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> AnimationPlayer<F> {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            elapsed: 0.0,
        }
    }

    /// Register a new empty clip and return it for setup
    pub fn create_animation(&mut self, name: &str) -> Result<&mut AnimationClip<F>, AnimationError> {
        if self.animations.contains_key(name) {
            return Err(AnimationError::DuplicateClip(name.to_string()));
        }
        Ok(self
            .animations
            .entry(name.to_string())
            .or_insert_with(AnimationClip::default))
    }

    /// Switch to an animation by name.
    ///
    /// Switching to a different clip restarts its clock; asking for the clip
    /// that is already playing does nothing.
    pub fn play(&mut self, name: &str) -> Result<(), AnimationError> {
        let clip = self
            .animations
            .get(name)
            .ok_or_else(|| AnimationError::UnknownClip(name.to_string()))?;

        if clip.frame_count() == 0 {
            return Err(AnimationError::EmptyClip(name.to_string()));
        }

        if self.current_animation != name {
            self.current_animation = name.to_string();
            self.elapsed = 0.0;
        }
        Ok(())
    }

    /// Advance the animation clock (called every frame)
    pub fn update(&mut self, dt: f32) {
        let has_frames = self
            .current_clip()
            .is_some_and(|clip| clip.frame_count() > 0);
        if !has_frames {
            return;
        }

        self.elapsed += dt.max(0.0);
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Seconds since the current animation started
    #[allow(dead_code)]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Get the clip info for the current animation
    pub fn current_clip(&self) -> Option<&AnimationClip<F>> {
        self.animations.get(&self.current_animation)
    }

    /// Index of the frame currently on screen
    #[allow(dead_code)]
    pub fn current_frame_index(&self) -> Option<usize> {
        self.current_clip()
            .filter(|clip| clip.frame_count() > 0)
            .map(|clip| clip.frame_index_at(self.elapsed))
    }

    /// The frame currently on screen
    pub fn current_frame(&self) -> Option<&F> {
        let clip = self.current_clip()?;
        clip.frame(clip.frame_index_at(self.elapsed))
    }
}
