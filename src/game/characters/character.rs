// The runner: the single player-controlled character

use glam::Vec2;
use log::{debug, error, trace};

use crate::core::Rect;
use crate::engine::assets::{AssetError, AssetProvider, SoundHandle};
use crate::engine::physics::{resolve_grounding, Body, EdgeEvent};
use crate::engine::renderer::{RenderSink, Sprite, SpriteFrame};

use super::animation::{AnimationError, AnimationPlayer};
use super::state::{Reaction, RunnerState, RunnerStateMachine};
use super::stats::RunnerStats;

pub const RUN_ANIMATION: &str = "run";
/// Used both for jumping and for falling off a ledge
pub const JUMP_ANIMATION: &str = "jump";

const RUN_FRAMES: [&str; 2] = ["graphics/playerRun1.png", "graphics/playerRun2.png"];
const JUMP_FRAME: &str = "graphics/playerJump.png";

/// Discrete commands the runner accepts from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerCommand {
    Jump,
}

/// One-shot sounds requested by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Land,
}

impl SoundCue {
    /// Asset key of the sound played for this cue
    pub fn asset_key(&self) -> &'static str {
        match self {
            Self::Jump => "audio/jump.wav",
            Self::Land => "audio/landing.wav",
        }
    }
}

/// Errors raised while building a runner
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Animation setup failed: {0}")]
    Animation(#[from] AnimationError),

    #[error("Asset lookup failed: {0}")]
    Asset(#[from] AssetError),
}

/// Sound buffers for each cue, resolved once at construction
#[derive(Debug, Clone, Copy)]
struct RunnerSounds {
    jump: SoundHandle,
    land: SoundHandle,
}

impl RunnerSounds {
    fn load(assets: &mut impl AssetProvider) -> Result<Self, AssetError> {
        Ok(Self {
            jump: assets.sound(SoundCue::Jump.asset_key())?,
            land: assets.sound(SoundCue::Land.asset_key())?,
        })
    }

    fn handle(&self, cue: SoundCue) -> SoundHandle {
        match cue {
            SoundCue::Jump => self.jump,
            SoundCue::Land => self.land,
        }
    }
}

/// Player-controlled runner.
///
/// Each frame runs in a fixed order: commands, then `update` (animation
/// clock and movement), then `handle_collision` against the current
/// platform boxes, then `draw`. `step` performs the first three in order.
///
/// An accepted jump keeps the runner grounded for the rest of its frame, so
/// the jump frame moves at the full jump speed and the following grounding
/// pass reports leaving the ground.
#[derive(Debug)]
pub struct Runner {
    body: Body,
    stats: RunnerStats,
    state_machine: RunnerStateMachine,
    animation: AnimationPlayer<SpriteFrame>,
    sounds: RunnerSounds,
    /// Cues raised since the last drain
    sound_cues: Vec<SoundCue>,
    /// A jump was accepted since the last grounding pass
    jump_consumed: bool,
}

impl Runner {
    /// Build the runner's clips and sounds from the asset provider and spawn it
    pub fn new(assets: &mut impl AssetProvider, stats: RunnerStats) -> Result<Self, CharacterError> {
        let mut animation = AnimationPlayer::new();

        let run = animation.create_animation(RUN_ANIMATION)?;
        for key in RUN_FRAMES {
            run.add_frame(assets.texture(key)?);
        }
        run.set_loop(true).set_playback_speed(stats.run_fps)?;

        animation
            .create_animation(JUMP_ANIMATION)?
            .add_frame(assets.texture(JUMP_FRAME)?);

        // Validates both clips up front so later switches cannot fail
        animation.play(RUN_ANIMATION)?;
        animation.play(JUMP_ANIMATION)?;

        let mut runner = Self {
            body: Body::default(),
            stats,
            state_machine: RunnerStateMachine::new(),
            animation,
            sounds: RunnerSounds::load(assets)?,
            sound_cues: Vec::new(),
            jump_consumed: false,
        };
        runner.spawn();

        Ok(runner)
    }

    /// Place the runner at its start: mid-air, running, with no vertical speed
    pub fn spawn(&mut self) {
        self.body = Body::new(
            self.stats.spawn_position,
            Vec2::new(self.stats.run_speed_initial, 0.0),
        );
        self.state_machine.respawn();
        self.jump_consumed = false;
        self.play_animation(JUMP_ANIMATION);
        debug!("Runner spawned at {:?}", self.body.position);
    }

    /// Apply one input command. Commands that do not apply are ignored.
    pub fn handle_command(&mut self, command: RunnerCommand) {
        match command {
            RunnerCommand::Jump => self.try_jump(),
        }
    }

    fn try_jump(&mut self) {
        if !self.state_machine.can_jump() {
            trace!("Jump ignored while airborne");
            return;
        }
        if self.jump_consumed {
            trace!("Jump already taken this frame");
            return;
        }

        self.jump_consumed = true;
        self.sound_cues.push(SoundCue::Jump);
        self.play_animation(JUMP_ANIMATION);
        self.body.velocity.y = self.stats.jump_speed;
        debug!("Runner jumped at x={:.1}", self.body.position.x);
    }

    /// Advance the animation clock and integrate movement by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
        let airborne = self.state().applies_gravity();
        self.body.integrate(dt, self.stats.gravity, airborne);
    }

    /// Resolve ground contact against this frame's platform boxes and react
    /// to landing or leaving the ground
    pub fn handle_collision(&mut self, platforms: &[Rect]) -> EdgeEvent {
        let outcome = resolve_grounding(
            &self.collider(),
            platforms,
            self.state().is_grounded(),
            self.body.velocity.y,
            &self.stats.grounding(),
        );
        self.jump_consumed = false;

        match self.state_machine.apply(outcome) {
            Some(Reaction::Land) => {
                self.body.velocity.y = 0.0;
                self.play_animation(RUN_ANIMATION);
                self.sound_cues.push(SoundCue::Land);
                debug!("Runner landed at {:?}", self.body.position);
            }
            Some(Reaction::Fall) => {
                self.play_animation(JUMP_ANIMATION);
                debug!("Runner left the ground at {:?}", self.body.position);
            }
            None => {}
        }

        outcome.edge
    }

    /// Run one simulation frame in order: commands, update, collision
    pub fn step(&mut self, commands: &[RunnerCommand], dt: f32, platforms: &[Rect]) -> EdgeEvent {
        for &command in commands {
            self.handle_command(command);
        }
        self.update(dt);
        self.handle_collision(platforms)
    }

    /// Hand the current sprite to the render sink
    pub fn draw(&self, sink: &mut impl RenderSink) {
        if let Some(sprite) = self.sprite() {
            sink.draw(&sprite);
        }
    }

    fn play_animation(&mut self, name: &str) {
        if let Err(err) = self.animation.play(name) {
            error!("Runner animation switch failed: {}", err);
        }
    }

    /// Take the sound cues raised since the last call
    pub fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_cues)
    }

    /// Sound buffer to play for a cue
    pub fn sound_for(&self, cue: SoundCue) -> SoundHandle {
        self.sounds.handle(cue)
    }

    /// Bounding box of the current frame at the current position
    pub fn collider(&self) -> Rect {
        match self.current_frame() {
            Some(frame) => frame.bounds_at(self.body.position),
            None => {
                error!(
                    "Runner animation {:?} has no frame to collide with",
                    self.animation.current_animation()
                );
                Rect::from_position_size(self.body.position, Vec2::ZERO)
            }
        }
    }

    pub fn sprite(&self) -> Option<Sprite> {
        self.current_frame()
            .map(|frame| Sprite::new(self.body.position, *frame))
    }

    pub fn current_frame(&self) -> Option<&SpriteFrame> {
        self.animation.current_frame()
    }

    pub fn current_animation(&self) -> &str {
        self.animation.current_animation()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn state(&self) -> RunnerState {
        self.state_machine.state()
    }

    pub fn is_grounded(&self) -> bool {
        self.state().is_grounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetHandle, AssetId};
    use crate::game::characters::stats::BASE_STATS;
    use approx::assert_relative_eq;

    const FRAME_SIZE: Vec2 = Vec2::new(50.0, 100.0);
    const DT: f32 = 1.0 / 60.0;

    /// Every texture is 50x100, every key resolves
    struct StubAssets {
        texture_lookups: Vec<String>,
    }

    impl StubAssets {
        fn new() -> Self {
            Self {
                texture_lookups: Vec::new(),
            }
        }
    }

    impl AssetProvider for StubAssets {
        fn texture(&mut self, key: &str) -> Result<SpriteFrame, AssetError> {
            self.texture_lookups.push(key.to_string());
            Ok(SpriteFrame::new(
                AssetHandle::new(AssetId::from_key(key)),
                FRAME_SIZE,
            ))
        }

        fn sound(&mut self, key: &str) -> Result<SoundHandle, AssetError> {
            Ok(AssetHandle::new(AssetId::from_key(key)))
        }
    }

    struct MissingAssets;

    impl AssetProvider for MissingAssets {
        fn texture(&mut self, key: &str) -> Result<SpriteFrame, AssetError> {
            Err(AssetError::NotFound(key.to_string()))
        }

        fn sound(&mut self, key: &str) -> Result<SoundHandle, AssetError> {
            Err(AssetError::NotFound(key.to_string()))
        }
    }

    fn runner() -> Runner {
        Runner::new(&mut StubAssets::new(), BASE_STATS).unwrap()
    }

    /// Wide platform whose top sits just below the spawn point
    fn floor() -> Rect {
        Rect::new(-100.0, 105.0, 1000.0, 200.0)
    }

    /// Fall onto the floor and return the number of frames it took
    fn land(runner: &mut Runner) -> usize {
        for frame in 1..=120 {
            if runner.step(&[], DT, &[floor()]) == EdgeEvent::JustLanded {
                return frame;
            }
        }
        panic!("runner never landed");
    }

    #[test]
    fn test_spawn_state() {
        let runner = runner();
        assert_eq!(runner.position(), Vec2::ZERO);
        assert_eq!(runner.velocity(), Vec2::new(BASE_STATS.run_speed_initial, 0.0));
        assert_eq!(runner.state(), RunnerState::Airborne);
        assert_eq!(runner.current_animation(), JUMP_ANIMATION);
        assert_eq!(runner.collider(), Rect::new(0.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn test_construction_loads_every_frame() {
        let mut assets = StubAssets::new();
        Runner::new(&mut assets, BASE_STATS).unwrap();
        assert_eq!(
            assets.texture_lookups,
            vec![RUN_FRAMES[0], RUN_FRAMES[1], JUMP_FRAME]
        );
    }

    #[test]
    fn test_missing_assets_fail_construction() {
        let result = Runner::new(&mut MissingAssets, BASE_STATS);
        assert!(matches!(result, Err(CharacterError::Asset(_))));
    }

    #[test]
    fn test_invalid_run_speed_fails_construction() {
        let stats = RunnerStats {
            run_fps: 0.0,
            ..BASE_STATS
        };
        let result = Runner::new(&mut StubAssets::new(), stats);
        assert!(matches!(
            result,
            Err(CharacterError::Animation(AnimationError::InvalidPlaybackSpeed(_)))
        ));
    }

    #[test]
    fn test_first_frame_without_platforms() {
        let mut runner = runner();
        let edge = runner.step(&[], 0.5, &[]);

        assert_eq!(edge, EdgeEvent::None);
        assert_relative_eq!(runner.velocity().y, BASE_STATS.gravity * 0.5);
        assert_relative_eq!(runner.position().x, BASE_STATS.run_speed_initial * 0.5);
        // Movement uses the velocity after this frame's gravity
        assert_relative_eq!(runner.position().y, BASE_STATS.gravity * 0.5 * 0.5);
        assert_eq!(runner.state(), RunnerState::Airborne);
    }

    #[test]
    fn test_landing_zeroes_velocity_and_runs() {
        let mut runner = runner();
        land(&mut runner);

        assert_eq!(runner.velocity().y, 0.0);
        assert_eq!(runner.state(), RunnerState::Grounded);
        assert_eq!(runner.current_animation(), RUN_ANIMATION);
        assert_eq!(runner.drain_sound_cues(), vec![SoundCue::Land]);
    }

    #[test]
    fn test_landing_fires_once() {
        let mut runner = runner();
        land(&mut runner);
        runner.drain_sound_cues();

        for _ in 0..30 {
            assert_eq!(runner.step(&[], DT, &[floor()]), EdgeEvent::None);
            assert!(runner.is_grounded());
        }
        assert!(runner.drain_sound_cues().is_empty());
    }

    #[test]
    fn test_grounded_runner_ignores_gravity() {
        let mut runner = runner();
        land(&mut runner);
        let y = runner.position().y;

        runner.update(0.5);
        assert_eq!(runner.velocity().y, 0.0);
        assert_eq!(runner.position().y, y);
        assert_relative_eq!(runner.velocity().x, BASE_STATS.run_speed_initial);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let mut runner = runner();
        let before = runner.velocity();

        runner.handle_command(RunnerCommand::Jump);
        assert_eq!(runner.velocity(), before);
        assert!(runner.drain_sound_cues().is_empty());
        assert_eq!(runner.state(), RunnerState::Airborne);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut runner = runner();
        land(&mut runner);
        runner.drain_sound_cues();

        runner.handle_command(RunnerCommand::Jump);
        assert_eq!(runner.velocity().y, BASE_STATS.jump_speed);
        assert_eq!(runner.current_animation(), JUMP_ANIMATION);
        assert_eq!(runner.drain_sound_cues(), vec![SoundCue::Jump]);
        // Still on the platform until the next grounding pass
        assert_eq!(runner.state(), RunnerState::Grounded);

        // No double jump
        runner.handle_command(RunnerCommand::Jump);
        assert_eq!(runner.velocity().y, BASE_STATS.jump_speed);
        assert!(runner.drain_sound_cues().is_empty());
    }

    #[test]
    fn test_jump_frame_moves_at_full_jump_speed() {
        let mut runner = runner();
        land(&mut runner);
        let y = runner.position().y;

        let edge = runner.step(&[RunnerCommand::Jump, RunnerCommand::Jump], DT, &[floor()]);
        assert_eq!(runner.velocity().y, BASE_STATS.jump_speed);
        assert_relative_eq!(runner.position().y, y + BASE_STATS.jump_speed * DT);
        assert_eq!(edge, EdgeEvent::JustLeftGround);
        assert_eq!(runner.state(), RunnerState::Airborne);
        assert_eq!(
            runner.drain_sound_cues(),
            vec![SoundCue::Land, SoundCue::Jump]
        );

        // Gravity takes over from the next frame
        runner.step(&[], DT, &[floor()]);
        assert_relative_eq!(
            runner.velocity().y,
            BASE_STATS.jump_speed + BASE_STATS.gravity * DT
        );
    }

    #[test]
    fn test_jump_allowed_again_after_landing() {
        let mut runner = runner();
        land(&mut runner);
        runner.step(&[RunnerCommand::Jump], DT, &[floor()]);
        land(&mut runner);
        runner.drain_sound_cues();

        runner.step(&[RunnerCommand::Jump], DT, &[floor()]);
        assert_eq!(runner.velocity().y, BASE_STATS.jump_speed);
        assert_eq!(runner.drain_sound_cues(), vec![SoundCue::Jump]);
    }

    #[test]
    fn test_running_off_a_ledge() {
        let mut runner = runner();
        land(&mut runner);
        runner.drain_sound_cues();

        let edge = runner.handle_collision(&[]);
        assert_eq!(edge, EdgeEvent::JustLeftGround);
        assert_eq!(runner.state(), RunnerState::Airborne);
        assert_eq!(runner.current_animation(), JUMP_ANIMATION);
        assert!(runner.drain_sound_cues().is_empty());
    }

    #[test]
    fn test_side_graze_while_rising() {
        let mut runner = runner();
        runner.body.velocity.y = -300.0;

        // Overlaps the runner's right side, top band far above its feet
        let wall = Rect::new(30.0, -50.0, 400.0, 300.0);
        let edge = runner.handle_collision(&[wall]);

        assert_eq!(edge, EdgeEvent::None);
        assert!(!runner.is_grounded());
        assert_eq!(runner.velocity().y, -300.0);
        assert!(runner.drain_sound_cues().is_empty());
    }

    #[test]
    fn test_rising_through_platform_top_is_not_a_landing() {
        let mut runner = runner();
        runner.body.velocity.y = -300.0;

        // Feet band 90..100 overlaps top band 95..105
        let edge = runner.handle_collision(&[Rect::new(-10.0, 95.0, 200.0, 50.0)]);
        assert_eq!(edge, EdgeEvent::None);
        assert_eq!(runner.velocity().y, -300.0);
        assert_eq!(runner.current_animation(), JUMP_ANIMATION);
        assert!(runner.drain_sound_cues().is_empty());
    }

    #[test]
    fn test_run_cycle_alternates_frames() {
        let mut runner = runner();
        land(&mut runner);
        let first = *runner.current_frame().unwrap();

        runner.update(0.1);
        let second = *runner.current_frame().unwrap();
        assert_ne!(first, second);

        runner.update(0.1);
        assert_eq!(*runner.current_frame().unwrap(), first);
    }

    #[test]
    fn test_draw_emits_current_sprite() {
        let runner = runner();
        let mut drawn: Vec<Sprite> = Vec::new();
        runner.draw(&mut drawn);

        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].position, runner.position());
        assert_eq!(drawn[0].frame, *runner.current_frame().unwrap());
    }

    #[test]
    fn test_frameless_runner_has_empty_collider() {
        let mut runner = runner();
        runner.animation = AnimationPlayer::new();

        assert_eq!(runner.collider(), Rect::new(0.0, 0.0, 0.0, 0.0));
        let mut drawn: Vec<Sprite> = Vec::new();
        runner.draw(&mut drawn);
        assert!(drawn.is_empty());
    }

    #[test]
    fn test_cue_sounds_are_distinct() {
        let runner = runner();
        assert_ne!(
            runner.sound_for(SoundCue::Jump),
            runner.sound_for(SoundCue::Land)
        );
    }

    #[test]
    fn test_respawn_resets_motion() {
        let mut runner = runner();
        land(&mut runner);
        runner.spawn();

        assert_eq!(runner.position(), BASE_STATS.spawn_position);
        assert_eq!(runner.velocity().y, 0.0);
        assert_eq!(runner.state(), RunnerState::Airborne);
        assert_eq!(runner.current_animation(), JUMP_ANIMATION);
    }
}
