use anyhow::Result;
use glam::UVec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    event::{Event, StartCause, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::Rect;
use engine::assets::AssetManager;
use engine::game_loop::FrameClock;
use engine::input::{Action, InputManager};
use engine::renderer::LogRenderSink;
use game::characters::{Runner, RunnerCommand, BASE_STATS};
use game::world::{PlatformField, DEFAULT_LAYOUT};

const VIEW_WIDTH: f32 = 1280.0;
const VIEW_HEIGHT: f32 = 720.0;

/// Camera centre sits this fraction of the view ahead of the runner
const CAMERA_LEAD: f32 = 0.4;

/// Runner is reset once it has fallen this far below the spawn point
const FALL_LIMIT: f32 = 2000.0;

const PLATFORM_COUNT: usize = 5;
const FIRST_PLATFORM: Rect = Rect::new(-200.0, 500.0, 1500.0, 600.0);

/// Size used for any texture missing from the assets directory
const PLACEHOLDER_SIZE: UVec2 = UVec2::new(64, 96);

/// Everything the frame loop owns
struct Game {
    assets: AssetManager,
    runner: Runner,
    platforms: PlatformField,
    rng: StdRng,
    input: InputManager,
    clock: FrameClock,
    sink: LogRenderSink,
}

impl Game {
    fn new() -> Result<Self> {
        let mut assets = AssetManager::new("assets").with_placeholder_size(PLACEHOLDER_SIZE);
        let runner = Runner::new(&mut assets, BASE_STATS)?;

        let mut rng = StdRng::from_os_rng();
        let platforms = PlatformField::new(&mut rng, DEFAULT_LAYOUT, FIRST_PLATFORM, PLATFORM_COUNT);

        let stats = assets.stats();
        info!(
            "Loaded {} textures and {} sounds",
            stats.texture_count, stats.sound_count
        );

        Ok(Self {
            assets,
            runner,
            platforms,
            rng,
            input: InputManager::new(),
            clock: FrameClock::new(),
            sink: LogRenderSink::new(),
        })
    }

    /// Run one frame. Returns false once the player asked to quit.
    fn frame(&mut self) -> bool {
        // Input
        let mut commands = Vec::new();
        for action in self.input.drain_actions() {
            match action {
                Action::Jump => commands.push(RunnerCommand::Jump),
                Action::Quit => return false,
            }
        }

        // Update + collision
        let dt = self.clock.restart();
        let colliders = self.platforms.colliders();
        self.runner.step(&commands, dt, &colliders);

        let camera_x = self.runner.position().x + VIEW_WIDTH * CAMERA_LEAD;
        self.platforms
            .recycle(&mut self.rng, camera_x - VIEW_WIDTH / 2.0);

        if self.runner.position().y > BASE_STATS.spawn_position.y + FALL_LIMIT {
            self.restart();
        }

        for cue in self.runner.drain_sound_cues() {
            let bytes = self
                .assets
                .sound_bytes(self.runner.sound_for(cue))
                .map_or(0, <[u8]>::len);
            debug!("Playing {} ({} bytes)", cue.asset_key(), bytes);
        }

        // Draw
        self.runner.draw(&mut self.sink);

        if self.clock.frame_count() % 600 == 0 {
            info!(
                "{:.0} fps, runner at x={:.0}, {} sprites drawn, {} platforms",
                self.clock.fps(),
                self.runner.position().x,
                self.sink.drawn(),
                self.platforms.len()
            );
            debug!(
                "Runner {} ({:?}), velocity {:?}, grounded: {}",
                self.runner.current_animation(),
                self.runner.state(),
                self.runner.velocity(),
                self.runner.is_grounded()
            );
        }

        true
    }

    fn restart(&mut self) {
        info!(
            "Runner fell at x={:.0} after {:.1}s",
            self.runner.position().x,
            self.clock.elapsed().as_secs_f32()
        );
        self.runner.spawn();
        self.platforms = PlatformField::new(
            &mut self.rng,
            DEFAULT_LAYOUT,
            FIRST_PLATFORM,
            PLATFORM_COUNT,
        );
        self.input.reset();
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rooftop Runner...");

    let mut game = Game::new()?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rooftop Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(VIEW_WIDTH, VIEW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::NewEvents(StartCause::Init) => {
                // Loading and window setup are not part of the first step
                game.clock.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                game.input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if !game.frame() {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
