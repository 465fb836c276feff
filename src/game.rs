//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use glam::Vec2;
use sdl2::event::EventType;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use strum::IntoEnumIterator;
use tracing::{debug, info, trace};

use crate::asset::Asset;
use crate::config::Config;
use crate::constants::WALL_LAYOUT;
use crate::error::GameError;
use crate::events::GameEvent;
use crate::formatter;
use crate::map::wall::Wall;
use crate::systems::{
    collision_system, error_log_system, ghost_wander_system, input_system, movement_system, player_control_system,
    present_system, render_system, Bindings, DeltaTime, Ghost, GhostBundle, GlobalState, PauseState, PlayerBundle,
    TextureStore,
};

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Gameplay systems that process inputs
    Input,
    /// Gameplay systems that update the game state
    Update,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Draw,
    Present,
}

/// Core game state, built on a bevy ECS `World` and the `Schedule` that drives it.
///
/// SDL2 resources (canvas, event pump, textures) are stored as `NonSend` resources.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
    ticks_per_frame: u32,
}

impl Game {
    /// Loads the character textures, spawns every entity and wires SDL into the schedule.
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
        config: &Config,
    ) -> Game {
        info!("Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        debug!(dir = %config.assets_dir.display(), "Loading textures");
        let textures = TextureStore::load(&texture_creator, &config.assets_dir);

        let mut game = Self::headless(config, |asset| textures.sprite_size(asset));

        debug!("Inserting SDL resources into ECS world");
        game.world.insert_non_send_resource(textures);
        game.world.insert_non_send_resource(canvas);
        game.world.insert_non_send_resource(event_pump);

        Self::configure_sdl_systems(&mut game.schedule);

        info!("Game initialization completed successfully");
        game
    }

    /// Builds the world and gameplay schedule without any SDL resources.
    ///
    /// `sprite_size` gives the pixel size of each character's sprite.
    pub fn headless(config: &Config, sprite_size: impl Fn(Asset) -> Vec2) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::insert_resources(&mut world);
        Self::configure_schedule(&mut schedule);

        Self::spawn_walls(&mut world);
        Self::spawn_characters(&mut world, sprite_size);

        Game {
            world,
            schedule,
            ticks_per_frame: config.ticks_per_frame,
        }
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::FingerDown,
            EventType::FingerUp,
            EventType::FingerMotion,
            EventType::MouseMotion,
            EventType::MouseButtonDown,
            EventType::MouseButtonUp,
            EventType::MouseWheel,
            EventType::TextInput,
            EventType::TextEditing,
            EventType::DropFile,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    fn insert_resources(world: &mut World) {
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<GameError>(world);
        world.insert_resource(GlobalState::default());
        world.insert_resource(PauseState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(DeltaTime { ticks: 0 });
    }

    /// Adds the gameplay systems: commands first, then ghost wandering, movement and collision.
    pub fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                player_control_system.in_set(GameplaySet::Input),
                (ghost_wander_system, movement_system, collision_system)
                    .chain()
                    .in_set(GameplaySet::Update),
                error_log_system.after(GameplaySet::Update),
            ))
            .configure_sets((
                GameplaySet::Input,
                GameplaySet::Update
                    .after(GameplaySet::Input)
                    .run_if(|paused: Res<PauseState>| !paused.active()),
            ));
    }

    fn configure_sdl_systems(schedule: &mut Schedule) {
        schedule
            .add_systems((
                input_system.before(GameplaySet::Input),
                render_system.in_set(RenderSet::Draw),
                present_system.in_set(RenderSet::Present),
            ))
            .configure_sets((
                RenderSet::Draw.after(GameplaySet::Update),
                RenderSet::Present.after(RenderSet::Draw),
            ));
    }

    /// Spawns the static walls.
    pub fn spawn_walls(world: &mut World) {
        for (left, top, width, height) in WALL_LAYOUT {
            world.spawn(Wall::new(left, top, width, height));
        }
        trace!(count = WALL_LAYOUT.len(), "Spawned walls");
    }

    /// Spawns Pac-Man and the four ghosts at the shared spawn point.
    pub fn spawn_characters(world: &mut World, sprite_size: impl Fn(Asset) -> Vec2) {
        let player = world.spawn(PlayerBundle::new(sprite_size(Asset::Pacman))).id();
        trace!(entity = ?player, "Spawned player entity");

        for ghost in Ghost::iter() {
            let entity = world.spawn(GhostBundle::new(ghost, sprite_size(ghost.asset()))).id();
            trace!(ghost = ghost.as_ref(), entity = ?entity, "Spawned ghost entity");
        }
    }

    /// Executes one frame by running every scheduled system.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue
    pub fn tick(&mut self) -> bool {
        self.world.insert_resource(DeltaTime {
            ticks: self.ticks_per_frame,
        });

        self.schedule.run(&mut self.world);

        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();
        formatter::advance_frame();

        self.world.resource::<GlobalState>().exit
    }

    /// Whether the window currently has focus.
    pub fn focused(&self) -> bool {
        self.world.resource::<GlobalState>().focused
    }
}
