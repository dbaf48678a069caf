use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::physics::PhysicsWorld;
use game::arena;
use game::locomotion::{
    LocomotionController, LocomotionEvent, MovementParameters, RapierPlayerPhysics,
};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Wallkick...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Wallkick")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Physics world with the demo arena and the player
    let mut physics = PhysicsWorld::new();
    arena::build(&mut physics);
    let params = MovementParameters::default();
    let player = arena::spawn_player(&mut physics, &params, 0.0, 2.0);
    let mut controller = LocomotionController::new(params)?;

    // Fail fast if the spawned handles don't resolve
    RapierPlayerPhysics::bind(&mut physics, player.body, player.collider)?;

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    input.process_keyboard_event(&key_event);
                    if input.just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                    }
                }
                WindowEvent::Focused(false) => {
                    // Dropped focus means dropped keys
                    input.reset();
                }
                WindowEvent::RedrawRequested => {
                    window.request_redraw();
                }
                _ => {}
            },
            Event::AboutToWait => {
                let updates = game_loop.begin_frame();
                for _ in 0..updates {
                    let axes = input.axes();
                    match RapierPlayerPhysics::bind(&mut physics, player.body, player.collider) {
                        Ok(mut scene) => {
                            controller.step(axes, &mut scene, game_loop.fixed_timestep());
                        }
                        Err(err) => {
                            log::error!("Player body unavailable: {err}");
                            elwt.exit();
                            return;
                        }
                    }
                    physics.step();

                    for notification in controller.drain_events() {
                        match notification {
                            LocomotionEvent::StateChanged { from, to } => {
                                info!("Player state: {from:?} -> {to:?}");
                            }
                            LocomotionEvent::LegsFace(direction) => {
                                info!("Legs face {direction:?}");
                            }
                        }
                    }
                }
                input.update();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
