use anyhow::Result;
use clap::Parser;
use hecs::World;

use stroll::app::DemoApp;
use stroll::controller::{ControllerConfig, LandingPolicy};
use stroll::engine::window::GameWindow;
use stroll::scene::demo::load_demo_scene;

#[derive(Parser)]
#[command(name = "stroll", about = "Keyboard-driven 3D character walk demo")]
struct Args {
    /// Horizontal speed factor applied while airborne
    #[arg(long, default_value_t = 1.5)]
    air_speed_mult: f32,

    /// Peak jump height above the takeoff point, in world units
    #[arg(long, default_value_t = 2.0)]
    jump_amplitude: f32,

    /// What landing does with a movement key still held: 'idle' drops to
    /// idle for a frame first, 'resume' goes straight back to walking
    #[arg(long, default_value = "idle")]
    landing_policy: LandingPolicy,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = ControllerConfig {
        air_speed_mult: args.air_speed_mult,
        jump_amplitude: args.jump_amplitude,
        landing_policy: args.landing_policy,
        ..ControllerConfig::default()
    };

    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let window = GameWindow::new(&sdl, "Stroll", 1280, 720)?;

    let mut world = World::new();
    let (meshes, _actor) = load_demo_scene(&mut world, config);
    log::info!("scene ready: arrow keys walk, space jumps, escape quits");

    DemoApp::new(world, meshes)?.run(&sdl, &window)
}
