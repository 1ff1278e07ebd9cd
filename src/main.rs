use evo_viewport::config::RenderConfig;
use evo_viewport::render::frame::{RenderLoop, StopSignal};
use evo_viewport::render::macroquad_surface::MacroquadSurface;
use evo_viewport::simulation::drift::DriftSimulation;
use macroquad::prelude::*;
use std::sync::OnceLock;
use tracing::{Level, error, warn};
use tracing_subscriber::FmtSubscriber;

/// Read once, before the window opens.
static CONFIG: OnceLock<RenderConfig> = OnceLock::new();

fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Config path is the first command line argument, if any.
fn load_config() -> RenderConfig {
    let Some(path) = std::env::args().nth(1) else {
        return RenderConfig::default();
    };
    match RenderConfig::load_from_file(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("Failed to load config {}: {}, using defaults", path, err);
            RenderConfig::default()
        }
    }
}

fn config() -> &'static RenderConfig {
    CONFIG.get_or_init(load_config)
}

fn window_conf() -> Conf {
    init_tracing();
    let config = config();
    Conf {
        window_title: "Evo Viewport".to_string(),
        window_width: config.viewport_width as i32,
        window_height: config.viewport_height as i32,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();

    let simulation = DriftSimulation::with_params(config.simulation.clone(), config.seed);
    let surface = MacroquadSurface::new(config.background_color());
    let mut render_loop =
        match RenderLoop::new(simulation, surface, config, Some(screen_dpi_scale())) {
            Ok(render_loop) => render_loop,
            Err(err) => {
                error!("Invalid render config: {}", err);
                return;
            }
        };

    let stop = StopSignal::new();
    let result = render_loop
        .run(&stop, || {
            if is_key_pressed(KeyCode::Escape) {
                stop.stop();
            }
            next_frame()
        })
        .await;

    if let Err(err) = result {
        error!("Render loop halted: {}", err);
    }
}
