#[cfg(target_arch = "wasm32")]
use console_error_panic_hook::set_once as set_console_panic_hook;
mod billboard;
mod camera;
mod driver;
mod fermat;
mod frame_clock;
mod gl_wrap;
mod mouse;
mod points;
mod vis;
mod vis_ctx;
use vis::{SceneConfig, Vis};

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 500.0;

#[cfg(target_arch = "wasm32")]
fn main() {
    // set panic hook for browser error logging
    set_console_panic_hook();

    let vis = Vis::new(SceneConfig::Spiral, WIDTH, HEIGHT).unwrap();
    Vis::start(vis).unwrap();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match scene_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to read texture: {}", e);
            std::process::exit(1);
        }
    };
    let result = Vis::new(config, WIDTH, HEIGHT).and_then(Vis::start);
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

// `spiral-vis` runs the point cloud, `spiral-vis billboard [image.png]`
// the textured orbit scene
#[cfg(not(target_arch = "wasm32"))]
fn scene_config() -> Result<SceneConfig, std::io::Error> {
    let mut args = std::env::args().skip(1);
    Ok(match args.next().as_deref() {
        Some("billboard") => {
            let texture = match args.next() {
                Some(path) => Some(std::fs::read(path)?),
                None => None,
            };
            SceneConfig::Billboard { texture }
        }
        _ => SceneConfig::Spiral,
    })
}
