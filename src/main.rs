use std::path::PathBuf;
use std::process;

use clap::Parser;
use macroquad::prelude::*;

use gfield::{load_scenario, Scene};

const CANVAS_W: i32 = 1280;
const CANVAS_H: i32 = 960;

fn window_conf() -> Conf {
    Conf {
        window_title: "gravity field".to_string(),
        window_width: CANVAS_W,
        window_height: CANVAS_H,
        window_resizable: true,
        sample_count: 0,
        icon: None,
        high_dpi: true,
        ..Default::default()
    }
}

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML; the built-in Sun-Earth scenario runs when omitted.
    #[arg(short)]
    file_name: Option<PathBuf>,
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    let (width, height) = (screen_width() as f64, screen_height() as f64);

    let mut scene = match args.file_name {
        Some(path) => {
            let loaded =
                load_scenario(&path).and_then(|cfg| Scene::from_config(cfg, width, height));

            match loaded {
                Ok(scene) => scene,
                Err(err) => {
                    error!("failed to load scenario: {:#}", err);
                    process::exit(1);
                }
            }
        }
        None => Scene::sun_earth(width, height),
    };

    loop {
        let (mouse_x, mouse_y) = mouse_position();
        scene.track_pointer(mouse_x as f64, mouse_y as f64);

        scene.step();
        scene.render();

        draw_text(&format!("{}", get_fps()), 10.0, 16.0, 12.0, WHITE);

        next_frame().await
    }
}
