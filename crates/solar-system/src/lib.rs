use wasm_bindgen::prelude::*;

pub mod body;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod interaction;
pub mod orbit;
pub mod picking;
pub mod scenery;
pub mod selection;
pub mod sim;
pub mod speeds;
pub mod view;

use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system", vectors);

/// The active catalog as JSON (names, distances, sizes, colors, default speeds).
#[wasm_bindgen]
pub fn solar_catalog_json() -> String {
    with_runner(|r| r.game().catalog_json())
}
