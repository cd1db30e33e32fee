#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::{EffectConfig, Starfield};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starwave-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut rng = StdRng::from_entropy();
    let images = constants::GALLERY_IMAGES
        .iter()
        .map(|s| s.to_string())
        .collect();
    let engine = Starfield::new(EffectConfig::default(), images, &mut rng)?;

    let stars = dom::mount_stars(&document, engine.stars())?;
    let surface = dom::DomSurface::new(window.clone(), document.clone(), stars);
    let app = frame::App::new(engine, surface, window);
    events::wire_click(&document, app);
    Ok(())
}
