#![cfg(target_arch = "wasm32")]
use blackhole_core::{EventQueue, CANVAS_ID};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blackhole-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    // Size the backing store before the surface is configured
    dom::sync_canvas_backing_size(&canvas);

    let events = Rc::new(RefCell::new(EventQueue::new()));
    events::wire_pointermove(&canvas, events.clone());

    // Without a GPU context no frame is ever produced
    let Some(gpu) = frame::init_gpu(&canvas).await else {
        return Ok(());
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(canvas, events, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
