use crate::dom;
use crate::render;
use blackhole_core::{Driver, EventQueue, FrameStats};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: Driver,
    pub events: Rc<RefCell<EventQueue>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub stats: FrameStats,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        events: Rc<RefCell<EventQueue>>,
        gpu: render::GpuState,
    ) -> Self {
        let mut driver = Driver::new();
        driver.start();
        Self {
            driver,
            events,
            canvas,
            gpu,
            stats: FrameStats::new(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        if let Some(fps) = self.stats.record(dt_sec) {
            log::debug!("[frame] {:.1} fps, t={:.2}", fps, self.driver.time());
        }

        let size = dom::sync_canvas_backing_size(&self.canvas);
        let plan = {
            let mut events = self.events.borrow_mut();
            self.driver.tick(&mut events, size)
        };
        let Some(plan) = plan else {
            return;
        };
        if !plan.should_draw() {
            return;
        }
        if let Err(e) = self.gpu.render(&plan) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {}", e);
            None
        }
    }
}

/// Drive `frame` from requestAnimationFrame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
