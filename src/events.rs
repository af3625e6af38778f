use crate::input;
use blackhole_core::{EventQueue, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Queue pointer moves over the canvas for the next frame tick.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, events: Rc<RefCell<EventQueue>>) {
    let canvas_for_closure = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = input::pointer_canvas_x(&ev, &canvas_for_closure);
        if x.is_finite() {
            events.borrow_mut().push(InputEvent::PointerMove { x });
        }
    }) as Box<dyn FnMut(_)>);

    if canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[input] could not attach pointermove listener");
    }
    closure.forget();
}
