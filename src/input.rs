use web_sys as web;

/// Pointer x relative to the canvas' left edge, in canvas pixels.
#[inline]
pub fn pointer_canvas_x(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    ev.client_x() as f32 - rect.left() as f32
}
