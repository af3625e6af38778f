use blackhole_core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// CSS box of the canvas in whole pixels.
#[inline]
pub fn css_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    SurfaceSize::from_css(rect.width(), rect.height())
}

/// Match the backing store to the CSS box (1 device pixel per CSS pixel).
///
/// Queried every frame; the canvas is only written when the size changed,
/// since assigning `width`/`height` reallocates the drawing buffer.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let size = css_size(canvas);
    if canvas.width() != size.width {
        canvas.set_width(size.width);
    }
    if canvas.height() != size.height {
        canvas.set_height(size.height);
    }
    size
}
