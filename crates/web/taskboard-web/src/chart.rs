//! Donut chart drawing on a 2d canvas context.

use taskboard_core::stats::{EMPTY_RING_COLOR, SEGMENT_BORDER_COLOR, SEGMENT_BORDER_WIDTH};
use taskboard_core::{DonutChart, DonutSegment};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Share of the outer radius left hollow
const CUTOUT: f64 = 0.5;

/// Centre and radii of the ring for a canvas of the given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub cx: f64,
    pub cy: f64,
    pub outer: f64,
    pub inner: f64,
}

impl Ring {
    pub fn fit(width: f64, height: f64) -> Self {
        let outer = (width.min(height) / 2.0 - SEGMENT_BORDER_WIDTH).max(0.0);
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            outer,
            inner: outer * CUTOUT,
        }
    }
}

pub fn draw(canvas: &HtmlCanvasElement, chart: &DonutChart) {
    let ctx = match context(canvas) {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = ?e, "No 2d context for the statistics chart");
            return;
        }
    };

    let (width, height) = (canvas.width() as f64, canvas.height() as f64);
    ctx.clear_rect(0.0, 0.0, width, height);
    let ring = Ring::fit(width, height);

    let result = if chart.is_empty() {
        draw_empty(&ctx, ring)
    } else {
        chart
            .visible_segments()
            .try_for_each(|segment| draw_segment(&ctx, ring, segment))
    };
    if let Err(e) = result {
        warn!(error = ?e, "Failed to draw statistics chart");
    }
}

fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unsupported"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn draw_segment(
    ctx: &CanvasRenderingContext2d,
    ring: Ring,
    segment: &DonutSegment,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(
        ring.cx,
        ring.cy,
        ring.outer,
        segment.start_angle,
        segment.end_angle,
    )?;
    ctx.arc_with_anticlockwise(
        ring.cx,
        ring.cy,
        ring.inner,
        segment.end_angle,
        segment.start_angle,
        true,
    )?;
    ctx.close_path();

    ctx.set_fill_style_str(segment.color);
    ctx.fill();
    ctx.set_stroke_style_str(SEGMENT_BORDER_COLOR);
    ctx.set_line_width(SEGMENT_BORDER_WIDTH);
    ctx.stroke();
    Ok(())
}

fn draw_empty(ctx: &CanvasRenderingContext2d, ring: Ring) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(ring.cx, ring.cy, (ring.outer + ring.inner) / 2.0, 0.0, std::f64::consts::TAU)?;
    ctx.set_stroke_style_str(EMPTY_RING_COLOR);
    ctx.set_line_width(ring.outer - ring.inner);
    ctx.stroke();
    Ok(())
}
