use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{GraphLayoutState, NODE_RADIUS};

const INK: &str = "#000";
const ACCENT: &str = "37, 99, 235";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &GraphLayoutState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &GraphLayoutState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let has_highlight = state.hover.node.is_some() && t > 0.01;

	state.graph.visit_edges(|n1, n2, _| {
		let lit = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		if has_highlight && lit {
			ctx.set_stroke_style_str(&format!("rgba({ACCENT}, {})", 0.4 + 0.6 * t));
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		} else if has_highlight {
			ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {})", 1.0 - 0.7 * t));
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(4.0),
			));
		} else {
			ctx.set_stroke_style_str(INK);
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &GraphLayoutState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let lit = state.is_highlighted(node.index()) && t > 0.01;

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#fff");
		ctx.fill();
		if lit {
			ctx.set_stroke_style_str(&format!("rgba({ACCENT}, {})", 0.4 + 0.6 * t));
			ctx.set_line_width(2.0 + t);
		} else {
			ctx.set_stroke_style_str(INK);
			ctx.set_line_width(2.0);
		}
		ctx.stroke();

		ctx.set_fill_style_str(INK);
		ctx.set_font("bold 12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.data.user_data.label, x, y);
	});
}
