use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;
use super::style::{LABEL_FONT, LABEL_OFFSET, LINK_COLOR, LINK_WIDTH};

const BACKGROUND: &str = "#1a1a2e";
const TOOLTIP_FONT: &str = "11px sans-serif";
const TOOLTIP_LINE: f64 = 14.0;
const TOOLTIP_PAD: f64 = 6.0;

pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	draw_tooltip(state, ctx);
}

fn draw_links(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(LINK_WIDTH);
	ctx.begin_path();
	state.graph.visit_edges(|n1, n2, _| {
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
	});
	ctx.stroke();
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		ctx.begin_path();
		let _ = ctx.arc(node.x() as f64, node.y() as f64, info.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if state.hover == Some(node.index()) || info.pin.is_some() {
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}
	});
}

fn draw_labels(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("white");
	ctx.set_font(LABEL_FONT);
	let (dx, dy) = LABEL_OFFSET;
	state.graph.visit_nodes(|node| {
		let _ = ctx.fill_text(
			&node.data.user_data.id,
			node.x() as f64 + dx,
			node.y() as f64 + dy,
		);
	});
}

fn draw_tooltip(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	let Some((x, y, radius, text)) = state.hover_tooltip() else {
		return;
	};
	ctx.set_font(TOOLTIP_FONT);
	let lines: Vec<&str> = text.lines().collect();
	let width = lines
		.iter()
		.filter_map(|line| ctx.measure_text(line).ok())
		.map(|m| m.width())
		.fold(0.0, f64::max)
		+ 2.0 * TOOLTIP_PAD;
	let height = lines.len() as f64 * TOOLTIP_LINE + 2.0 * TOOLTIP_PAD;

	// Keep the box on the canvas, flipping to the left of the node near the
	// right edge.
	let mut left = x + radius + 8.0;
	if left + width > state.width {
		left = x - radius - 8.0 - width;
	}
	let top = (y - height / 2.0).clamp(0.0, (state.height - height).max(0.0));

	ctx.set_fill_style_str("rgba(0, 0, 0, 0.8)");
	ctx.fill_rect(left, top, width, height);
	ctx.set_fill_style_str("white");
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(
			line,
			left + TOOLTIP_PAD,
			top + TOOLTIP_PAD + (i as f64 + 0.8) * TOOLTIP_LINE,
		);
	}
}
