use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::controller::{Intent, NetworkController, Outcome};
use super::render;
use super::state::SimulationConfig;
use super::types::NetworkData;
use crate::data::analysis::NetworkSummary;

/// Longest step fed to the simulation, so a backgrounded tab does not make
/// the layout jump when it comes back.
const MAX_FRAME_SECS: f64 = 0.05;

type Shared<T> = Rc<RefCell<Option<T>>>;

#[component]
pub fn NetworkGraph(
	#[prop(into)] data: Signal<NetworkData>,
	/// Latest filter request from the page.
	#[prop(into)]
	intent: Signal<Option<Intent>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = 600.0)] height: f64,
	/// Called with a summary of the visible network after every rebuild.
	#[prop(optional)]
	on_render: Option<Callback<NetworkSummary>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let controller: Shared<NetworkController> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (controller_init, animate_init, resize_cb_init) =
		(controller.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window to draw the network in");
			return;
		};

		let w = width.unwrap_or_else(|| mount_width(&canvas));
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);

		let network = NetworkController::new(data, SimulationConfig::default(), w, height);
		let summary = network.summary();
		*controller_init.borrow_mut() = Some(network);
		if let Some(cb) = on_render {
			cb.run(summary);
		}

		if resize_cb_init.borrow().is_none() && width.is_none() {
			let (controller_resize, canvas_resize) = (controller_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let nw = mount_width(&canvas_resize);
				canvas_resize.set_width(nw as u32);
				if let Some(ref mut c) = *controller_resize.borrow_mut() {
					c.dispatch(Intent::Resize {
						width: nw,
						height,
					});
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		// One frame loop per component; later data changes only swap the
		// controller it draws.
		if animate_init.borrow().is_some() {
			return;
		}
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("2d context has an unexpected type");
					return;
				}
			},
			_ => {
				error!("canvas has no 2d context");
				return;
			}
		};

		let (controller_anim, animate_inner) = (controller_init.clone(), animate_init.clone());
		let last_frame = Cell::new(js_sys::Date::now());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame.replace(now)) / 1000.0).clamp(0.0, MAX_FRAME_SECS);
			if let Some(ref mut c) = *controller_anim.borrow_mut() {
				c.dispatch(Intent::Tick(dt as f32));
				render::render(c.state(), &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let controller_intent = controller.clone();
	Effect::new(move |_| {
		let Some(intent) = intent.get() else {
			return;
		};
		let summary = match *controller_intent.borrow_mut() {
			Some(ref mut c) => match c.dispatch(intent) {
				Outcome::Rebuilt => Some(c.summary()),
				_ => None,
			},
			None => {
				warn!("filter requested before the network was mounted");
				None
			}
		};
		if let (Some(summary), Some(cb)) = (summary, on_render) {
			cb.run(summary);
		}
	});

	let controller_md = controller.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *controller_md.borrow_mut() {
			if let Some((_, id)) = c.state().node_at_position(x, y) {
				c.dispatch(Intent::DragStarted { id, x, y });
			}
		}
	};

	let controller_mm = controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *controller_mm.borrow_mut() {
			match c.state().dragging().map(str::to_string) {
				Some(id) => {
					c.dispatch(Intent::DragMoved { id, x, y });
				}
				None => {
					let hovered = c.state().node_at_position(x, y).map(|(idx, _)| idx);
					c.state_mut().set_hover(hovered);
				}
			}
		}
	};

	let controller_mu = controller.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_mu.borrow_mut() {
			release(c);
		}
	};

	let controller_ml = controller.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_ml.borrow_mut() {
			release(c);
			c.state_mut().set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}

fn release(c: &mut NetworkController) {
	if let Some(id) = c.state().dragging().map(str::to_string) {
		c.dispatch(Intent::DragEnded { id });
	}
}

/// Width of the element the canvas is mounted in.
fn mount_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

/// Pointer position relative to the canvas.
fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
