use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::GraphLayoutState;
use super::types::GraphData;

const FRAME_SECONDS: f32 = 0.016;

type FrameSlot = RefCell<Option<Closure<dyn FnMut()>>>;

/// Owns the requestAnimationFrame callback. Dropping it cancels the pending
/// frame and frees the callback along with everything it captured.
struct AnimationLoop {
	frame: Rc<FrameSlot>,
	handle: Rc<Cell<Option<i32>>>,
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		if let Some(handle) = self.handle.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(handle);
			}
		}
		self.frame.borrow_mut().take();
	}
}

// The callback only holds a weak handle to its own slot, so the loop ends
// once the owning AnimationLoop is gone.
fn request_frame(slot: &Weak<FrameSlot>, handle: &Cell<Option<i32>>) {
	let Some(slot) = slot.upgrade() else {
		return;
	};
	if let (Some(cb), Some(window)) = (slot.borrow().as_ref(), web_sys::window()) {
		handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
	}
}

fn canvas_point(canvas: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas running a force-directed layout of `data`. Vertices can be dragged.
#[component]
pub fn ForceGraphCanvas(
	data: GraphData,
	#[prop(default = 600.0)] width: f64,
	#[prop(default = 300.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphLayoutState>>> = Rc::new(RefCell::new(None));
	let animation = StoredValue::<Option<AnimationLoop>, LocalStorage>::new_local(None);
	let state_init = state.clone();

	on_cleanup(move || {
		let _ = animation.try_update_value(|slot| slot.take());
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("2d context has unexpected type");
					return;
				}
			},
			_ => {
				warn!("canvas 2d context unavailable, graph not drawn");
				return;
			}
		};
		*state_init.borrow_mut() = Some(GraphLayoutState::new(&data, width, height));

		let frame: Rc<FrameSlot> = Rc::new(RefCell::new(None));
		let handle = Rc::new(Cell::new(None));
		let (state_anim, slot_anim, handle_anim) =
			(state_init.clone(), Rc::downgrade(&frame), handle.clone());
		*frame.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_SECONDS);
				if s.is_running() || s.hover.highlight_t > 0.0 {
					render::render(s, &ctx);
				}
			}
			request_frame(&slot_anim, &handle_anim);
		}));
		request_frame(&Rc::downgrade(&frame), &handle);
		// Replacing a previous loop drops and cancels it.
		animation.set_value(Some(AnimationLoop { frame, handle }));
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.node_idx.is_some() {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dropping_loop_releases_frame_slot() {
		let frame: Rc<FrameSlot> = Rc::new(RefCell::new(None));
		let weak = Rc::downgrade(&frame);
		let animation = AnimationLoop {
			frame,
			handle: Rc::new(Cell::new(None)),
		};
		assert!(weak.upgrade().is_some());
		drop(animation);
		assert!(weak.upgrade().is_none());
	}

	#[test]
	fn no_frame_requested_after_loop_is_gone() {
		let frame: Rc<FrameSlot> = Rc::new(RefCell::new(None));
		let weak = Rc::downgrade(&frame);
		drop(frame);
		let handle = Cell::new(None);
		request_frame(&weak, &handle);
		assert_eq!(handle.get(), None);
	}
}
