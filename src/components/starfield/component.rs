//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a full-viewport canvas, seeds the particle engine,
//! and drives it with a self-rescheduling `requestAnimationFrame` chain.
//! Window-level listeners (resize, and scroll when contrails are enabled)
//! are held in closure slots so cleanup can unregister them; canvas-local
//! pointer and touch events go through `view!` handlers, which Leptos
//! removes on unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, TouchEvent, Window};

use super::config::StarfieldConfig;
use super::field::{PointerState, StarField};
use super::render;

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

/// Size the canvas backing store for the device pixel ratio while keeping
/// the drawing context in CSS pixel coordinates. Resetting the width clears
/// the context transform, so the scale is re-applied here after every resize.
fn fit_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	window: &Window,
) {
	let dpr = window.device_pixel_ratio().max(1.0);
	canvas.set_width((width * dpr) as u32);
	canvas.set_height((height * dpr) as u32);
	let _ = ctx.scale(dpr, dpr);
}

/// Renders a softly twinkling star background on a fixed full-viewport
/// canvas behind the page content.
///
/// Configuration is read from the `config` signal once per frame, so count,
/// color, and speed changes are absorbed without restarting the field. If
/// the canvas or its 2d context is unavailable at mount, the component does
/// nothing.
#[component]
pub fn Starfield(#[prop(into)] config: Signal<StarfieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<StarField>>> = Rc::new(RefCell::new(None));
	let pointer: Rc<RefCell<PointerState>> = Rc::new(RefCell::new(PointerState::default()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (field_init, animate_init, resize_cb_init, scroll_cb_init) = (
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		scroll_cb.clone(),
	);
	let (pointer_anim, raf_init) = (pointer.clone(), raf_id.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Ok(Some(ctx_object)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx_object.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let cfg = config.get_untracked().sanitized();
		let (w, h) = viewport_size(&window);
		if w <= 0.0 || h <= 0.0 {
			return;
		}
		fit_canvas(&canvas, &ctx, w, h, &window);

		// Wall-clock seed; tests construct the field with fixed seeds instead.
		let seed = js_sys::Date::now() as u64;
		*field_init.borrow_mut() = Some(StarField::new(cfg.count, w, h, seed));

		let (field_resize, canvas_resize, ctx_resize) =
			(field_init.clone(), canvas.clone(), ctx.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			fit_canvas(&canvas_resize, &ctx_resize, nw, nh, &win);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if cfg.scroll_trails {
			let field_scroll = field_init.clone();
			let last_scroll_y = Cell::new(window.scroll_y().unwrap_or(0.0));
			*scroll_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let y = win.scroll_y().unwrap_or(0.0);
				let delta = y - last_scroll_y.get();
				last_scroll_y.set(y);
				if let Some(ref mut f) = *field_scroll.borrow_mut() {
					f.kick(delta);
				}
			}));
			if let Some(ref cb) = *scroll_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
			}
		}

		let (field_anim, pointer_frame) = (field_init.clone(), pointer_anim.clone());
		let (animate_inner, raf_inner) = (animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				let cfg = config.get_untracked().sanitized();
				if f.len() != cfg.count {
					f.set_count(cfg.count);
				}
				f.step(cfg.speed_factor);
				render::render(f, &pointer_frame.borrow(), &ctx, &cfg);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					raf_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			raf_init.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	let drop_state = send_wrapper::SendWrapper::new((
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		scroll_cb.clone(),
		raf_id.clone(),
	));
	on_cleanup(move || {
		let (field_drop, animate_drop, resize_drop, scroll_drop, raf_drop) = drop_state.take();
		if let Some(id) = raf_drop.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// Emptying the slot breaks the RAF chain even if a tick slips through
		// between cancellation and closure drop.
		*animate_drop.borrow_mut() = None;
		if let Some(window) = web_sys::window() {
			if let Some(cb) = resize_drop.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = scroll_drop.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
			}
		}
		*field_drop.borrow_mut() = None;
	});

	let pointer_move = pointer.clone();
	let on_pointermove = move |ev: PointerEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let mut p = pointer_move.borrow_mut();
		p.inside = true;
		p.x = ev.client_x() as f64 - rect.left();
		p.y = ev.client_y() as f64 - rect.top();
	};

	let pointer_leave = pointer.clone();
	let on_pointerleave = move |_: PointerEvent| {
		pointer_leave.borrow_mut().inside = false;
	};

	let pointer_touch = pointer.clone();
	let on_touchmove = move |ev: TouchEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let mut p = pointer_touch.borrow_mut();
		p.inside = true;
		p.x = touch.client_x() as f64 - rect.left();
		p.y = touch.client_y() as f64 - rect.top();
	};

	let pointer_touch_end = pointer.clone();
	let on_touchend = move |_: TouchEvent| {
		pointer_touch_end.borrow_mut().inside = false;
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			on:pointermove=on_pointermove
			on:pointerleave=on_pointerleave
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="position: fixed; inset: 0; z-index: -20; display: block; width: 100%; height: 100%;"
		/>
	}
}
