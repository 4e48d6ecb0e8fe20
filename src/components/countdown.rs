//! Countdown to kickoff.
//!
//! A one-second interval re-renders the remaining time; formatting is kept
//! as a pure function so it can be tested off the browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Format a remaining duration in milliseconds as `DDd : HHh : MMm : SSs`.
/// Elapsed targets clamp to all zeroes rather than counting up.
pub fn format_remaining(diff_ms: f64) -> String {
	let total_seconds = (diff_ms / 1000.0).floor().max(0.0) as i64;
	let days = total_seconds / 86_400;
	let hours = total_seconds / 3_600 % 24;
	let minutes = total_seconds / 60 % 60;
	let seconds = total_seconds % 60;
	format!("{days:02}d : {hours:02}h : {minutes:02}m : {seconds:02}s")
}

/// Live countdown display, updated once per second until unmount.
#[component]
pub fn Countdown(
	/// Target instant as milliseconds since the Unix epoch.
	target_ms: f64,
) -> impl IntoView {
	let (remaining, set_remaining) = signal(format_remaining(target_ms - js_sys::Date::now()));

	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (tick_init, interval_init) = (tick.clone(), interval_id.clone());
	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		*tick_init.borrow_mut() = Some(Closure::new(move || {
			set_remaining.set(format_remaining(target_ms - js_sys::Date::now()));
		}));
		if let Some(ref cb) = *tick_init.borrow() {
			interval_init.set(
				window
					.set_interval_with_callback_and_timeout_and_arguments_0(
						cb.as_ref().unchecked_ref(),
						1_000,
					)
					.ok(),
			);
		}
	});

	let drop_state = send_wrapper::SendWrapper::new((tick, interval_id));
	on_cleanup(move || {
		let (tick_drop, interval_drop) = drop_state.take();
		if let Some(id) = interval_drop.take() {
			if let Some(window) = web_sys::window() {
				window.clear_interval_with_handle(id);
			}
		}
		*tick_drop.borrow_mut() = None;
	});

	view! { <p class="countdown-value">{move || remaining.get()}</p> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn elapsed_target_clamps_to_zero() {
		assert_eq!(format_remaining(0.0), "00d : 00h : 00m : 00s");
		assert_eq!(format_remaining(-5_000.0), "00d : 00h : 00m : 00s");
	}

	#[test]
	fn formats_each_unit() {
		// 1 day, 1 hour, 1 minute, 1 second
		assert_eq!(format_remaining(90_061_000.0), "01d : 01h : 01m : 01s");
		assert_eq!(format_remaining(36_000_000.0), "00d : 10h : 00m : 00s");
	}

	#[test]
	fn sub_second_remainder_is_floored() {
		assert_eq!(format_remaining(59_999.0), "00d : 00h : 00m : 59s");
	}

	#[test]
	fn multi_day_counts_past_99_hours() {
		// 12 days and change
		assert_eq!(format_remaining(1_040_462_000.0), "12d : 01h : 01m : 02s");
	}
}
