//! hackthenet-site: promotional single-page site for the Hack The Net
//! student hackathon.
//!
//! A WASM client-side-rendered page: hero with a live countdown, tracks,
//! schedule, prizes, and FAQ over an animated starfield canvas background.
//! Event facts can be overridden by embedding JSON in the hosting page;
//! everything else is compiled-in content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

use components::sections::{
	CallToAction, FaqList, Hero, PrizeGrid, ScheduleTimeline, SiteFooter, SiteHeader, TrackGrid,
};
use components::starfield::{Starfield, StarfieldConfig};
use content::EventInfo;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hackthenet-site: logging initialized");
}

/// Load event overrides from a script element with id="event-data".
/// Expected format: a JSON object with any subset of [`EventInfo`] fields.
pub fn load_event_info() -> Option<EventInfo> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("event-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<EventInfo>(&json_text) {
		Ok(event) => {
			info!("hackthenet-site: loaded event data for {}", event.name);
			Some(event)
		}
		Err(e) => {
			warn!("hackthenet-site: failed to parse event data: {}", e);
			None
		}
	}
}

/// Main application component: the full single-page site.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let event = load_event_info().unwrap_or_default();
	let title = format!("{} — {}", event.name, event.tagline);
	let starfield_config = Signal::derive(StarfieldConfig::default);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=event.tagline.clone() />

		<Starfield config=starfield_config />
		<SiteHeader event=event.clone() />
		<main>
			<Hero event=event.clone() />
			<TrackGrid />
			<ScheduleTimeline />
			<PrizeGrid />
			<FaqList />
			<CallToAction event=event.clone() />
		</main>
		<SiteFooter event=event />
	}
}
