//! Static page sections: header, hero, tracks, schedule, prizes, FAQ, and
//! footer. These are thin props-driven views over [`crate::content`]; the
//! only moving part on the page is the [`Countdown`] inside the hero.

use leptos::prelude::*;

use crate::components::countdown::Countdown;
use crate::content::{EventInfo, FAQS, PERKS, PRIZES, SCHEDULE, TRACKS};

/// Sticky header with in-page navigation and the register button.
#[component]
pub fn SiteHeader(
	/// Event facts for the brand name and registration link.
	event: EventInfo,
) -> impl IntoView {
	let links = ["About", "Tracks", "Schedule", "Prizes", "FAQ"];
	view! {
		<header class="site-header">
			<a href="#" class="brand">{event.name.clone()}</a>
			<nav class="site-nav">
				{links
					.into_iter()
					.map(|link| {
						view! { <a href=format!("#{}", link.to_lowercase())>{link}</a> }
					})
					.collect_view()}
			</nav>
			<a class="button primary" href=event.registration_url>"Register"</a>
		</header>
	}
}

/// Hero section: title, tagline, dates, calls to action, the kickoff
/// countdown, and the perk cards.
#[component]
pub fn Hero(
	/// Event facts for the copy and the countdown target.
	event: EventInfo,
) -> impl IntoView {
	view! {
		<section id="about" class="hero">
			<div class="hero-copy">
				<span class="badge">"New • 48-hour hackathon"</span>
				<h1>{event.name}</h1>
				<p class="tagline">{event.tagline}</p>
				<p class="event-facts">
					<span>{event.dates}</span>
					" · "
					<span>{event.location}</span>
				</p>
				<div class="hero-actions">
					<a class="button primary" href=event.registration_url>"Apply to Hack"</a>
					<a class="button secondary" href="#tracks">"Explore Tracks"</a>
				</div>
				<div class="countdown-card">
					<p class="countdown-label">"Countdown to kickoff"</p>
					<Countdown target_ms=event.start_ms />
					<span class="badge outline">"Limited spots"</span>
				</div>
			</div>
			<div class="perk-grid">
				{PERKS
					.iter()
					.map(|perk| {
						view! {
							<div class="card perk">
								<h3>{perk.title}</h3>
								<p>{perk.blurb}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// The four-track grid.
#[component]
pub fn TrackGrid() -> impl IntoView {
	view! {
		<section id="tracks" class="section">
			<h2>"Choose Your Track"</h2>
			<p class="section-intro">
				"Focus on a specific area or go for the wildcard. We have tracks for every interest."
			</p>
			<div class="track-grid">
				{TRACKS
					.iter()
					.map(|track| {
						view! {
							<div class="card track">
								<h3>{track.title}</h3>
								<p>{track.blurb}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Vertical timeline of the 48-hour schedule.
#[component]
pub fn ScheduleTimeline() -> impl IntoView {
	view! {
		<section id="schedule" class="section">
			<h2>"Event Schedule"</h2>
			<p class="section-intro">
				"48 hours of building, learning, and connecting. Here's what to expect."
			</p>
			<ol class="timeline">
				{SCHEDULE
					.iter()
					.map(|item| {
						view! {
							<li class="timeline-entry">
								<p class="timeline-label">{item.label}</p>
								<p class="timeline-time">{item.time}</p>
							</li>
						}
					})
					.collect_view()}
			</ol>
		</section>
	}
}

/// Prize tier cards.
#[component]
pub fn PrizeGrid() -> impl IntoView {
	view! {
		<section id="prizes" class="section">
			<h2>"Prizes & Glory"</h2>
			<p class="section-intro">
				"Win incredible prizes, and more importantly, eternal bragging rights."
			</p>
			<div class="prize-grid">
				{PRIZES
					.iter()
					.map(|prize| {
						view! {
							<div class="card prize">
								<h3>{prize.title}</h3>
								<p>{prize.blurb}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// FAQ as native `<details>` disclosures; no script needed for toggling.
#[component]
pub fn FaqList() -> impl IntoView {
	view! {
		<section id="faq" class="section narrow">
			<h2>"Frequently Asked Questions"</h2>
			{FAQS
				.iter()
				.map(|faq| {
					view! {
						<details class="faq-item">
							<summary>{faq.question}</summary>
							<p>{faq.answer}</p>
						</details>
					}
				})
				.collect_view()}
		</section>
	}
}

/// Closing call-to-action banner.
#[component]
pub fn CallToAction(
	/// Event facts for the registration link.
	event: EventInfo,
) -> impl IntoView {
	view! {
		<section class="section cta">
			<h2>"Ready to Build the Future?"</h2>
			<p>"Don't miss out. Spots are limited and filling up fast."</p>
			<a class="button secondary" href=event.registration_url>
				{format!("Apply to {}", event.name)}
			</a>
		</section>
	}
}

/// Footer with sponsorship contact and socials.
#[component]
pub fn SiteFooter(
	/// Event facts for the contact links.
	event: EventInfo,
) -> impl IntoView {
	view! {
		<footer class="site-footer">
			<span class="brand">{event.name}</span>
			<div class="footer-links">
				<a href=format!("mailto:{}", event.sponsor_email)>{event.sponsor_email.clone()}</a>
				<a
					href=format!("https://instagram.com/{}", event.instagram)
					target="_blank"
					rel="noopener noreferrer"
				>
					{format!("@{}", event.instagram)}
				</a>
			</div>
		</footer>
	}
}
