//! Event information and static page content.
//!
//! Everything here is plain data: the event record (overridable from the
//! host page, see [`crate::load_event_info`]) and the compiled-in tables
//! the sections render from.

use serde::Deserialize;

/// Core facts about the event. Deserializable so the hosting page can embed
/// overrides as JSON; missing fields fall back to the defaults below.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventInfo {
	/// Event name used in the header, hero, and footer.
	pub name: String,
	/// One-line pitch under the hero title.
	pub tagline: String,
	/// Kickoff instant as milliseconds since the Unix epoch (UTC).
	pub start_ms: f64,
	/// Closing instant as milliseconds since the Unix epoch (UTC).
	pub end_ms: f64,
	/// Human-readable date range; kept as display text to avoid locale work.
	pub dates: String,
	/// Where the event happens.
	pub location: String,
	/// Registration form URL.
	pub registration_url: String,
	/// Contact address for sponsorship inquiries.
	pub sponsor_email: String,
	/// Instagram handle, without the leading `@`.
	pub instagram: String,
}

impl Default for EventInfo {
	fn default() -> Self {
		Self {
			name: "Hack The Net".into(),
			tagline: "Empowering students to hack the future.".into(),
			// 2026-03-14T08:00:00-05:00
			start_ms: 1_773_493_200_000.0,
			// 2026-03-16T18:00:00-05:00
			end_ms: 1_773_702_000_000.0,
			dates: "March 14 – 16, 2026".into(),
			location: "Virtual".into(),
			registration_url: "https://app.youform.com/forms/t57t7025".into(),
			sponsor_email: "hackthenethackathon@gmail.com".into(),
			instagram: "hackthenet2026".into(),
		}
	}
}

/// A hero-card perk.
pub struct Perk {
	/// Short perk name.
	pub title: &'static str,
	/// One-sentence description.
	pub blurb: &'static str,
}

/// Perks shown beside the hero copy.
pub const PERKS: [Perk; 4] = [
	Perk {
		title: "24/7 Workspace",
		blurb: "Power, snacks, mentors, and lightning-fast Wi-Fi.",
	},
	Perk {
		title: "Mentor Rooms",
		blurb: "Book time with experts in AI, web, cloud, and hardware.",
	},
	Perk {
		title: "Prizes & Swag",
		blurb: "Win big and grab exclusive event merch.",
	},
	Perk {
		title: "Beginner-Friendly",
		blurb: "Workshops and starter kits to help you ship.",
	},
];

/// A hackathon track.
pub struct Track {
	/// Track name.
	pub title: &'static str,
	/// What belongs in the track.
	pub blurb: &'static str,
}

/// The four competition tracks.
pub const TRACKS: [Track; 4] = [
	Track {
		title: "Open Internet",
		blurb: "Privacy, identity, interoperability, and decentralized protocols.",
	},
	Track {
		title: "AI x DevTools",
		blurb: "Agents, copilots, and tools that supercharge builders.",
	},
	Track {
		title: "Cybersecurity",
		blurb: "Secure the stack: detection, response, auth, and resilience.",
	},
	Track {
		title: "Wildcard",
		blurb: "Surprise us with something wildly useful or wildly fun.",
	},
];

/// One entry on the schedule timeline.
pub struct ScheduleItem {
	/// Day and time label.
	pub time: &'static str,
	/// What happens.
	pub label: &'static str,
}

/// The 48-hour schedule.
pub const SCHEDULE: [ScheduleItem; 8] = [
	ScheduleItem {
		time: "Day 1 — 3:00 PM",
		label: "Check-in & Team Formation",
	},
	ScheduleItem {
		time: "Day 1 — 6:00 PM",
		label: "Opening Ceremony + Keynote",
	},
	ScheduleItem {
		time: "Day 1 — 7:30 PM",
		label: "Hacking Begins",
	},
	ScheduleItem {
		time: "Day 2 — 10:00 AM",
		label: "Workshops + Office Hours",
	},
	ScheduleItem {
		time: "Day 2 — 7:00 PM",
		label: "Mini-challenges & Demos",
	},
	ScheduleItem {
		time: "Day 3 — 12:00 PM",
		label: "Project Submission Deadline",
	},
	ScheduleItem {
		time: "Day 3 — 1:30 PM",
		label: "Judging & Expo",
	},
	ScheduleItem {
		time: "Day 3 — 5:00 PM",
		label: "Awards + Closing",
	},
];

/// A prize tier.
pub struct Prize {
	/// Tier name.
	pub title: &'static str,
	/// What the winners get.
	pub blurb: &'static str,
}

/// Prize tiers, grand prize first.
pub const PRIZES: [Prize; 3] = [
	Prize {
		title: "Grand Prize",
		blurb: "$5,000 cash, plus high-end gear from our sponsors and a featured spot on our blog.",
	},
	Prize {
		title: "Track Winners",
		blurb: "$1,500 for the best project in each track: Open Internet, AI x DevTools, and Cybersecurity.",
	},
	Prize {
		title: "Best Wildcard",
		blurb: "$1,000 for the most creative, fun, or surprising 'Wildcard' project.",
	},
];

/// A frequently asked question.
pub struct Faq {
	/// The question.
	pub question: &'static str,
	/// The answer.
	pub answer: &'static str,
}

/// FAQ entries in display order.
pub const FAQS: [Faq; 4] = [
	Faq {
		question: "Who can participate?",
		answer: "Students, professionals, and beginners are welcome. Form a team of up to 4 or hack solo—your call.",
	},
	Faq {
		question: "What should I bring?",
		answer: "Laptop, chargers, valid ID, and anything you need to be comfy (hoodie, water bottle, etc.). We provide power and Wi-Fi.",
	},
	Faq {
		question: "Is it free?",
		answer: "Yes! Thanks to our sponsors, admission is free for accepted hackers.",
	},
	Faq {
		question: "Do I need an idea beforehand?",
		answer: "Nope. We'll run team-forming sessions and idea jams to help you get rolling.",
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_event_runs_forward_in_time() {
		let event = EventInfo::default();
		assert!(event.start_ms < event.end_ms);
	}

	#[test]
	fn partial_json_falls_back_to_defaults() {
		let event: EventInfo = serde_json::from_str(r#"{"name": "Test Jam"}"#).unwrap();
		assert_eq!(event.name, "Test Jam");
		assert_eq!(event.location, "Virtual");
	}
}
