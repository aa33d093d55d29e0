//! Текстовая отрисовка экранов для терминального фронтенда.

use std::fmt::Write;

use crate::models::{Author, ChatState, Event, EventsState};
use crate::navigation::{Navigator, Route, Tab};

pub fn render(route: &Route, events: &EventsState, chat: &ChatState) -> String {
    match route {
        Route::Home => home(),
        Route::Events => events_list(events),
        Route::EventDetails(event) => event_details(event),
        Route::Chat => chat_screen(chat),
    }
}

pub fn home() -> String {
    [
        "Smart Companion",
        "",
        "  [events]  Browse upcoming events",
        "  [chat]    Ask the assistant",
    ]
    .join("\n")
}

pub fn events_list(state: &EventsState) -> String {
    let mut out = String::from("Upcoming events\n\n");

    if let Some(error) = &state.error {
        // ошибка показывается вместо содержимого
        out.push_str(error);
        return out;
    }
    if state.loading && state.events.is_empty() {
        out.push_str("Loading...");
        return out;
    }
    if state.events.is_empty() {
        out.push_str("No events available");
        return out;
    }

    for (index, event) in state.events.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", index + 1, event.display_title());
    }
    out.push_str("\nType a number to open an event.");
    out
}

pub fn event_details(event: &Event) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    let mut out = String::new();
    let _ = writeln!(out, "ID          : {}", field(&event.id));
    let _ = writeln!(out, "Title       : {}", event.display_title());
    let _ = writeln!(out, "Description : {}", field(&event.description));
    let _ = writeln!(out, "Date        : {}", field(&event.date));
    let _ = writeln!(out, "Location    : {}", field(&event.location));
    if let Some(image_url) = &event.image_url {
        let _ = writeln!(out, "Image       : {}", image_url);
    }
    out
}

pub fn chat_screen(state: &ChatState) -> String {
    let mut out = String::from("Assistant\nType a prompt and press Enter.\n\n");

    for entry in &state.entries {
        let who = match entry.author {
            Author::User => "you",
            Author::Assistant => "ai",
            Author::Error => "error",
        };
        let _ = writeln!(out, "[{}] {}: {}", entry.at.format("%H:%M"), who, entry.text);
    }
    if state.pending > 0 {
        out.push_str("...\n");
    }
    out
}

pub fn tab_bar(navigator: &Navigator) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if navigator.is_selected(*tab) {
                format!("[*{}]", tab.label())
            } else {
                format!("[ {}]", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
