// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are mapped to top-level messages here;
//! scroll events come from the scrollable's own callback.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Frame interval of the scroll animation (about 60 fps).
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Routes window resizes and uncaptured Escape presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a frame tick subscription while a scroll animation is running.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
