//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the FlexChill
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait, translates Zellij events into library events and executes the
//! returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the screen
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys to library events, delegate to `handle_event`
//! 4. **Render**: Lay out for the pane size, then draw the frame
//!
//! A failed build is kept as an error and every render draws the unavailable
//! message instead of the screen.
//!
//! # Keybindings
//!
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Select row
//! - `PageDown`/`Space`: Scroll down
//! - `PageUp`: Scroll up
//! - `q`/`Esc`: Close plugin
//!
//! Outside wasm the binary is a preview: it builds the screen from the bundled
//! data and prints one frame to stdout.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use flexchill::ui::ListModel as _;
#[cfg(target_family = "wasm")]
use flexchill::{handle_event, Action, Config, Event, ScreenError, ScreenState, Theme};
#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper.
///
/// Holds either the built screen or the error that prevented building it,
/// plus the theme used to draw that error.
#[cfg(target_family = "wasm")]
#[derive(Default)]
struct State {
    screen: Option<ScreenState>,
    error: Option<ScreenError>,
    theme: Theme,
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        flexchill::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.theme = flexchill::resolve_theme(&config);
        match flexchill::initialize(&config) {
            Ok(state) => {
                tracing::debug!(rows = state.list.count(), "screen built");
                self.screen = Some(state);
            }
            Err(e) => {
                tracing::error!(error = %e, "screen unavailable");
                self.error = Some(e);
            }
        }

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::ChangeApplicationState]);

        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("permissions denied - hiding the plugin is unavailable");
                return false;
            }
            _ => return false,
        };

        let Some(state) = self.screen.as_mut() else {
            if our_event == Event::CloseFocus {
                Self::execute_action(&Action::CloseFocus);
            }
            return false;
        };

        match handle_event(state, &our_event) {
            Ok((should_render, actions)) => {
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        match (self.screen.as_mut(), &self.error) {
            (Some(state), _) => {
                if let Err(e) = handle_event(state, &Event::Resize { rows, cols }) {
                    tracing::warn!(error = %e, "layout failed");
                }
                flexchill::ui::render(state, rows, cols);
            }
            (None, Some(error)) => {
                flexchill::ui::render_unavailable(error, &self.theme, rows, cols);
            }
            (None, None) => {}
        }
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::SelectRow,
            BareKey::PageDown | BareKey::Char(' ') => Event::ScrollDown,
            BareKey::PageUp => Event::ScrollUp,
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() -> std::process::ExitCode {
    use flexchill::{handle_event, initialize, Config, Event};
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let mut args = std::env::args().skip(1);
    let cols = args.next().and_then(|s| s.parse().ok()).unwrap_or(80);
    let rows = args.next().and_then(|s| s.parse().ok()).unwrap_or(48);

    let config = Config::default();
    match initialize(&config) {
        Ok(mut state) => {
            if let Err(e) = handle_event(&mut state, &Event::Resize { rows, cols }) {
                tracing::error!(error = %e, "layout failed");
                return std::process::ExitCode::FAILURE;
            }
            println!("{}", flexchill::ui::compose_frame(&state).text());
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            let theme = flexchill::resolve_theme(&config);
            let frame = flexchill::ui::compose_unavailable(&e, &theme, rows, cols);
            println!("{}", frame.text());
            std::process::ExitCode::FAILURE
        }
    }
}
