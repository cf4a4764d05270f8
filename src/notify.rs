//! Notification dispatch
//!
//! Thin layer over notify-rust: builds the notification from the finalized
//! options and delivers it once. An absent or empty message is a silent
//! no-op, never an error, and there are no retries.

use crate::errors::Result;
use crate::options::{NotifyOptions, Sound};
use notify_rust::Notification;

/// Action identifier invoked when the notification body is clicked
#[cfg(all(unix, not(target_os = "macos")))]
const CLICK_ACTION: &str = "default";

/// Sound played for a bare `--sound` flag
#[cfg(target_os = "macos")]
const DEFAULT_SOUND: &str = "Ping";
#[cfg(not(target_os = "macos"))]
const DEFAULT_SOUND: &str = "message-new-instant";

/// What the dispatcher did with the option set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The notification was delivered
    Sent,
    /// No message to show; the notifier was never called
    Skipped,
}

/// Dispatch a single notification
///
/// Returns `Skipped` without touching the notifier when there is no message
/// to show. Delivery runs on the blocking pool; `Notification::show` talks
/// to the platform service synchronously.
pub async fn dispatch(options: NotifyOptions) -> Result<Outcome> {
    if !options.has_message() {
        tracing::debug!("no message to show, skipping notification");
        return Ok(Outcome::Skipped);
    }

    tokio::task::spawn_blocking(move || deliver(&options)).await??;
    Ok(Outcome::Sent)
}

fn deliver(options: &NotifyOptions) -> Result<()> {
    if options.host.is_some() || options.port.is_some() {
        tracing::debug!(
            host = ?options.host,
            port = ?options.port,
            "host/port set, but the platform notifier is local-only"
        );
    }

    let notification = build(options);
    show_and_handle_click(&notification, options.open.as_deref())
}

/// Build the platform notification from the option set
fn build(options: &NotifyOptions) -> Notification {
    let mut notification = Notification::new();
    notification.appname("notify");

    if let Some(title) = &options.title {
        notification.summary(title);
    }
    if let Some(subtitle) = &options.subtitle {
        notification.subtitle(subtitle);
    }
    if let Some(message) = &options.message {
        notification.body(message);
    }
    if let Some(icon) = &options.icon {
        notification.icon(icon);
    }

    match &options.sound {
        Some(Sound::Named(name)) => {
            notification.sound_name(name);
        }
        Some(Sound::Default) => {
            notification.sound_name(DEFAULT_SOUND);
        }
        Some(Sound::Disabled) => suppress_sound(&mut notification),
        None => {}
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    if options.open.is_some() {
        notification.action(CLICK_ACTION, "Open");
    }

    notification
}

#[cfg(all(unix, not(target_os = "macos")))]
fn suppress_sound(notification: &mut Notification) {
    notification.hint(notify_rust::Hint::SuppressSound(true));
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn suppress_sound(_notification: &mut Notification) {
    // no sound name set is already silent outside XDG desktops
}

/// Show the notification; on XDG desktops a click opens the `--open` URL
#[cfg(all(unix, not(target_os = "macos")))]
fn show_and_handle_click(notification: &Notification, open: Option<&str>) -> Result<()> {
    let handle = notification.show()?;

    if let Some(url) = open {
        let url = url.to_string();
        handle.wait_for_action(move |action| {
            if action == CLICK_ACTION {
                if let Err(e) = std::process::Command::new("xdg-open").arg(&url).spawn() {
                    tracing::warn!("failed to open {}: {}", url, e);
                }
            }
        });
    }

    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show_and_handle_click(notification: &Notification, open: Option<&str>) -> Result<()> {
    if open.is_some() {
        tracing::debug!("click-to-open is only supported on XDG desktops");
    }
    notification.show()?;
    Ok(())
}
