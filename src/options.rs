//! The finalized option set handed to the dispatcher
//!
//! Built once from parsed flags plus config-file defaults, then moved
//! through the resolver to the dispatcher without further mutation.

use crate::cli::Cli;
use crate::config::NotifyConfig;

/// Sound selection for a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sound {
    /// Bare `--sound` flag: the platform default sound
    Default,
    /// A named sound, passed through to the notifier
    Named(String),
    /// `--sound none`: explicitly silence the notification
    Disabled,
}

impl Sound {
    fn from_flag(value: &str) -> Self {
        match value {
            "none" => Sound::Disabled,
            "default" => Sound::Default,
            name => Sound::Named(name.to_string()),
        }
    }
}

/// Notification parameters for a single dispatch
///
/// Absent flags stay `None`. The failsafe timer is resolver state, not a
/// field here, so it can never reach the notifier.
#[derive(Debug, Clone, Default)]
pub struct NotifyOptions {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub message: Option<String>,
    pub icon: Option<String>,
    pub sound: Option<Sound>,
    pub open: Option<String>,
    pub port: Option<String>,
    pub host: Option<String>,
}

impl NotifyOptions {
    /// Build the option set from parsed flags, filling gaps from config defaults
    pub fn from_cli(cli: &Cli, config: &NotifyConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            title: cli.title.clone().or_else(|| defaults.title.clone()),
            subtitle: cli.subtitle.clone().or_else(|| defaults.subtitle.clone()),
            message: cli.message.clone(),
            icon: cli.icon.clone().or_else(|| defaults.icon.clone()),
            sound: cli
                .sound
                .as_deref()
                .or(defaults.sound.as_deref())
                .map(Sound::from_flag),
            open: cli.open.clone(),
            port: cli.port.clone(),
            host: cli.host.clone(),
        }
    }

    /// Replace the message with piped stdin text
    ///
    /// Empty input leaves the flag message in place.
    pub fn with_piped_message(mut self, text: String) -> Self {
        if !text.is_empty() {
            self.message = Some(text);
        }
        self
    }

    /// Whether there is a non-empty message to show
    pub fn has_message(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }
}
