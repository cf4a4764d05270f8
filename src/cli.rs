//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros. The raw argument list
//! is filtered against the flag table first, so unrecognized flags are
//! ignored rather than rejected and stray options in a pipeline never block
//! the notification.

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

const EXAMPLES: &str = "\
Examples:
  notify -t \"Hello\" -m \"My Message\" -s --open https://github.com
  notify -t \"Agent Coulson\" --icon https://example.com/coulson.jpg
  notify -m \"My Message\" -s Glass
  echo \"My Message\" | notify -t \"Hello\"";

/// Flags that take a value, long and short forms
const VALUE_FLAGS: &[&str] = &[
    "--title",
    "-t",
    "--subtitle",
    "--st",
    "--message",
    "-m",
    "--icon",
    "-i",
    "--sound",
    "-s",
    "--open",
    "-o",
    "--port",
    "-p",
    "--failsafe",
    "-x",
    "--host",
    "--completions",
];

/// Flags that stand alone
const UNARY_FLAGS: &[&str] = &["--help", "-h", "--version", "-V"];

/// Desktop notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "notify")]
#[command(version, about, after_help = EXAMPLES)]
#[command(ignore_errors = true)]
pub struct Cli {
    /// Notification title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Notification subtitle
    #[arg(long, visible_alias = "st")]
    pub subtitle: Option<String>,

    /// Notification body (piped stdin overrides this)
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Icon path or URL
    #[arg(short = 'i', long, env = "NOTIFY_ICON")]
    pub icon: Option<String>,

    /// Sound name; bare flag plays the default sound, "none" disables
    #[arg(
        short = 's',
        long,
        env = "NOTIFY_SOUND",
        num_args = 0..=1,
        default_missing_value = "default",
        value_name = "NAME"
    )]
    pub sound: Option<String>,

    /// URL to open when the notification is clicked
    #[arg(short = 'o', long, value_name = "URL")]
    pub open: Option<String>,

    /// Remote notifier port
    #[arg(short = 'p', long)]
    pub port: Option<String>,

    /// Dispatch after this many milliseconds even if stdin never closes
    #[arg(short = 'x', long, value_name = "MS")]
    pub failsafe: Option<u64>,

    /// Remote notifier host
    #[arg(long)]
    pub host: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Filter the raw argument list down to recognized flags
///
/// An unrecognized flag is dropped together with its detached value; bare
/// positionals are dropped too, since nothing in the flag table consumes
/// them. What remains is handed to clap untouched.
pub fn recognized_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter().peekable();
    let mut kept: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(name) = flag_name(&arg) else {
            // bare positionals: nothing in the table consumes them
            continue;
        };
        let unary = UNARY_FLAGS.contains(&name);
        let known = unary || VALUE_FLAGS.contains(&name);

        // a detached value belongs to the flag before it, known or not
        let detached_value = if !unary && args.peek().is_some_and(|next| !next.starts_with('-')) {
            args.next()
        } else {
            None
        };

        if known {
            kept.push(arg);
            kept.extend(detached_value);
        }
    }

    kept
}

/// The flag portion of a token: a long name up to `=`, or a short's first
/// two characters. `None` for anything that is not a flag.
fn flag_name(token: &str) -> Option<&str> {
    if let Some(rest) = token.strip_prefix("--") {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find('=').unwrap_or(rest.len());
        Some(&token[..2 + end])
    } else if token.len() >= 2 && token.starts_with('-') {
        if token.as_bytes()[1].is_ascii_digit() {
            // a negative number is a value, not a flag
            return None;
        }
        Some(&token[..2])
    } else {
        None
    }
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "notify", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let filtered = recognized_args(args.iter().map(|s| s.to_string()));
        Cli::try_parse_from(filtered).unwrap()
    }

    #[test]
    fn short_aliases_map_to_long_names() {
        let cli = parse(&[
            "notify", "-t", "Hello", "-m", "My Message", "-i", "icon.png", "-o",
            "https://github.com", "-p", "23053", "-x", "5000",
        ]);
        assert_eq!(cli.title.as_deref(), Some("Hello"));
        assert_eq!(cli.message.as_deref(), Some("My Message"));
        assert_eq!(cli.icon.as_deref(), Some("icon.png"));
        assert_eq!(cli.open.as_deref(), Some("https://github.com"));
        assert_eq!(cli.port.as_deref(), Some("23053"));
        assert_eq!(cli.failsafe, Some(5000));
    }

    #[test]
    fn subtitle_accepts_st_alias() {
        let cli = parse(&["notify", "--st", "from your terminal"]);
        assert_eq!(cli.subtitle.as_deref(), Some("from your terminal"));
    }

    #[test]
    fn bare_sound_flag_requests_default_sound() {
        let cli = parse(&["notify", "-s"]);
        assert_eq!(cli.sound.as_deref(), Some("default"));
    }

    #[test]
    fn sound_takes_a_name() {
        let cli = parse(&["notify", "-s", "Glass"]);
        assert_eq!(cli.sound.as_deref(), Some("Glass"));
    }

    #[test]
    fn sound_does_not_swallow_following_flags() {
        let cli = parse(&["notify", "-s", "--open", "https://github.com"]);
        assert_eq!(cli.sound.as_deref(), Some("default"));
        assert_eq!(cli.open.as_deref(), Some("https://github.com"));
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let cli = parse(&["notify", "--frobnicate", "-t", "Hello", "--blink"]);
        assert_eq!(cli.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn unknown_flag_takes_its_value_with_it() {
        let cli = parse(&["notify", "--frobnicate", "7", "-m", "hi"]);
        assert_eq!(cli.message.as_deref(), Some("hi"));
    }

    #[test]
    fn bare_positionals_are_dropped() {
        let cli = parse(&["notify", "stray", "-t", "Hello"]);
        assert_eq!(cli.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn long_flags_with_equals_survive_the_filter() {
        let cli = parse(&["notify", "--title=Hello", "--sound=none"]);
        assert_eq!(cli.title.as_deref(), Some("Hello"));
        assert_eq!(cli.sound.as_deref(), Some("none"));
    }

    #[test]
    fn host_has_no_short_flag() {
        let cli = parse(&["notify", "--host", "example.org"]);
        assert_eq!(cli.host.as_deref(), Some("example.org"));
    }
}
