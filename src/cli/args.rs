//! Command-line argument parsing for newsdeck.
//!
//! Flags are parsed by hand; unknown flags are ignored.

use crate::error::DeckError;
use crate::state::ViewId;

/// Settings the command line may override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--url <base>`
    pub base_url: Option<String>,
    /// `--cancel-stale`
    pub cancel_stale: bool,
    /// `--view <chat|feed|settings>`
    pub initial_view: Option<ViewId>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use newsdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["newsdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, DeckError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        // --flag=value form
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--cancel-stale" => overrides.cancel_stale = true,
            "--url" => {
                let value = value_for(&flag, inline, &mut args)?;
                overrides.base_url = Some(value);
            }
            "--view" => {
                let value = value_for(&flag, inline, &mut args)?;
                let view = value.parse::<ViewId>().map_err(DeckError::Config)?;
                overrides.initial_view = Some(view);
            }
            _ => {}
        }
    }
    Ok(CliCommand::RunTui(overrides))
}

fn value_for<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, DeckError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .filter(|v| !v.is_empty() && !v.starts_with("--"))
        .ok_or_else(|| DeckError::Config(format!("{} requires a value", flag)))
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "newsdeck {}\n\
         Terminal client for the news agent service.\n\n\
         USAGE:\n    newsdeck [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --url <BASE>        Agent service URL (env: NEWSDECK_URL)\n\
         \x20   --view <VIEW>       Initial view: chat, feed or settings\n\
         \x20   --cancel-stale      Drop loads for views you leave (env: NEWSDECK_CANCEL_STALE)\n\
         \x20   -V, --version       Print version\n\
         \x20   -h, --help          Print this help\n",
        super::VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, DeckError> {
        let mut all = vec!["newsdeck".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            CliCommand::RunTui(CliOverrides::default())
        );
    }

    #[test]
    fn test_parse_overrides() {
        let command = parse(&["--url", "http://agent:9000", "--view=feed", "--cancel-stale"]).unwrap();
        assert_eq!(
            command,
            CliCommand::RunTui(CliOverrides {
                base_url: Some("http://agent:9000".to_string()),
                cancel_stale: true,
                initial_view: Some(ViewId::Feed),
            })
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(matches!(parse(&["--url"]), Err(DeckError::Config(_))));
        assert!(matches!(parse(&["--url", "--cancel-stale"]), Err(DeckError::Config(_))));
    }

    #[test]
    fn test_parse_bad_view() {
        let err = parse(&["--view", "inbox"]).unwrap_err();
        assert!(err.to_string().contains("inbox"));
    }

    #[test]
    fn test_parse_unknown_flag_is_ignored() {
        assert_eq!(
            parse(&["--unknown"]).unwrap(),
            CliCommand::RunTui(CliOverrides::default())
        );
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage();
        for flag in ["--url", "--view", "--cancel-stale", "--version"] {
            assert!(text.contains(flag));
        }
    }
}
