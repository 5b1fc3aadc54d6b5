// Command-line options. The two flags are the whole configuration surface:
// the parsed `Options` value is handed to the publisher by the caller and is
// never stored globally.
use std::ffi::OsString;

use clap::{CommandFactory, Parser, error::ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pubsub-cat", override_usage = "pubsub-cat [OPTIONS]")]
pub struct Options {
    /// GCP Project ID
    #[arg(short = 'p', long = "project")]
    pub project: String,

    /// PUB/SUB Topic
    #[arg(short = 't', long = "topic")]
    pub topic: String,
}

/// Parse options from an argument list (the first item is the binary name).
/// `--help` comes back as an error too, so the caller treats it like any
/// other argument failure.
pub fn parse<I, T>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Options::try_parse_from(args)
}

/// Text printed to stdout when parsing fails: the error first, then the
/// full help. A help request renders the help once.
pub fn usage_message(err: &clap::Error) -> String {
    let help = Options::command().render_help().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => help,
        _ => format!("{}\n{}", err.render(), help),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_flags() {
        let short = parse(["pubsub-cat", "-p", "my-project", "-t", "events"]).expect("short flags");
        let long = parse(["pubsub-cat", "--project", "my-project", "--topic", "events"]).expect("long flags");

        assert_eq!(short, long);
        assert_eq!(short.project, "my-project");
        assert_eq!(short.topic, "events");
    }

    #[test]
    fn missing_topic_is_an_error() {
        let err = parse(["pubsub-cat", "-p", "my-project"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_project_is_an_error() {
        let err = parse(["pubsub-cat", "--topic", "events"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse(["pubsub-cat", "-p", "x", "-t", "y", "--batch"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_reported_as_an_error() {
        let err = parse(["pubsub-cat", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let text = usage_message(&err);
        assert!(text.contains("pubsub-cat [OPTIONS]"));
        assert_eq!(text.matches("Usage:").count(), 1, "help printed once");
    }

    #[test]
    fn usage_message_has_error_then_help() {
        let err = parse(["pubsub-cat"]).unwrap_err();
        let text = usage_message(&err);

        let error_at = text.find("required arguments were not provided").expect("error text");
        let help_at = text.find("GCP Project ID").expect("help text");
        assert!(error_at < help_at);
        assert!(text.contains("--topic"));
    }
}
