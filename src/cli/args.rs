//! Command-line argument parsing for the zoneblog CLI.

use std::path::PathBuf;

use crate::routes::Route;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    Logout,
    /// Show who is logged in
    Whoami,
    /// List the feed
    Feed,
    Profile { user_id: String },
    Post {
        title: String,
        description: String,
        file: Option<PathBuf>,
    },
    Like { post_id: String },
    Delete { post_id: String },
    /// Follow, or unfollow when already following
    Follow { user_id: String },
    /// Report a user to the moderators
    Report { user_id: String, reason: String },
    Comments { post_id: String },
    Comment { post_id: String, text: String },
    /// Arguments that do not form a command; holds the problem
    Invalid(String),
}

impl CliCommand {
    /// The screen this command acts on, for the guards.
    ///
    /// `None` means the command runs with or without a session.
    pub fn route(&self) -> Option<Route> {
        match self {
            CliCommand::Login { .. } => Some(Route::Login),
            CliCommand::Register { .. } => Some(Route::Register),
            CliCommand::Feed
            | CliCommand::Like { .. }
            | CliCommand::Delete { .. }
            | CliCommand::Comments { .. }
            | CliCommand::Comment { .. } => Some(Route::Home),
            CliCommand::Profile { user_id }
            | CliCommand::Follow { user_id }
            | CliCommand::Report { user_id, .. } => Some(Route::Profile(user_id.clone())),
            CliCommand::Post { .. } => Some(Route::CreatePost),
            CliCommand::Version
            | CliCommand::Help
            | CliCommand::Logout
            | CliCommand::Whoami
            | CliCommand::Invalid(_) => None,
        }
    }
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: zoneblog <command> [args]

Commands:
  login <email> <password>
  register <name> <email> <password>
  logout
  whoami
  feed
  profile <user-id>
  post <title> <description> [--file <path>]
  like <post-id>
  delete <post-id>
  follow <user-id>
  report <user-id> <reason>
  comments <post-id>
  comment <post-id> <text>

Options:
  -h, --help       Show this help
  -V, --version    Show version

Environment:
  ZONEBLOG_API_URL  Server origin (default http://localhost:8080)
  ZONEBLOG_HOME     Session directory (default ~/.zoneblog)
  ZONEBLOG_LOG      Log filter (default warn)";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use zoneblog::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["zoneblog".to_string(), "like".to_string(), "p-1".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Like { post_id: "p-1".to_string() }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match command.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "login" => match rest {
            [email, password] => CliCommand::Login {
                email: email.clone(),
                password: password.clone(),
            },
            _ => usage_error("login <email> <password>"),
        },
        "register" => match rest {
            [name, email, password] => CliCommand::Register {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
            },
            _ => usage_error("register <name> <email> <password>"),
        },
        "logout" if rest.is_empty() => CliCommand::Logout,
        "whoami" if rest.is_empty() => CliCommand::Whoami,
        "feed" if rest.is_empty() => CliCommand::Feed,
        "profile" => one_id(rest, "profile <user-id>", |user_id| CliCommand::Profile { user_id }),
        "like" => one_id(rest, "like <post-id>", |post_id| CliCommand::Like { post_id }),
        "delete" => one_id(rest, "delete <post-id>", |post_id| CliCommand::Delete { post_id }),
        "follow" => one_id(rest, "follow <user-id>", |user_id| CliCommand::Follow { user_id }),
        "comments" => one_id(rest, "comments <post-id>", |post_id| CliCommand::Comments { post_id }),
        "report" => match rest {
            [user_id, reason @ ..] if !reason.is_empty() => CliCommand::Report {
                user_id: user_id.clone(),
                reason: reason.join(" "),
            },
            _ => usage_error("report <user-id> <reason>"),
        },
        "comment" => match rest {
            [post_id, text] => CliCommand::Comment {
                post_id: post_id.clone(),
                text: text.clone(),
            },
            _ => usage_error("comment <post-id> <text>"),
        },
        "post" => parse_post(rest),
        "logout" | "whoami" | "feed" => CliCommand::Invalid(format!("'{}' takes no arguments", command)),
        other => CliCommand::Invalid(format!("unknown command '{}'", other)),
    }
}

fn usage_error(expected: &str) -> CliCommand {
    CliCommand::Invalid(format!("usage: zoneblog {}", expected))
}

fn one_id(rest: &[String], expected: &str, build: impl FnOnce(String) -> CliCommand) -> CliCommand {
    match rest {
        [id] => build(id.clone()),
        _ => usage_error(expected),
    }
}

fn parse_post(rest: &[String]) -> CliCommand {
    const EXPECTED: &str = "post <title> <description> [--file <path>]";
    let mut positional = Vec::new();
    let mut file = None;
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        if arg == "--file" || arg == "-f" {
            match iter.next() {
                Some(path) => file = Some(PathBuf::from(path)),
                None => return usage_error(EXPECTED),
            }
        } else {
            positional.push(arg.clone());
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([title, description]) => CliCommand::Post {
            title,
            description,
            file,
        },
        Err(_) => usage_error(EXPECTED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["zoneblog".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args_is_help() {
        assert_eq!(parse(&[]), CliCommand::Help);
        assert_eq!(parse(&["--help"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_login_and_register() {
        assert_eq!(
            parse(&["login", "ada@example.com", "pw"]),
            CliCommand::Login {
                email: "ada@example.com".to_string(),
                password: "pw".to_string()
            }
        );
        assert_eq!(
            parse(&["register", "Ada Lovelace", "ada@example.com", "pw"]),
            CliCommand::Register {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "pw".to_string()
            }
        );
        assert!(matches!(parse(&["login", "ada@example.com"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_post_with_and_without_file() {
        assert_eq!(
            parse(&["post", "Title", "Body"]),
            CliCommand::Post {
                title: "Title".to_string(),
                description: "Body".to_string(),
                file: None
            }
        );
        assert_eq!(
            parse(&["post", "--file", "cat.png", "Title", "Body"]),
            CliCommand::Post {
                title: "Title".to_string(),
                description: "Body".to_string(),
                file: Some(PathBuf::from("cat.png"))
            }
        );
        assert!(matches!(parse(&["post", "Title", "Body", "--file"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["post", "Title"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(parse(&["delete", "p-1"]), CliCommand::Delete { post_id: "p-1".to_string() });
        assert_eq!(parse(&["follow", "u-2"]), CliCommand::Follow { user_id: "u-2".to_string() });
        assert_eq!(
            parse(&["comment", "p-1", "Nice"]),
            CliCommand::Comment {
                post_id: "p-1".to_string(),
                text: "Nice".to_string()
            }
        );
        assert!(matches!(parse(&["like"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_report_joins_reason() {
        assert_eq!(
            parse(&["report", "u-2", "posts", "spam", "links"]),
            CliCommand::Report {
                user_id: "u-2".to_string(),
                reason: "posts spam links".to_string()
            }
        );
        assert!(matches!(parse(&["report", "u-2"]), CliCommand::Invalid(_)));
        assert_eq!(
            parse(&["report", "u-2", "spam"]).route(),
            Some(Route::Profile("u-2".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_and_extra_args() {
        assert_eq!(parse(&["frobnicate"]), CliCommand::Invalid("unknown command 'frobnicate'".to_string()));
        assert!(matches!(parse(&["feed", "extra"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_routes() {
        assert_eq!(parse(&["feed"]).route(), Some(Route::Home));
        assert_eq!(parse(&["login", "a", "b"]).route(), Some(Route::Login));
        assert_eq!(parse(&["profile", "u-1"]).route(), Some(Route::Profile("u-1".to_string())));
        assert_eq!(parse(&["post", "t", "d"]).route(), Some(Route::CreatePost));
        assert_eq!(parse(&["logout"]).route(), None);
    }
}
