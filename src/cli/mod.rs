//! CLI module for zoneblog.
//!
//! Every command is checked against the route guards before it runs, then
//! drives the same view models a graphical front end would.
//!
//! # Usage
//!
//! ```ignore
//! use zoneblog::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(&client, command, &mut std::io::stdout()).await?;
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use std::io::Write;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;

use crate::client::BlogClient;
use crate::media::SelectedFile;
use crate::routes::{GuardOutcome, Route};
use crate::view::{MediaStage, ViewState};
use output::{format_comment, format_post, format_user};

/// The hint printed when a guard turns a command away.
pub fn redirect_hint(target: &Route) -> String {
    match target {
        Route::Login | Route::Register => {
            "Not logged in. Run `zoneblog login <email> <password>` first.".to_string()
        }
        _ => "Already logged in. Run `zoneblog logout` first.".to_string(),
    }
}

/// Run a parsed command, writing its output to `out`.
///
/// Errors carry the message to show; the binary exits non-zero on them.
pub async fn run_cli_command<W: Write>(client: &BlogClient, command: CliCommand, out: &mut W) -> Result<()> {
    if let Some(route) = command.route() {
        if let GuardOutcome::Redirect(target) = client.router().resolve(&route) {
            return Err(eyre!(redirect_hint(&target)));
        }
    }

    match command {
        CliCommand::Version => writeln!(out, "{}", version_line())?,
        CliCommand::Help => writeln!(out, "{}", USAGE)?,
        CliCommand::Invalid(problem) => return Err(eyre!("{}\n\n{}", problem, USAGE)),

        CliCommand::Login { email, password } => {
            let mut form = client.login_form();
            form.email = email;
            form.password = password;
            if form.submit().await.is_none() {
                return Err(eyre!(form.error().unwrap_or("Login failed").to_string()));
            }
            write_signed_in(client, out)?;
        }
        CliCommand::Register { name, email, password } => {
            let mut form = client.register_form();
            form.name = name;
            form.email = email;
            form.password = password;
            if form.submit().await.is_none() {
                return Err(eyre!(form.error().unwrap_or("Registration failed").to_string()));
            }
            write_signed_in(client, out)?;
        }
        CliCommand::Logout => {
            client.layout().logout();
            writeln!(out, "Logged out")?;
        }
        CliCommand::Whoami => match client.session().current_session() {
            Some(session) => match session.user {
                Some(user) => writeln!(out, "{}", format_user(&user))?,
                None => writeln!(out, "Logged in (user details unavailable)")?,
            },
            None => writeln!(out, "Not logged in")?,
        },

        CliCommand::Feed => {
            let mut feed = client.feed_view();
            feed.load().await;
            match feed.state() {
                ViewState::Ready(posts) if posts.is_empty() => writeln!(out, "No posts yet")?,
                ViewState::Ready(posts) => {
                    for post in posts {
                        writeln!(out, "{}\n", format_post(post))?;
                    }
                }
                ViewState::Error(message) => return Err(eyre!(message.clone())),
                ViewState::Loading => {}
            }
        }
        CliCommand::Profile { user_id } => {
            let mut profile = client.profile_view(&user_id);
            profile.load().await;
            match profile.user() {
                ViewState::Ready(user) => {
                    writeln!(out, "{}", format_user(user))?;
                    if profile.is_own_profile() {
                        writeln!(out, "  (this is you)")?;
                    }
                }
                ViewState::Error(message) => return Err(eyre!(message.clone())),
                ViewState::Loading => {}
            }
            writeln!(out)?;
            for post in profile.posts() {
                writeln!(out, "{}\n", format_post(post))?;
            }
        }
        CliCommand::Post {
            title,
            description,
            file,
        } => {
            let mut form = client.create_post_form();
            form.title = title;
            form.description = description;
            if let Some(path) = file {
                let selected = SelectedFile::from_path(&path)
                    .await
                    .wrap_err_with(|| format!("Could not read {}", path.display()))?;
                if !form.select_file(selected).await {
                    return Err(eyre!(form.error().unwrap_or("Invalid file").to_string()));
                }
            }
            let Some(outcome) = form.publish().await else {
                return Err(eyre!(form.error().unwrap_or("Failed to create post").to_string()));
            };
            writeln!(out, "Created post {}", outcome.post.id)?;
            match &outcome.media {
                MediaStage::Skipped => {}
                MediaStage::Uploaded(_) => writeln!(out, "Media attached")?,
                MediaStage::Failed(_) => writeln!(out, "Media upload failed; the post was created without it")?,
            }
        }
        CliCommand::Like { post_id } => {
            let result = client
                .posts()
                .toggle_like(&post_id)
                .await
                .map_err(|e| eyre!(e.message_or("Failed to toggle like")))?;
            let verb = if result.liked { "Liked" } else { "Unliked" };
            writeln!(out, "{} post {} ({} likes)", verb, post_id, result.like_count)?;
        }
        CliCommand::Delete { post_id } => {
            client
                .posts()
                .delete_post(&post_id)
                .await
                .map_err(|e| eyre!(e.message_or("Failed to delete post")))?;
            writeln!(out, "Deleted post {}", post_id)?;
        }
        CliCommand::Follow { user_id } => {
            let mut profile = client.profile_view(&user_id);
            profile.load().await;
            if let Some(message) = profile.user().error() {
                return Err(eyre!(message.to_string()));
            }
            if !profile.toggle_follow().await {
                return Err(eyre!("Failed to update subscription"));
            }
            if let Some(user) = profile.user().data() {
                let verb = if user.is_followed_by_current_user {
                    "Following"
                } else {
                    "Unfollowed"
                };
                writeln!(out, "{} {} ({} followers)", verb, user.name, user.followers_count)?;
            }
        }
        CliCommand::Report { user_id, reason } => {
            let mut profile = client.profile_view(&user_id);
            profile.open_report();
            if !profile.report(&reason).await {
                return Err(eyre!(profile.report_error().unwrap_or("Failed to submit report").to_string()));
            }
            writeln!(out, "Report submitted for user {}", user_id)?;
        }
        CliCommand::Comments { post_id } => {
            let comments = client
                .comments()
                .list(&post_id)
                .await
                .map_err(|e| eyre!(e.message_or("Failed to load comments")))?;
            if comments.is_empty() {
                writeln!(out, "No comments yet")?;
            }
            for comment in &comments {
                writeln!(out, "{}", format_comment(comment))?;
            }
        }
        CliCommand::Comment { post_id, text } => {
            let comment = client
                .comments()
                .create(&post_id, &text)
                .await
                .map_err(|e| eyre!(e.message_or("Failed to add comment")))?;
            writeln!(out, "{}", format_comment(&comment))?;
        }
    }
    Ok(())
}

fn write_signed_in<W: Write>(client: &BlogClient, out: &mut W) -> Result<()> {
    match client.layout().current_user() {
        Some(user) => writeln!(out, "Logged in as {} <{}>", user.name, user.email)?,
        None => writeln!(out, "Logged in")?,
    }
    Ok(())
}
