use colored::*;
use serde::Serialize;
use std::io::IsTerminal;

use super::highlight::Highlighter;
use crate::error::ApiError;
use crate::models::{Session, UserIdentity};

/// Pretty-print `value` as JSON, highlighted when stdout is a terminal.
pub fn display_json<T: Serialize + ?Sized>(value: &T) {
    let rendered = match serde_json::to_string_pretty(value) {
        Ok(rendered) => rendered,
        Err(e) => {
            display_error(&format!("Could not render response: {}", e));
            return;
        }
    };

    if std::io::stdout().is_terminal() {
        println!("{}", Highlighter::new().highlight(&rendered, "json"));
    } else {
        println!("{}", rendered);
    }
}

pub fn display_success(message: &str) {
    println!("{}", message.green());
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

/// Print an API error with a hint for the next step.
pub fn display_api_error(error: &ApiError) {
    display_error(&error.to_string());
    if error.is_auth_failed() {
        eprintln!(
            "{}",
            "Session expired. Run `folio login --email <email>` to sign in again.".yellow()
        );
    }
}

pub fn display_identity(user: &UserIdentity) {
    println!("{} {}", "Email:".bold(), user.email);
    println!("{} {}", "Role:".bold(), user.role);
    println!("{} {}", "Id:".bold(), user.id.dimmed());
}

pub fn display_session(session: &Session) {
    match (&session.user, session.is_authenticated) {
        (Some(user), true) => display_identity(user),
        (None, true) => println!("{}", "Logged in (identity unknown)".yellow()),
        (_, false) => println!("{}", "Not logged in".yellow()),
    }
    if session.is_authenticated && session.access_token.is_none() {
        println!(
            "{}",
            "No access token held; one will be requested on the next call.".dimmed()
        );
    }
}
