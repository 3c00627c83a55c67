//! Auth commands - login, register, logout, whoami

use crate::cli::{progress, style};
use classtrack::auth::{self, StoredSession};
use classtrack::error::{Error, Result};
use classtrack::types::Role;
use dialoguer::{Input, Password};

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::Io(std::io::Error::other(err.to_string()))
}

fn prompt_text(label: &str) -> Result<String> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_password() -> Result<String> {
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)
}

/// Run `auth login`
pub async fn run_login(api_url: &str, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => prompt_text("Email")?,
    };
    let password = prompt_password()?;

    let spinner = progress::spinner("Signing in...");
    let result = auth::login(api_url, &email, &password).await;
    spinner.finish_and_clear();

    let (token, user) = result?;
    auth::save_session(&StoredSession {
        token,
        user: user.clone(),
    })?;

    println!(
        "{} Logged in as {} ({})",
        style::check(),
        style::emphasis(&user.name),
        user.role
    );
    Ok(())
}

/// Run `auth register`
pub async fn run_register(
    api_url: &str,
    name: Option<String>,
    email: Option<String>,
    role: Role,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_text("Name")?,
    };
    let email = match email {
        Some(email) => email,
        None => prompt_text("Email")?,
    };
    let password = prompt_password()?;

    let spinner = progress::spinner("Creating account...");
    let result = auth::register(api_url, &name, &email, &password, role).await;
    spinner.finish_and_clear();

    let (token, user) = result?;
    auth::save_session(&StoredSession {
        token,
        user: user.clone(),
    })?;

    println!(
        "{} Registered {} as {}",
        style::check(),
        style::emphasis(&user.name),
        user.role
    );
    Ok(())
}

/// Run `auth logout`
pub fn run_logout() -> Result<()> {
    if auth::delete_session()? {
        println!("Logged out");
    } else {
        println!("No stored session");
    }
    Ok(())
}

/// Run `auth whoami`
pub async fn run_whoami(api_url: &str) -> Result<()> {
    let credentials = auth::resolve_credentials()?;

    let spinner = progress::spinner("Checking credentials...");
    let result = auth::whoami(api_url, &credentials).await;
    spinner.finish_and_clear();

    let user = result?;
    println!("Authenticated as: {} <{}>", user.name, user.email);
    println!("Role: {}", user.role);
    println!("Token source: {:?}", credentials.source);
    Ok(())
}
