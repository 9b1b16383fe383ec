//! Command handlers for the `backpack` CLI.
//!
//! Each handler runs one API operation and prints the result as pretty JSON.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use backpack_client::api::{self, types::UpdateUserSettings, ApiClient};
use backpack_client::ConfigError;

use crate::cli::{AppsCommand, Command};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

/// Log in with a password so the session cookie is available to the command.
pub async fn login(client: &ApiClient, auth: &str, password: &str) -> Result<(), CommandError> {
    log::info!("Logging in as {}", auth);
    let user = api::password_login(client, auth, password).await?;
    log::info!("Logged in as {} ({})", user.username, user.id);
    Ok(())
}

/// Dispatch one CLI command.
pub async fn run(client: &ApiClient, command: Command) -> Result<(), CommandError> {
    match command {
        Command::Info => print(&api::get_app_info(client).await?),
        Command::Whoami => print(&api::get_user_data(client).await?),
        Command::Register {
            username,
            email,
            password,
            registration_key,
        } => {
            let user = api::user_create(
                client,
                &username,
                &email,
                &password,
                registration_key.as_deref(),
            )
            .await?;
            log::info!("Created account {}", user.id);
            print(&user)
        }
        Command::Settings {
            email,
            username,
            new_password,
            current_password,
        } => {
            let settings = UpdateUserSettings {
                email,
                username,
                new_password,
            };
            if settings == UpdateUserSettings::default() {
                return Err(CommandError::Usage(
                    "nothing to update: pass --email, --username or --new-password".to_string(),
                ));
            }
            print(&api::update_settings(client, &settings, &current_password).await?)
        }
        Command::Verify { code } => {
            let resp = api::verify(client, &code).await?;
            println!("{}", resp.message);
            Ok(())
        }
        Command::ResendCode => {
            let resp = api::resend_code(client).await?;
            println!("{}", resp.message);
            Ok(())
        }
        Command::Usage => {
            let usage = api::get_usage(client).await?;
            println!("{}", usage);
            Ok(())
        }
        Command::Upload { path, content_type } => upload(client, &path, content_type).await,
        Command::Search { page, query } => {
            print(&api::search_files(client, page, query.as_deref()).await?)
        }
        Command::File { id } => print(&api::get_file(client, &id).await?),
        Command::Delete { id } => {
            api::delete_file(client, &id).await?;
            log::info!("Deleted file {}", id);
            Ok(())
        }
        Command::Logout => {
            api::logout(client).await?;
            log::info!("Logged out");
            Ok(())
        }
        Command::Apps(apps) => run_apps(client, apps).await,
    }
}

async fn run_apps(client: &ApiClient, command: AppsCommand) -> Result<(), CommandError> {
    match command {
        AppsCommand::List => print(&api::get_all_applications(client).await?),
        AppsCommand::Get { id } => print(&api::get_application(client, &id).await?),
        AppsCommand::Create { name } => print(&api::application_create(client, &name).await?),
        AppsCommand::Delete { id } => {
            api::delete_application(client, &id).await?;
            log::info!("Deleted application {}", id);
            Ok(())
        }
        AppsCommand::Token { id } => {
            let token = api::get_application_token(client, &id).await?;
            println!("{}", token);
            Ok(())
        }
    }
}

async fn upload(
    client: &ApiClient,
    path: &Path,
    content_type: Option<String>,
) -> Result<(), CommandError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CommandError::Usage(format!("not a file path: {}", path.display())))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CommandError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

    let content_type = content_type.unwrap_or_else(|| guess_content_type(path));
    log::info!(
        "Uploading {} ({} bytes, {})",
        file_name,
        bytes.len(),
        content_type
    );

    let file = api::upload_file(client, file_name, bytes, &content_type).await?;
    print(&file)
}

/// Content type from the file extension, `application/octet-stream` if unknown.
pub fn guess_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn print<T: Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
