use crate::api::AuthApi;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name; prompted for when omitted
    #[arg(short, long)]
    name: Option<String>,
    /// Account email; prompted for when omitted
    #[arg(short, long)]
    email: Option<String>,
}

pub async fn cmd(args: RegisterArgs) -> Result<()> {
    let server = Config::read()?.server()?;
    let theme = ColorfulTheme::default();

    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptName.to_string())
            .interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&theme)
        .with_prompt(Message::PromptPassword.to_string())
        .with_confirmation(
            Message::PromptPasswordConfirm.to_string(),
            Message::PasswordMismatch.to_string(),
        )
        .interact()?;

    if name.trim().is_empty() || email.trim().is_empty() {
        msg_bail_anyhow!(Message::RegisterFailed("name and email are required".to_string()));
    }

    AuthApi::new(&server)?
        .register_and_store(name.trim(), email.trim(), &password)
        .await
        .map_err(|e| msg_error_anyhow!(Message::RegisterFailed(e.to_string())))?;

    msg_success!(Message::Registered(email.trim().to_string()));
    Ok(())
}
