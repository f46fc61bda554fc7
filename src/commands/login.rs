use crate::api::{AuthApi, Session};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(short, long)]
    email: Option<String>,
}

pub async fn cmd(args: LoginArgs) -> Result<()> {
    let server = Config::read()?.server()?;
    let auth = AuthApi::new(&server)?.with_email(args.email.clone());

    // A fresh login replaces whatever token was cached.
    auth.logout()?;
    let response = auth.sign_in().await?;

    let email = response
        .user
        .and_then(|user| user.email)
        .or(args.email)
        .unwrap_or_else(|| "your account".to_string());
    msg_success!(Message::LoggedIn(email));
    Ok(())
}
