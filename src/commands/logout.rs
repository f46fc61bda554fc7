use crate::api::auth::TOKEN_FILE;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let token = Secret::new(TOKEN_FILE);
    tracing::debug!(path = %token.path().display(), "removing cached token");
    token.clear()?;
    msg_success!(Message::LoggedOut);

    Ok(())
}
