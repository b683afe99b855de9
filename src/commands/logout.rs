use super::client;
use crate::{libs::messages::Message, msg_success, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let (_, mut client) = client()?;
    // The local token is gone even when the server call fails.
    if let Err(e) = client.logout().await {
        msg_warning!(e);
    }
    msg_success!(Message::LoggedOut);
    Ok(())
}
