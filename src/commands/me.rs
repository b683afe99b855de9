use super::client;
use crate::libs::view::View;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let (_, client) = client()?;
    let user = client.current_user().await?;
    View::user(&user)
}
