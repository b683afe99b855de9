use super::client;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long, help = "Username, prompted for when omitted")]
    username: Option<String>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let username = match login_args.username {
        Some(username) => username,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let (_, mut client) = client()?;
    let auth = client.login(&username, &password).await?;
    msg_success!(Message::LoginSuccess(auth.user.username));
    Ok(())
}
