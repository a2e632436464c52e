use super::input_utils::prompt;
use super::{CliModeResult, Context};
use anyhow::{Result, bail};
use vibes_core::ApiClient;

pub async fn register_mode(
    ctx: &Context,
    username: &str,
    email: &str,
    password: Option<&str>,
) -> Result<CliModeResult> {
    let password = resolve_password(password)?;
    let client = ApiClient::new(&ctx.config)?;
    client.register(username.trim(), email.trim(), &password).await?;
    ctx.renderer.print_info(&format!(
        "Account created for {}. Log in with `vibes login --email {}`.",
        username.trim(),
        email.trim()
    ));
    Ok(CliModeResult::Finish)
}

pub async fn login_mode(ctx: &Context, email: &str, password: Option<&str>) -> Result<CliModeResult> {
    let password = resolve_password(password)?;
    let mut client = ApiClient::new(&ctx.config)?;
    let session = client.login(email.trim(), &password).await?;
    ctx.sessions.save(&session)?;
    ctx.renderer
        .print_info(&format!("Logged in as {}.", session.username));
    Ok(CliModeResult::Finish)
}

pub fn logout_mode(ctx: &Context) -> Result<CliModeResult> {
    if ctx.sessions.load()?.is_none() {
        ctx.renderer.print_info("You are not logged in.");
        return Ok(CliModeResult::NothingToDo);
    }
    ctx.sessions.clear()?;
    ctx.renderer.print_info("Logged out.");
    Ok(CliModeResult::Finish)
}

fn resolve_password(password: Option<&str>) -> Result<String> {
    let password = match password {
        Some(password) => password.to_string(),
        None => prompt("Password:")?,
    };
    if password.is_empty() {
        bail!("a password is required");
    }
    Ok(password)
}
