use super::{CliModeResult, Context};
use anyhow::Result;

/// Prints the accent color of one image as JSON.
pub async fn color_mode(ctx: &Context, image: &str) -> Result<CliModeResult> {
    let extractor = ctx.extractor()?;
    let color = extractor.extract(image.trim()).await;
    println!("{}", serde_json::to_string_pretty(&color)?);
    Ok(CliModeResult::Finish)
}
