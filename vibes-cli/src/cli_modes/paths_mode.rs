use super::{CliModeResult, Context};
use anyhow::Result;
use vibes_core::Config;

pub fn paths_mode(ctx: &Context) -> Result<CliModeResult> {
    for path in Config::config_file_paths() {
        let state = if path.exists() { "found" } else { "missing" };
        ctx.renderer
            .print_info(&format!("config ({state}): {}", path.display()));
    }
    ctx.renderer
        .print_info(&format!("session: {}", ctx.sessions.path().display()));
    ctx.renderer
        .print_info(&format!("backend: {}", ctx.config.api_base_url));
    Ok(CliModeResult::Finish)
}
