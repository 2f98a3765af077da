//! Language preference.

use anyhow::Result;
use dineat_commerce::site::LanguagePreference;

use super::LangArgs;
use crate::context::Context;

/// Run the lang command.
pub async fn run(args: LangArgs, ctx: &Context) -> Result<()> {
    let prefs = LanguagePreference::new(&ctx.storage, &ctx.output);

    let language = match args.code {
        Some(code) => prefs.switch_language(&code)?,
        None => prefs.saved_language(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "language": language,
            "tamil_font": language.uses_tamil_font(),
        }));
    } else {
        ctx.output.kv("language", language.display_name());
    }
    Ok(())
}
