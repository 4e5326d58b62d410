use crate::cli::args::ShareArgs;
use crate::cli::config::{read_text, resolve_codec, write_line};
use phrase_share::{DialogNode, ShareSettings, build_share_code_with};

pub fn handle(args: ShareArgs, settings: &ShareSettings) -> Result<(), Box<dyn std::error::Error>> {
    let kind = match &args.codec {
        Some(name) => resolve_codec(name)?,
        None => settings.default_codec,
    };

    let text = read_text(args.file.as_ref())?;
    let dialogs: Vec<DialogNode> = serde_json::from_str(&text)
        .map_err(|e| format!("Input is not a dialog list: {}", e))?;

    let code = build_share_code_with(&dialogs, kind, settings)?;
    write_line(args.output.as_ref(), &code)
}
