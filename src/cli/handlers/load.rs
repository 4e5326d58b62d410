use crate::cli::args::LoadArgs;
use crate::cli::config::{read_text, write_line};
use phrase_share::load_from_share_code;
use serde_json::Value;

pub fn handle(args: LoadArgs) -> Result<(), Box<dyn std::error::Error>> {
    let code = read_text(args.file.as_ref())?;
    let nodes = Value::Array(load_from_share_code(&code)?);

    let json = if args.pretty {
        serde_json::to_string_pretty(&nodes)?
    } else {
        serde_json::to_string(&nodes)?
    };
    write_line(args.output.as_ref(), &json)
}
