use crate::cli::args::DecodeArgs;
use crate::cli::config::{read_text, resolve_codec, write_output};
use phrase_share::detect_format;

pub fn handle(args: DecodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input_text = read_text(args.file.as_ref())?;

    let kind = match &args.codec {
        Some(name) => resolve_codec(name)?,
        None => detect_format(&input_text)?,
    };
    tracing::debug!(codec = %kind, "Decoding");

    let data = phrase_share::decode(&input_text, kind)?;
    write_output(args.output.as_ref(), &data)
}
