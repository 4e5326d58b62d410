use crate::cli::args::EncodeArgs;
use crate::cli::config::{read_input, resolve_codec, write_line};

pub fn handle(args: EncodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let kind = resolve_codec(&args.codec)?;
    let data = read_input(args.file.as_ref())?;
    let encoded = phrase_share::encode(&data, kind);
    write_line(args.output.as_ref(), &encoded)
}
