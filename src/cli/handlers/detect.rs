use crate::cli::args::DetectArgs;
use crate::cli::config::read_text;
use phrase_share::detect_format;

pub fn handle(args: DetectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_text(args.file.as_ref())?;
    let kind = detect_format(&input)?;
    println!("{}", kind);
    Ok(())
}
