mod cli;

use phrase_share::{CodecNotFoundError, DecodeError};

fn main() {
    if let Err(e) = cli::run() {
        // These render their own multi-line diagnostic with an error header
        if e.is::<DecodeError>() || e.is::<CodecNotFoundError>() {
            eprintln!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
