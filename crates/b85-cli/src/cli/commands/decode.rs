use crate::cli::args::DecodeArgs;
use crate::exit_codes::{DATA_ERROR, SUCCESS};
use crate::fs::{read_input, write_output};
use tracing::debug;

pub fn run(args: DecodeArgs) -> anyhow::Result<i32> {
    let mut text = read_input(args.input.as_deref())?;

    if args.ignore_whitespace {
        text.retain(|byte| !byte.is_ascii_whitespace());
    } else {
        // Tolerate the single trailing newline that `encode` itself emits;
        // everything else is the codec's strict business.
        if text.ends_with(b"\n") {
            text.pop();
        }
        if text.ends_with(b"\r") {
            text.pop();
        }
    }
    debug!(symbols = text.len(), "decoding");

    let payload = match b85_core::decode(&text) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(DATA_ERROR);
        }
    };

    write_output(args.output.as_deref(), &payload)?;
    Ok(SUCCESS)
}
