use crate::cli::args::EncodeArgs;
use crate::exit_codes::{DATA_ERROR, SUCCESS};
use crate::fs::{read_input, write_output};
use tracing::debug;

pub fn run(args: EncodeArgs) -> anyhow::Result<i32> {
    let payload = read_input(args.input.as_deref())?;
    debug!(bytes = payload.len(), "read encode input");

    let text = match b85_core::encode(&payload) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(DATA_ERROR);
        }
    };

    let mut rendered = if args.wrap > 0 {
        wrap(&text, args.wrap)
    } else {
        text
    };
    rendered.push('\n');
    write_output(args.output.as_deref(), rendered.as_bytes())?;

    Ok(SUCCESS)
}

/// Inserts a newline every `columns` symbols. The last line is not terminated;
/// the caller appends the final newline.
fn wrap(text: &str, columns: usize) -> String {
    let mut wrapped = String::with_capacity(text.len() + text.len() / columns);
    for (i, symbol) in text.chars().enumerate() {
        if i > 0 && i % columns == 0 {
            wrapped.push('\n');
        }
        wrapped.push(symbol);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn test_wrap_columns() {
        assert_eq!(wrap("0000000000", 5), "00000\n00000");
        assert_eq!(wrap("000000000000", 5), "00000\n00000\n00");
        assert_eq!(wrap("00000", 5), "00000");
        assert_eq!(wrap("", 5), "");
    }
}
