//! JSON output for CLI commands

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write `data` as one JSON line to `writer`
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, data: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, data)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `data` as one JSON line to stdout
pub fn write_json<T: Serialize>(data: &T) -> CliResult<()> {
    write_json_to(&mut io::stdout().lock(), data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_line_output() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &json!({"loaded": 2})).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "{\"loaded\":2}\n");
    }
}
