use std::io::Write;

use anyhow::{Context, Result};

use super::model::MovieRecord;

/// Write movies as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: W, movies: &[&MovieRecord]) -> Result<()> {
    serde_json::to_writer_pretty(writer, movies).context("serialising movies to JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::movie;
    use serde_json::Value as JsonValue;

    #[test]
    fn exports_records_as_array() {
        let heat = movie("Heat", &["Crime", "Drama"], 1995, 8.3);
        let mut buf = Vec::new();
        write_json(&mut buf, &[&heat]).unwrap();

        let parsed: JsonValue = serde_json::from_slice(&buf).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["title"], "Heat");
        assert_eq!(arr[0]["released_year"], 1995);
        assert_eq!(arr[0]["genres"][1], "Drama");
        assert_eq!(arr[0]["stars"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn empty_result_is_empty_array() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]");
    }
}
