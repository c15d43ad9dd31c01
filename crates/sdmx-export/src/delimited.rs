//! Delimited-text (CSV) export of code records.

use sdmx_model::CodeRecord;

use crate::error::Result;
use crate::latin1::encode_latin1;

/// Column headers of the delimited export, in output order.
pub const COLUMN_HEADERS: [&str; 3] = ["Code ID", "Name (en)", "Name (fr)"];

/// Placeholder rendered when a record has no name in a requested language.
pub const MISSING_NAME: &str = "N/A";

pub(crate) const ENGLISH: &str = "en";
pub(crate) const FRENCH: &str = "fr";

/// Render records as an ISO-8859-1 encoded CSV table.
///
/// One header row, then one row per record in sequence order. Fields are
/// transcoded to Latin-1 before they reach the writer, so quoting and
/// escaping apply to the bytes that actually land in the output. An empty
/// record sequence yields a header-only table.
pub fn to_delimited_text(records: &[CodeRecord]) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut data);
        writer.write_record(COLUMN_HEADERS.map(encode_latin1))?;
        for record in records {
            writer.write_record([
                encode_latin1(&record.id),
                encode_latin1(record.names.get(ENGLISH).unwrap_or(MISSING_NAME)),
                encode_latin1(record.names.get(FRENCH).unwrap_or(MISSING_NAME)),
            ])?;
        }
        writer.flush()?;
    }

    tracing::debug!(
        records = records.len(),
        bytes = data.len(),
        "encoded delimited text export"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, names: &[(&str, &str)]) -> CodeRecord {
        CodeRecord {
            id: id.to_string(),
            names: names.iter().copied().collect(),
        }
    }

    #[test]
    fn two_records_render_three_lines() {
        let records = vec![
            record("F", &[("en", "Female"), ("fr", "Femme")]),
            record("M", &[("en", "Male"), ("fr", "Homme")]),
        ];
        let data = to_delimited_text(&records).expect("export");
        let text = String::from_utf8(data).expect("ascii output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            ["Code ID,Name (en),Name (fr)", "F,Female,Femme", "M,Male,Homme"]
        );
    }

    #[test]
    fn missing_language_renders_placeholder() {
        let records = vec![record("U", &[("fr", "Inconnu")])];
        let data = to_delimited_text(&records).expect("export");
        let text = String::from_utf8(data).expect("ascii output");
        assert_eq!(text.lines().nth(1), Some("U,N/A,Inconnu"));
    }

    #[test]
    fn diacritics_come_out_as_latin1_bytes() {
        let records = vec![record("REU", &[("fr", "Réunion")])];
        let data = to_delimited_text(&records).expect("export");
        let row = data.split(|&b| b == b'\n').nth(1).expect("data row");
        assert_eq!(row, b"REU,N/A,R\xE9union");
    }

    #[test]
    fn fields_containing_the_delimiter_are_quoted() {
        let records = vec![record("X", &[("en", "One, two")])];
        let data = to_delimited_text(&records).expect("export");
        let text = String::from_utf8(data).expect("ascii output");
        assert_eq!(text.lines().nth(1), Some(r#"X,"One, two",N/A"#));
    }

    #[test]
    fn empty_sequence_is_header_only() {
        let data = to_delimited_text(&[]).expect("export");
        let text = String::from_utf8(data).expect("ascii output");
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.lines().next(), Some("Code ID,Name (en),Name (fr)"));
    }
}
