//! Minimal CSV rendering helpers for report and export output
//!
//! Spreadsheet and PDF rendering live outside this service; CSV is simple
//! enough to render in place.

/// Escape one CSV field: quote when it contains a delimiter, quote, or
/// newline, doubling any embedded quotes
pub(crate) fn escape(input: &str) -> String {
    if input.contains(',') || input.contains('"') || input.contains('\n') {
        format!("\"{}\"", input.replace('"', "\"\""))
    } else {
        input.to_string()
    }
}

/// Render one CSV row from already-stringified fields
pub(crate) fn row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_pass_through() {
        assert_eq!(escape("Engineering"), "Engineering");
    }

    #[test]
    fn test_comma_fields_are_quoted() {
        assert_eq!(escape("Sales, EMEA"), "\"Sales, EMEA\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape("the \"A\" team"), "\"the \"\"A\"\" team\"");
    }

    #[test]
    fn test_row_rendering() {
        let rendered = row(&["a".to_string(), "b,c".to_string()]);
        assert_eq!(rendered, "a,\"b,c\"");
    }
}
