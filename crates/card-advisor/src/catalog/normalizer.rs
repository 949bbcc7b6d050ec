const PLACEHOLDERS: &[&str] = &["nan", "n/a", "na", "none", "null", "-"];

/// Clean a free-text cell: invisible characters removed, whitespace collapsed, and empty or
/// placeholder values read as absent.
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    let value = value?;
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() || PLACEHOLDERS.contains(&collapsed.to_ascii_lowercase().as_str()) {
        None
    } else {
        Some(collapsed)
    }
}

/// Header names from spreadsheet exports often carry a BOM or stray spaces.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_strips_bom() {
        let source = Some("\u{feff}5%  cashback on   fuel ".to_string());
        assert_eq!(
            normalize_text(source).as_deref(),
            Some("5% cashback on fuel")
        );
    }

    #[test]
    fn placeholders_read_as_absent() {
        assert_eq!(normalize_text(Some("  ".to_string())), None);
        assert_eq!(normalize_text(Some("NaN".to_string())), None);
        assert_eq!(normalize_text(Some("N/A".to_string())), None);
        assert_eq!(normalize_text(None), None);
    }

    #[test]
    fn header_cleanup_keeps_case() {
        assert_eq!(normalize_header("\u{feff}Bank  Name "), "Bank Name");
    }
}
