//! Form-input validation shared by every creation and edit form.
//!
//! Values are checked positionally so the UI can mark the exact inputs
//! that need filling.

/// Indices of empty or whitespace-only entries. Empty result means valid.
pub fn find_flaws(values: &[String]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn has_flaws(values: &[String]) -> bool {
    !find_flaws(values).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_filled_reports_nothing() {
        assert!(find_flaws(&values(&["a", "b", "c"])).is_empty());
        assert!(!has_flaws(&values(&["a", "b"])));
    }

    #[test]
    fn test_flaw_indices_match_empty_positions() {
        let flaws = find_flaws(&values(&["", "ok", " ", "ok", "\t"]));
        assert_eq!(flaws, vec![0, 2, 4]);
    }

    #[test]
    fn test_whitespace_only_counts_as_flaw() {
        assert!(has_flaws(&values(&["filled", "   "])));
    }

    #[test]
    fn test_empty_form_is_all_flaws() {
        assert_eq!(find_flaws(&values(&["", ""])), vec![0, 1]);
    }
}
