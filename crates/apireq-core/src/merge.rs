//! Last-write-wins merging of name/value pairs

use std::collections::HashMap;

/// Header or parameter map
pub type Fields = HashMap<String, String>;

/// Apply `pairs` to `target` left to right.
///
/// A later pair replaces an earlier one with the same name, and every pair
/// replaces whatever `target` already held under that name.
pub fn merge_pairs<I, K, V>(target: &mut Fields, pairs: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    for (name, value) in pairs {
        target.insert(name.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_duplicate_wins() {
        let mut fields = Fields::new();
        merge_pairs(&mut fields, [("X", "1"), ("X", "2")]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["X"], "2");
    }

    #[test]
    fn test_overrides_existing_entry() {
        let mut fields = Fields::new();
        fields.insert("Accept".to_string(), "text/plain".to_string());
        fields.insert("Keep".to_string(), "me".to_string());

        merge_pairs(&mut fields, vec![("Accept".to_string(), "application/json".to_string())]);

        assert_eq!(fields["Accept"], "application/json");
        assert_eq!(fields["Keep"], "me");
    }

    #[test]
    fn test_empty_sequence_is_noop() {
        let mut fields = Fields::new();
        fields.insert("A".to_string(), "1".to_string());
        merge_pairs(&mut fields, Vec::<(String, String)>::new());
        assert_eq!(fields.len(), 1);
    }
}
