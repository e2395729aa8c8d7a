//! Merge extracted acronyms with a supplied table.

use std::collections::BTreeSet;

use tracing::debug;

use acrofilter_shared::AcronymTable;

/// Build the output table for the `valid` acronyms.
///
/// Every valid acronym maps to `""` unless `supplied` has an entry for it, in
/// which case the supplied expansion wins. Acronyms that appear only in
/// `supplied` are left out.
pub fn merge(valid: &BTreeSet<String>, supplied: Option<&AcronymTable>) -> AcronymTable {
    let mut table = AcronymTable::from_keys(valid.iter().cloned());

    if let Some(supplied) = supplied {
        table.overlay_from(supplied);
        debug!(
            valid = valid.len(),
            supplied = supplied.len(),
            expanded = table.expanded_count(),
            "supplied expansions merged"
        );
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_supplied_table_leaves_all_empty() {
        let table = merge(&valid_set(&["GNC", "IMU", "ACS-2"]), None);
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|(_, expansion)| expansion.is_empty()));
    }

    #[test]
    fn supplied_values_overlay_extracted_keys() {
        let mut supplied = AcronymTable::new();
        supplied.insert("GNC", "Guidance, Navigation, and Control");
        supplied.insert("XYZ", "Unused");

        let table = merge(&valid_set(&["GNC", "IMU", "ACS-2"]), Some(&supplied));

        let rows: Vec<_> = table.iter().collect();
        assert_eq!(
            rows,
            vec![
                ("ACS-2", ""),
                ("GNC", "Guidance, Navigation, and Control"),
                ("IMU", ""),
            ]
        );
    }

    #[test]
    fn supplied_empty_expansion_stays_empty() {
        let mut supplied = AcronymTable::new();
        supplied.insert("IMU", "");

        let table = merge(&valid_set(&["IMU"]), Some(&supplied));
        assert_eq!(table.get("IMU"), Some(""));
    }

    #[test]
    fn output_keys_equal_valid_set() {
        let valid = valid_set(&["AB", "CD"]);
        let supplied: AcronymTable = [("CD", "Cee Dee"), ("EF", "Ee Ef")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let table = merge(&valid, Some(&supplied));
        let keys: BTreeSet<String> = table.keys().map(String::from).collect();
        assert_eq!(keys, valid);
        for key in &valid {
            let expected = supplied.get(key).unwrap_or("");
            assert_eq!(table.get(key), Some(expected));
        }
    }
}
