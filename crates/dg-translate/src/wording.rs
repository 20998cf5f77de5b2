// SPDX-License-Identifier: MIT OR Apache-2.0

//! Detail sentences shared by every dialect's translators.
//!
//! Keeping the templates here means a new backend dialect contributes
//! only its message parsing; the client-facing wording, including the
//! singular/plural selection driven by the column count, stays
//! identical across dialects.

use crate::naming;

/// Detail for a write that referenced a missing item.
#[must_use]
pub fn unresolved_reference_detail(table: &str) -> String {
    format!(
        "The referenced '{}' item does not exist.",
        naming::normalize(table)
    )
}

/// Detail for a delete blocked by dependent items. `table` is the
/// dependent (referencing) table cited in the constraint text.
#[must_use]
pub fn dependent_item_detail(table: &str) -> String {
    format!(
        "The requested action cannot be performed because this item is \
         referenced by an existing '{}' item.",
        naming::normalize(table)
    )
}

/// Detail for a duplicate value combination on a unique column set.
///
/// `literal_value` is echoed verbatim when the diagnostic carried one;
/// otherwise the word `unknown` stands in. Exactly one column selects the
/// singular phrasing.
#[must_use]
pub fn non_unique_values_detail(
    literal_value: Option<&str>,
    columns: &[String],
    table: &str,
) -> String {
    debug_assert!(!columns.is_empty(), "wording requires at least one column");

    let value = literal_value.unwrap_or("unknown");
    let table = naming::normalize(table);
    let properties = naming::join_quoted(columns.iter().map(|c| naming::normalize(c)));

    if columns.len() == 1 {
        format!("The value {value} supplied for property {properties} of entity '{table}' is not unique.")
    } else {
        format!("The values {value} supplied for properties {properties} of entity '{table}' are not unique.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_reference_normalizes_table() {
        assert_eq!(
            unresolved_reference_detail("edfi.AddressType"),
            "The referenced 'addressType' item does not exist."
        );
    }

    #[test]
    fn dependent_item_normalizes_table() {
        assert_eq!(
            dependent_item_detail("edfi.DisciplineAction"),
            "The requested action cannot be performed because this item is \
             referenced by an existing 'disciplineAction' item."
        );
    }

    #[test]
    fn single_column_uses_singular_wording() {
        let detail =
            non_unique_values_detail(None, &["Column1".to_string()], "SomeTableName");
        assert_eq!(
            detail,
            "The value unknown supplied for property 'column1' of entity 'someTableName' is not unique."
        );
    }

    #[test]
    fn multiple_columns_use_plural_wording() {
        let detail = non_unique_values_detail(
            None,
            &["Column1".to_string(), "Column2".to_string()],
            "SomeTableName",
        );
        assert_eq!(
            detail,
            "The values unknown supplied for properties 'column1', 'column2' of entity 'someTableName' are not unique."
        );
    }

    #[test]
    fn literal_value_is_echoed_verbatim() {
        let detail =
            non_unique_values_detail(Some("(69)"), &["Column1".to_string()], "SomeTableName");
        assert_eq!(
            detail,
            "The value (69) supplied for property 'column1' of entity 'someTableName' is not unique."
        );
    }
}
