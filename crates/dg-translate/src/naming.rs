// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier normalization for client-facing wording.
//!
//! Backend diagnostics cite schema-qualified, PascalCased identifiers
//! (`edfi.AddressType`). Client wording uses the bare entity/property
//! form: schema prefix stripped, first character lowercased, everything
//! else untouched (`addressType`).

/// Drop everything up to and including the last `.`.
#[must_use]
pub fn strip_schema(identifier: &str) -> &str {
    identifier
        .rsplit_once('.')
        .map_or(identifier, |(_, name)| name)
}

/// Lowercase only the first character, preserving the rest verbatim.
#[must_use]
pub fn camel_case(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Schema-stripped, camel-cased form of `identifier`.
#[must_use]
pub fn normalize(identifier: &str) -> String {
    camel_case(strip_schema(identifier))
}

/// Render identifiers as `'a', 'b', 'c'`.
#[must_use]
pub fn join_quoted<I, S>(identifiers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, identifier) in identifiers.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        out.push_str(identifier.as_ref());
        out.push('\'');
    }
    out
}
