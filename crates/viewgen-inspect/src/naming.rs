//! Convention-based property naming.

/// Derives the default public property name from a backing field identifier.
///
/// Strips exactly one leading `_`, else exactly one leading `m_`, then
/// uppercases the first character of the remainder. The rest of the
/// remainder is kept unchanged.
#[must_use]
pub fn property_name(field_name: &str) -> String {
    let stripped = field_name
        .strip_prefix('_')
        .or_else(|| field_name.strip_prefix("m_"))
        .unwrap_or(field_name);

    let mut chars = stripped.chars();

    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut name: String = first.to_uppercase().collect();
            name.push_str(chars.as_str());
            name
        }
    }
}
