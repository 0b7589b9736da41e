use crate::prelude::*;
use std::collections::HashMap;

///
/// InvalidationIndex
///
/// First pass over methods: which property mutations each method declared as
/// refreshing command availability. Entries are created lazily on first
/// sight of an invalidate marker; per-method lists keep declaration order
/// and never hold duplicates.
///

#[derive(Debug, Default)]
pub struct InvalidationIndex {
    entries: HashMap<String, Vec<String>>,
}

impl InvalidationIndex {
    /// Records every invalidate marker on one method.
    ///
    /// Targets are forward references to properties this same pass
    /// generates, so they resolve via source text. An unresolvable or empty
    /// target drops that one declaration and nothing else.
    pub fn scan_method(&mut self, member: &Member) {
        for marker in member.markers_of(MarkerKind::CommandInvalidate) {
            let entry = self.entries.entry(member.name.clone()).or_default();

            let Some(name) = marker
                .first_positional()
                .map(MarkerArg::source_text)
                .filter(|s| !s.is_empty())
            else {
                continue;
            };

            if !entry.contains(&name) {
                entry.push(name);
            }
        }
    }

    #[must_use]
    pub fn get(&self, method: &str) -> Option<&[String]> {
        self.entries.get(method).map(Vec::as_slice)
    }

    /// Second pass: finalizes every command's affecting-properties set from
    /// the index. Runs once, after all members are scanned.
    pub fn resolve(&self, commands: &mut CommandList) {
        for command in &mut commands.0 {
            command.can_execute_affecting_properties = self.affecting_properties(command);
        }
    }

    /// Ordered union of the execute-method list and the can-execute-method
    /// list, first-seen order, deduplicated. Methods absent from the index
    /// contribute nothing; a command may validly end up with an empty set.
    #[must_use]
    pub fn affecting_properties(&self, command: &CommandToGenerate) -> Vec<String> {
        let mut properties = Vec::new();

        self.append_for_method(&command.source_method, &mut properties);
        if let Some(can_execute) = &command.can_execute_method {
            self.append_for_method(can_execute, &mut properties);
        }

        properties
    }

    fn append_for_method(&self, method: &str, properties: &mut Vec<String>) {
        let Some(names) = self.get(method) else {
            return;
        };

        for name in names {
            if !properties.contains(name) {
                properties.push(name.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn method_with(name: &str, attrs: Vec<syn::Attribute>) -> Member {
        let markers = attrs
            .iter()
            .map(|attr| {
                Marker::from_attribute(attr)
                    .expect("marker should parse")
                    .expect("marker should be recognized")
            })
            .collect();

        Member::method(name, markers)
    }

    #[test]
    fn duplicate_declarations_collapse() {
        let mut index = InvalidationIndex::default();
        index.scan_method(&method_with(
            "Save",
            vec![
                parse_quote!(#[command_invalidate(FirstName)]),
                parse_quote!(#[command_invalidate(FirstName)]),
            ],
        ));

        assert_eq!(index.get("Save"), Some(&["FirstName".to_string()][..]));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mut index = InvalidationIndex::default();
        index.scan_method(&method_with(
            "Save",
            vec![
                parse_quote!(#[command_invalidate(LastName)]),
                parse_quote!(#[command_invalidate(FirstName)]),
            ],
        ));

        let names = index.get("Save").expect("entry for Save");
        assert_eq!(names, ["LastName".to_string(), "FirstName".to_string()]);
    }

    #[test]
    fn unresolvable_target_drops_that_declaration_only() {
        let mut index = InvalidationIndex::default();
        index.scan_method(&method_with(
            "Save",
            vec![
                parse_quote!(#[command_invalidate("")]),
                parse_quote!(#[command_invalidate(FirstName)]),
            ],
        ));

        assert_eq!(index.get("Save"), Some(&["FirstName".to_string()][..]));
    }

    #[test]
    fn union_is_execute_then_can_execute_first_seen() {
        let mut index = InvalidationIndex::default();
        index.scan_method(&method_with(
            "Save",
            vec![
                parse_quote!(#[command_invalidate(FirstName)]),
                parse_quote!(#[command_invalidate(LastName)]),
            ],
        ));
        index.scan_method(&method_with(
            "CanSave",
            vec![
                parse_quote!(#[command_invalidate(LastName)]),
                parse_quote!(#[command_invalidate(Email)]),
            ],
        ));

        let mut command = CommandToGenerate::new("Save", "SaveCommand");
        command.can_execute_method = Some("CanSave".to_string());

        assert_eq!(
            index.affecting_properties(&command),
            ["FirstName", "LastName", "Email"]
        );
    }

    #[test]
    fn methods_absent_from_index_yield_an_empty_set() {
        let index = InvalidationIndex::default();
        let command = CommandToGenerate::new("Save", "SaveCommand");

        assert!(index.affecting_properties(&command).is_empty());
    }
}
