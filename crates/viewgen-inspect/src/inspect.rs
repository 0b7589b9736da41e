use crate::{command, prelude::*, property};

/// Inspects one type's member view and builds its generation model.
///
/// A single pass classifies members (fields feed the property builder,
/// methods feed the invalidation index and the command builder), then one
/// resolution pass finalizes each command's affecting-properties set. The
/// call owns all of its state, so concurrent inspections of different types
/// never share buffers.
#[must_use]
pub fn inspect(members: &[Member]) -> ViewModelModel {
    let mut properties = PropertyList::default();
    let mut commands = CommandList::default();
    let mut index = InvalidationIndex::default();

    for member in members {
        match member.kind {
            MemberKind::Field => {
                if let Some(property) = property::build(member) {
                    properties.0.push(property);
                }
            }
            MemberKind::Method => {
                index.scan_method(member);
                if let Some(cmd) = command::build(member) {
                    commands.0.push(cmd);
                }
            }
        }
    }

    index.resolve(&mut commands);

    ViewModelModel {
        properties,
        commands,
    }
}
