use crate::prelude::*;

/// Builds the command entry for one method, if it carries the command
/// marker.
///
/// The generated name defaults to `<MethodName>Command` and the can-execute
/// method to the marker's positional argument; `command_name` and
/// `can_execute_method` named arguments override each independently.
#[must_use]
pub fn build(member: &Member) -> Option<CommandToGenerate> {
    let marker = member.first_marker(MarkerKind::Command)?;

    let generated_name = marker
        .named("command_name")
        .and_then(MarkerArg::value)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("{}Command", member.name));

    let can_execute_method = marker
        .named("can_execute_method")
        .and_then(MarkerArg::value)
        .or_else(|| marker.first_positional().and_then(MarkerArg::value))
        .filter(|s| !s.is_empty());

    let mut command = CommandToGenerate::new(&member.name, generated_name);
    command.can_execute_method = can_execute_method;

    Some(command)
}
