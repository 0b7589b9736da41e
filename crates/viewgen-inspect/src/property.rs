use crate::{naming, prelude::*};

/// Builds the property entry for one field, if it carries the property
/// marker and a usable name resolves.
#[must_use]
pub fn build(member: &Member) -> Option<PropertyToGenerate> {
    let marker = member.first_marker(MarkerKind::Property)?;
    let name = resolve_name(marker, &member.name)?;

    let mut property =
        PropertyToGenerate::new(name, member.type_text().unwrap_or_default(), &member.name);

    for marker in member.markers_of(MarkerKind::OnChangePublishEvent) {
        if let Some(event) = build_event(marker) {
            property.events_to_publish.push(event);
        }
    }

    for marker in member.markers_of(MarkerKind::OnChangeCallMethod) {
        if let Some(call) = build_method_call(marker) {
            property.methods_to_call.push(call);
        }
    }

    Some(property)
}

/// Name resolution: named `property_name` override, else positional, else
/// convention default.
///
/// An explicit empty override invalidates the property rather than falling
/// back to convention. A non-literal override is unresolvable and ignored.
/// An empty or absent positional falls through to convention.
fn resolve_name(marker: &Marker, field_name: &str) -> Option<String> {
    if let Some(value) = marker.named("property_name").and_then(MarkerArg::value) {
        return (!value.is_empty()).then_some(value);
    }

    match marker.first_positional().and_then(MarkerArg::value) {
        Some(name) if !name.is_empty() => Some(name),
        _ => {
            let name = naming::property_name(field_name);
            (!name.is_empty()).then_some(name)
        }
    }
}

fn build_event(marker: &Marker) -> Option<EventToPublish> {
    let event_type = marker
        .first_positional()
        .and_then(MarkerArg::value)
        .filter(|s| !s.is_empty())?;

    let mut event = EventToPublish::new(event_type);
    event.constructor_args = marker
        .named("event_constructor_args")
        .and_then(MarkerArg::value);
    event.aggregator_member = marker
        .named("event_aggregator_member_name")
        .and_then(MarkerArg::value);

    Some(event)
}

fn build_method_call(marker: &Marker) -> Option<MethodToCall> {
    let method = marker
        .first_positional()
        .and_then(MarkerArg::value)
        .filter(|s| !s.is_empty())?;

    let mut call = MethodToCall::new(method);
    call.args = marker.named("method_args").and_then(MarkerArg::value);

    Some(call)
}
