use crate::prelude::*;

///
/// EventToPublish
///
/// An event published through the aggregator whenever the owning property's
/// value changes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventToPublish {
    /// Name of the event type to construct and publish.
    pub event_type: String,

    /// Verbatim constructor argument text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor_args: Option<String>,

    /// Overrides the member the aggregator is reached through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator_member: Option<String>,
}

impl EventToPublish {
    #[must_use]
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            constructor_args: None,
            aggregator_member: None,
        }
    }
}

impl ValidateNode for EventToPublish {}
