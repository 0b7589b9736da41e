use crate::prelude::*;
use derive_more::{Deref, DerefMut, IntoIterator};

///
/// PropertyList
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
pub struct PropertyList(pub Vec<PropertyToGenerate>);

impl PropertyList {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyToGenerate> {
        self.0.iter().find(|p| p.name == name)
    }
}

///
/// PropertyToGenerate
///
/// One property the emission layer must generate from an annotated backing
/// field, with its on-change hooks in declaration order. Immutable once built.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PropertyToGenerate {
    pub name: String,

    /// Rendered declared type of the backing field, opaque to this phase.
    pub ty: String,

    pub backing_field: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events_to_publish: Vec<EventToPublish>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods_to_call: Vec<MethodToCall>,
}

impl PropertyToGenerate {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        backing_field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            backing_field: backing_field.into(),
            events_to_publish: Vec::new(),
            methods_to_call: Vec::new(),
        }
    }
}

impl ValidateNode for PropertyToGenerate {
    fn validate(&self) -> Result<(), NodeError> {
        if self.name.is_empty() {
            return Err(NodeError::EmptyPropertyName(self.backing_field.clone()));
        }

        Ok(())
    }
}
