use crate::prelude::*;
use derive_more::{Deref, DerefMut, IntoIterator};

///
/// CommandList
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
pub struct CommandList(pub Vec<CommandToGenerate>);

impl CommandList {
    #[must_use]
    pub fn get(&self, generated_name: &str) -> Option<&CommandToGenerate> {
        self.0.iter().find(|c| c.generated_name == generated_name)
    }
}

///
/// CommandToGenerate
///
/// One command the emission layer must generate from an annotated method.
/// `can_execute_affecting_properties` is empty until the invalidation
/// resolution pass runs; afterwards the node is final.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CommandToGenerate {
    /// The annotated method the command executes.
    pub source_method: String,

    pub generated_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_execute_method: Option<String>,

    /// Properties whose mutation re-evaluates this command's availability.
    /// Ordered, duplicate-free.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub can_execute_affecting_properties: Vec<String>,
}

impl CommandToGenerate {
    #[must_use]
    pub fn new(source_method: impl Into<String>, generated_name: impl Into<String>) -> Self {
        Self {
            source_method: source_method.into(),
            generated_name: generated_name.into(),
            can_execute_method: None,
            can_execute_affecting_properties: Vec::new(),
        }
    }
}

impl ValidateNode for CommandToGenerate {
    fn validate(&self) -> Result<(), NodeError> {
        if self.generated_name.is_empty() {
            return Err(NodeError::EmptyCommandName(self.source_method.clone()));
        }

        Ok(())
    }
}
