use crate::prelude::*;

///
/// MethodToCall
///
/// A method invoked whenever the owning property's value changes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MethodToCall {
    pub method: String,

    /// Verbatim call argument text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

impl MethodToCall {
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: None,
        }
    }
}

impl ValidateNode for MethodToCall {}
