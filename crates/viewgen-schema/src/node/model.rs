use crate::prelude::*;

///
/// ViewModelModel
///
/// The complete inspection result for one type: the two ordered collections
/// handed to the emission layer. Uniqueness of generated names is enforced
/// there, not here.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ViewModelModel {
    pub properties: PropertyList,
    pub commands: CommandList,
}

impl ViewModelModel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.commands.is_empty()
    }
}

impl ValidateNode for ViewModelModel {
    fn validate(&self) -> Result<(), NodeError> {
        for property in &self.properties.0 {
            property.validate()?;
        }
        for command in &self.commands.0 {
            command.validate()?;
        }

        Ok(())
    }
}
