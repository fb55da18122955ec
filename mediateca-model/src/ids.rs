use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Opaque, server-assigned identifier for catalog records.
///
/// The backend owns id assignment; the client never mints one. Ids arriving
/// over the wire are accepted verbatim, so a malformed record can carry an
/// empty id. Callers that construct ids locally go through [`EntityId::new`],
/// which rejects the empty string.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidId(
                "entity id cannot be empty".to_string(),
            ));
        }
        Ok(EntityId(id))
    }

    /// Accept a wire id without validation.
    pub fn from_wire(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An unassigned reference slot serializes as the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_and_whitespace_ids() {
        assert!(EntityId::new("").is_err());
        assert!(EntityId::new("   ").is_err());
        assert!(EntityId::new("66f2a1c9e4b0d8a1b2c3d4e5").is_ok());
    }

    #[test]
    fn wire_ids_pass_through_verbatim() {
        let id = EntityId::from_wire("");
        assert!(id.is_empty());
        assert_eq!(id.as_str(), "");
    }
}
