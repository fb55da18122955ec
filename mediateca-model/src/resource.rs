use crate::ids::EntityId;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// Common surface every managed catalog record exposes to the generic CRUD
/// machinery.
///
/// All five kinds behave identically at the protocol level and differ only in
/// field shape, so the controller and gateway are written once against this
/// trait and instantiated per kind.
pub trait CatalogResource:
    Clone + Debug + Send + Sync + DeserializeOwned + 'static
{
    /// Editable request shape sent on create and update. Never carries an id
    /// or server timestamps.
    type Draft: Clone + Debug + Serialize + Send + Sync + 'static;

    /// Resource segment under `/api/v1/`.
    const ROUTE: &'static str;

    /// Human-readable kind name used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    /// Label shown in lists and reference dropdowns.
    fn display_name(&self) -> &str;

    /// Copy the editable fields into a scratch draft for an edit session.
    fn to_draft(&self) -> Self::Draft;

    /// Create-mode defaults: empty strings, cleared flags, today's date for
    /// date fields.
    fn default_draft() -> Self::Draft;
}
