//! Generic entity CRUD controller.
//!
//! One instance per entity kind owns a local mirror of that kind's remote
//! collection plus at most one in-progress edit, and keeps the mirror
//! consistent after create/update/delete without a full reload. All five
//! catalog screens are instantiations of this one type; they differ only in
//! field shape.

use std::sync::Arc;

use mediateca_model::{CatalogResource, EntityId};

use crate::error::{CrudError, CrudResult};
use crate::gateway::Gateway;

/// The controller's record of which entity, if any, is being modified.
///
/// A scratch draft cannot survive without its bound id or vice versa: the two
/// live in the same variant.
#[derive(Debug, Clone)]
pub enum EditSession<T: CatalogResource> {
    /// Create mode. The scratch draft starts from kind defaults.
    Idle { draft: T::Draft },
    /// Edit mode, bound to exactly one entity's id.
    Editing { id: EntityId, draft: T::Draft },
}

impl<T: CatalogResource> EditSession<T> {
    fn idle() -> Self {
        EditSession::Idle {
            draft: T::default_draft(),
        }
    }
}

/// Owns one entity kind's collection and edit session and reconciles both
/// with the remote store through a [`Gateway`].
///
/// Failed operations leave the collection and session exactly as they were
/// before the attempt; the only recovery is re-invoking the same intent.
pub struct EntityController<T: CatalogResource> {
    gateway: Arc<dyn Gateway<T>>,
    collection: Vec<T>,
    session: EditSession<T>,
}

impl<T: CatalogResource> EntityController<T> {
    pub fn new(gateway: Arc<dyn Gateway<T>>) -> Self {
        Self {
            gateway,
            collection: Vec::new(),
            session: EditSession::idle(),
        }
    }

    /// Fetch the full collection and replace the local mirror with it.
    ///
    /// Full replace, not an incremental merge: the backend has no
    /// delta/versioning protocol. On failure the existing mirror is kept.
    pub async fn load(&mut self) -> CrudResult<()> {
        match self.gateway.list().await {
            Ok(records) => {
                log::debug!("[{}] loaded {} records", T::KIND, records.len());
                self.collection = records;
                Ok(())
            }
            Err(err) => {
                log::error!("Error fetching {} collection: {err:#}", T::KIND);
                Err(CrudError::FetchFailed(err.to_string()))
            }
        }
    }

    /// Reset the session to create mode with kind-default scratch fields.
    pub fn begin_create(&mut self) {
        self.session = EditSession::idle();
    }

    /// Bind the session to `id` and copy that entity's fields into the
    /// scratch draft.
    ///
    /// Starting a new edit silently discards any unsaved scratch changes;
    /// single-session exclusivity, not a locking mechanism.
    pub fn begin_edit(&mut self, id: &EntityId) -> CrudResult<()> {
        let Some(entity) = self.collection.iter().find(|e| e.id() == id) else {
            return Err(CrudError::NotFound {
                kind: T::KIND.to_string(),
                id: id.to_string(),
            });
        };
        self.session = EditSession::Editing {
            id: id.clone(),
            draft: entity.to_draft(),
        };
        Ok(())
    }

    /// Send the scratch draft to the backend: POST in create mode, PUT keyed
    /// by the session id in edit mode.
    ///
    /// On success the confirmed entity is reconciled into the mirror (append
    /// for create, in-place replace for update) and the session resets to
    /// create-mode defaults. On failure both are untouched.
    pub async fn submit(&mut self) -> CrudResult<()> {
        match self.session.clone() {
            EditSession::Idle { draft } => {
                let created = self.gateway.create(&draft).await.map_err(|err| {
                    log::error!("Error adding {}: {err:#}", T::KIND);
                    CrudError::SubmitFailed(err.to_string())
                })?;
                self.upsert(created);
            }
            EditSession::Editing { id, draft } => {
                let updated = self.gateway.update(&id, &draft).await.map_err(|err| {
                    log::error!("Error updating {}: {err:#}", T::KIND);
                    CrudError::SubmitFailed(err.to_string())
                })?;
                // Replace in place so the entity keeps its position. If the
                // session was superseded and the id is gone from the mirror,
                // the collection stays as it is.
                if let Some(slot) = self.collection.iter_mut().find(|e| *e.id() == id) {
                    *slot = updated;
                }
            }
        }
        self.session = EditSession::idle();
        Ok(())
    }

    /// Delete the record with `id` and drop it from the mirror.
    ///
    /// Rejects an empty id without issuing a network call: a stale or
    /// unbound list entry must not trigger a delete with an undefined key.
    /// An unrelated in-progress edit session is left alone.
    pub async fn remove(&mut self, id: &EntityId) -> CrudResult<()> {
        if id.is_empty() {
            log::error!("Invalid id for {} delete", T::KIND);
            return Err(CrudError::InvalidId);
        }
        self.gateway.delete(id).await.map_err(|err| {
            log::error!("Error deleting {}: {err:#}", T::KIND);
            CrudError::DeleteFailed(err.to_string())
        })?;
        self.collection.retain(|e| e.id() != id);
        Ok(())
    }

    /// Clear the session locally without contacting the backend.
    pub fn cancel_edit(&mut self) {
        self.session = EditSession::idle();
    }

    /// The local mirror, in arrival order.
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.collection.iter().find(|e| e.id() == id)
    }

    pub fn session(&self) -> &EditSession<T> {
        &self.session
    }

    /// The scratch draft the form renders, regardless of mode.
    pub fn draft(&self) -> &T::Draft {
        match &self.session {
            EditSession::Idle { draft } | EditSession::Editing { draft, .. } => draft,
        }
    }

    /// Mutable scratch draft for the form to write field edits into.
    pub fn draft_mut(&mut self) -> &mut T::Draft {
        match &mut self.session {
            EditSession::Idle { draft } | EditSession::Editing { draft, .. } => draft,
        }
    }

    /// The id the session is bound to, if in edit mode.
    pub fn editing_id(&self) -> Option<&EntityId> {
        match &self.session {
            EditSession::Editing { id, .. } => Some(id),
            EditSession::Idle { .. } => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.session, EditSession::Editing { .. })
    }

    /// Append the confirmed entity; if the backend echoes an id that is
    /// already mirrored, replace that element instead so ids stay unique.
    fn upsert(&mut self, entity: T) {
        match self
            .collection
            .iter_mut()
            .find(|e| e.id() == entity.id())
        {
            Some(slot) => *slot = entity,
            None => self.collection.push(entity),
        }
    }
}

impl<T: CatalogResource> std::fmt::Debug for EntityController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityController")
            .field("kind", &T::KIND)
            .field("collection_len", &self.collection.len())
            .field("editing_id", &self.editing_id())
            .finish()
    }
}
