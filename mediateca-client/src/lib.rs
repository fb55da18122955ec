//! Client-side CRUD synchronization core for the Mediateca admin console.
//!
//! The catalog backend is an external REST service; this crate owns the
//! client half of the conversation. [`EntityController`] mirrors one entity
//! kind's remote collection, tracks at most one in-progress edit, and
//! reconciles create/update/delete confirmations into the mirror without a
//! full reload. [`ApiClient`] and [`RestGateway`] do the HTTP work;
//! [`OptionsResolver`] feeds the media form's reference dropdowns.
#![allow(missing_docs)]

pub mod api_client;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod options;
pub mod testing;

pub use api_client::ApiClient;
pub use config::Config;
pub use controller::{EditSession, EntityController};
pub use error::{CrudError, CrudResult};
pub use gateway::{Gateway, RestGateway};
pub use options::{OptionEntry, OptionsResolver, ReferenceOptions};
