//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use crate::web::session::CookieSigner;
use std::sync::Arc;
use study_portal_core::ports::{CatalogStore, MediaStore};

/// The shared application state, created once at startup and passed to all
/// handlers. The stores are injected behind their ports so tests can swap in
/// temp-directory-backed (or in-memory) implementations.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    pub media: Arc<dyn MediaStore>,
    pub signer: CookieSigner,
    pub config: Arc<Config>,
}
