pub mod handlers;
pub mod routes;

pub use routes::build_router;

use crate::model::ProbabilityModel;
use std::sync::Arc;

/// Shared application state
///
/// Holds the one model handle selected at startup. Never mutated after
/// construction; handlers only read through it.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ProbabilityModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn ProbabilityModel>) -> Self {
        Self { model }
    }
}
