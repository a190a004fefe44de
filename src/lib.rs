use std::sync::Arc;

use crate::generator::BlogGenerator;

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod telemetry;

/// State shared across request handlers. The generator handle is reused
/// between invocations and is stateless, so no locking is required.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn BlogGenerator>,
    pub model_id: String,
}
