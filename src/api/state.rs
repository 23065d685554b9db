use std::path::PathBuf;
use std::sync::Arc;

use crate::pdf::InvoiceGenerator;

#[derive(Clone)]
pub struct ApiState {
    pub generator: Arc<InvoiceGenerator>,
    pub config: Arc<AppConfig>,
}

#[derive(Clone)]
pub struct AppConfig {
    /// Shared secret for signing download tokens.
    pub jwt_secret: String,
    /// Secondary shared secret; required at startup even though no live
    /// request path consumes it.
    pub data_secret: String,
    pub invoice_dir: PathBuf,
    pub token_ttl_minutes: i64,
}

impl ApiState {
    pub fn new(config: AppConfig) -> Self {
        let generator = Arc::new(InvoiceGenerator::new(config.invoice_dir.clone()));
        ApiState {
            generator,
            config: Arc::new(config),
        }
    }
}
