//! Offline Generation Service - always unavailable.
//!
//! Used when no API key is configured or `--offline` is passed; every report
//! section then resolves to fallback content.

use async_trait::async_trait;

use crate::ports::{GenerationError, GenerationRequest, GenerationResponse, GenerationService, ServiceInfo};

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerationService;

impl OfflineGenerationService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenerationService for OfflineGenerationService {
    async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        Err(GenerationError::unavailable("generation disabled (offline mode)"))
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo::new("offline", "none")
    }
}
