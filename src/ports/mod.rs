//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GenerationService` - External text generation for report sections

mod generation_service;

pub use generation_service::{
    GenerationError, GenerationRequest, GenerationResponse, GenerationService, ServiceInfo, TokenUsage,
};
