//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (domain ids, priorities, errors)
//! - `scoring` - Pure reduction of responses into scores and team consensus
//! - `recommendations` - Rule engines for recommendations and policy triggers
//! - `assessment` - The complete scoring pass and its assembled result
//! - `report` - Tier budgets, section requests, prompts and fallback text

pub mod assessment;
pub mod foundation;
pub mod recommendations;
pub mod report;
pub mod scoring;
