//! Readiness Assessor - Institutional AI readiness scoring and reporting
//!
//! This crate scores questionnaire responses across weighted readiness
//! domains, classifies maturity, derives recommendations and policy
//! triggers, and assembles a narrative report by generating its sections
//! concurrently under a shared deadline, with templated fallbacks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
