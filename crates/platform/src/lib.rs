//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing and verification (Argon2id)
//! - In-process metrics registry with Prometheus text export

pub mod metrics;
pub mod password;
