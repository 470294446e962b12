//! # Data Models
//!
//! This module contains all the data models used throughout the Lead Routing API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod lead;
pub mod lead_assignment;
pub mod realtor;
pub mod user;

pub use lead::Entity as Lead;
pub use lead_assignment::Entity as LeadAssignment;
pub use realtor::Entity as Realtor;
pub use user::Entity as User;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "leadgen-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
