//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean API for data access.

pub mod assignment;
pub mod lead;
pub mod realtor;
pub mod user;

pub use assignment::AssignmentRepository;
pub use lead::{CreateLeadRequest, LeadRepository};
pub use realtor::{CreateRealtorRequest, RealtorRepository};
pub use user::{CreateUserRequest, UserRepository};

/// Closed set of collections the admin surfaces may address.
///
/// Unknown tags are rejected at the boundary; there is no default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Users,
    Leads,
    Realtors,
}

impl ModelKind {
    /// Parses the wire tag, returning None for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "users" => Some(ModelKind::Users),
            "leads" => Some(ModelKind::Leads),
            "realtors" => Some(ModelKind::Realtors),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Users => "users",
            ModelKind::Leads => "leads",
            ModelKind::Realtors => "realtors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_parse_round_trip() {
        for kind in [ModelKind::Users, ModelKind::Leads, ModelKind::Realtors] {
            assert_eq!(ModelKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_model_kind_rejects_unknown_tags() {
        assert_eq!(ModelKind::parse("assignments"), None);
        assert_eq!(ModelKind::parse("Users"), None);
        assert_eq!(ModelKind::parse(""), None);
    }
}
