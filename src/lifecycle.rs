//! Lead lifecycle state machine.
//!
//! A lead moves through a small closed set of states; every mutation of the
//! `status` column goes through [`transition`], which consults an explicit
//! table of `(current, requested, role)` triples and rejects everything
//! else. Handlers surface the rejection as HTTP 409 `ILLEGAL_TRANSITION`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Status of a lead within its qualification and routing lifecycle.
///
/// `SUBMITTED` is the initial state; `REJECTED` and `CLOSED` are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "ASSIGNED")]
    Assigned,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Submitted => "SUBMITTED",
            LeadStatus::Accepted => "ACCEPTED",
            LeadStatus::Rejected => "REJECTED",
            LeadStatus::Assigned => "ASSIGNED",
            LeadStatus::Closed => "CLOSED",
        }
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::Rejected | LeadStatus::Closed)
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role on whose behalf a lifecycle transition is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleRole {
    Qa,
    Support,
    Realtor,
}

impl LifecycleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleRole::Qa => "QA",
            LifecycleRole::Support => "SUPPORT",
            LifecycleRole::Realtor => "REALTOR",
        }
    }
}

impl std::fmt::Display for LifecycleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested transition that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transition {from} -> {requested} is not permitted for role {role}")]
pub struct TransitionError {
    pub from: LeadStatus,
    pub requested: LeadStatus,
    pub role: LifecycleRole,
}

/// The complete set of legal transitions.
const TRANSITIONS: &[(LeadStatus, LeadStatus, LifecycleRole)] = &[
    (LeadStatus::Submitted, LeadStatus::Accepted, LifecycleRole::Qa),
    (LeadStatus::Submitted, LeadStatus::Rejected, LifecycleRole::Qa),
    (
        LeadStatus::Accepted,
        LeadStatus::Assigned,
        LifecycleRole::Support,
    ),
    (
        LeadStatus::Assigned,
        LeadStatus::Closed,
        LifecycleRole::Realtor,
    ),
];

/// Validates a requested transition, returning the next status on success.
pub fn transition(
    current: LeadStatus,
    requested: LeadStatus,
    role: LifecycleRole,
) -> Result<LeadStatus, TransitionError> {
    if TRANSITIONS
        .iter()
        .any(|(from, to, by)| *from == current && *to == requested && *by == role)
    {
        Ok(requested)
    } else {
        Err(TransitionError {
            from: current,
            requested,
            role,
        })
    }
}
