//! # Assignment Repository
//!
//! Routes an accepted lead to a realtor. The assignment row, the lead's
//! `assigned_to_id`, and its status move to ASSIGNED as one atomic unit;
//! the unique index on lead_assignments.lead_id backstops concurrent
//! attempts that both pass the in-transaction check.

use crate::error::RepositoryError;
use crate::lifecycle::{self, LeadStatus, LifecycleRole};
use crate::models::lead::Entity as Lead;
use crate::models::lead_assignment::{
    ActiveModel as AssignmentActiveModel, Model as AssignmentModel,
};
use crate::models::realtor::Entity as Realtor;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel, Set,
    TransactionTrait,
};
use uuid::Uuid;

/// Repository for LeadAssignment database operations
pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    /// Create a new AssignmentRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assign a lead to a realtor in one transaction
    pub async fn assign(
        &self,
        lead_id: Uuid,
        realtor_id: Uuid,
    ) -> Result<AssignmentModel, RepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        match Self::assign_in_txn(&txn, lead_id, realtor_id).await {
            Ok(assignment) => {
                txn.commit()
                    .await
                    .map_err(|source| RepositoryError::Aborted { source })?;
                Ok(assignment)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    log::warn!(
                        "Failed to roll back lead assignment transaction: {}",
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn assign_in_txn(
        txn: &DatabaseTransaction,
        lead_id: Uuid,
        realtor_id: Uuid,
    ) -> Result<AssignmentModel, RepositoryError> {
        let lead = Lead::find_by_id(lead_id)
            .one(txn)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Lead not found".to_string()))?;

        Realtor::find_by_id(realtor_id)
            .one(txn)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Realtor not found".to_string()))?;

        if lead.assigned_to_id.is_some() {
            return Err(RepositoryError::Conflict(
                "Lead is already assigned".to_string(),
            ));
        }

        let next = lifecycle::transition(lead.status, LeadStatus::Assigned, LifecycleRole::Support)?;

        let now = Utc::now();

        let assignment = AssignmentActiveModel {
            id: Set(Uuid::new_v4()),
            lead_id: Set(lead_id),
            realtor_id: Set(realtor_id),
            assigned_at: Set(now.into()),
        };

        let assignment = assignment.insert(txn).await.map_err(|source| {
            if crate::error::is_unique_violation(&source) {
                RepositoryError::Conflict("Lead is already assigned".to_string())
            } else {
                RepositoryError::Aborted { source }
            }
        })?;

        let mut active_lead = lead.into_active_model();
        active_lead.status = Set(next);
        active_lead.assigned_to_id = Set(Some(realtor_id));
        active_lead.updated_at = Set(now.into());

        active_lead
            .update(txn)
            .await
            .map_err(|source| RepositoryError::Aborted { source })?;

        Ok(assignment)
    }
}
