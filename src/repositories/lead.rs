//! # Lead Repository
//!
//! This module contains the repository implementation for Lead entities,
//! including the lifecycle-checked status update used by the QA and realtor
//! surfaces.

use crate::error::RepositoryError;
use crate::lifecycle::{self, LeadStatus, LifecycleRole};
use crate::models::lead::{
    ActiveModel as LeadActiveModel, Column, Entity as Lead, Model as LeadModel,
};
use crate::models::user::Entity as User;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// Request data for creating a new lead
#[derive(Debug, Clone)]
pub struct CreateLeadRequest {
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub property_address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub home_owner: String,
    pub property_value: String,
    pub contract_with_realtor: String,
    pub submitted_by_id: Uuid,
}

/// Repository for Lead database operations
pub struct LeadRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeadRepository<'a> {
    /// Create a new LeadRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new lead in the initial lifecycle state
    pub async fn create_lead(
        &self,
        request: CreateLeadRequest,
    ) -> Result<LeadModel, RepositoryError> {
        // The submitting user must exist; the FK would reject the insert
        // anyway, but a 404 is more useful than a constraint failure.
        User::find_by_id(request.submitted_by_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Submitting user not found".to_string()))?;

        let now = Utc::now();

        let lead = LeadActiveModel {
            id: Set(Uuid::new_v4()),
            customer_first_name: Set(request.customer_first_name),
            customer_last_name: Set(request.customer_last_name),
            phone_number: Set(request.phone_number),
            email_address: Set(request.email_address),
            property_address: Set(request.property_address),
            city: Set(request.city),
            state: Set(request.state),
            zipcode: Set(request.zipcode),
            home_owner: Set(request.home_owner),
            property_value: Set(request.property_value),
            contract_with_realtor: Set(request.contract_with_realtor),
            status: Set(LeadStatus::Submitted),
            recording: Set(None),
            assigned_to_id: Set(None),
            submitted_by_id: Set(request.submitted_by_id),
            submission_date: Set(now.into()),
            updated_at: Set(now.into()),
        };

        lead.insert(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get lead by ID
    pub async fn get_lead_by_id(&self, lead_id: Uuid) -> Result<Option<LeadModel>, RepositoryError> {
        let lead = Lead::find_by_id(lead_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(lead)
    }

    /// List all leads, newest submission first
    pub async fn list_all(&self) -> Result<Vec<LeadModel>, RepositoryError> {
        let leads = Lead::find()
            .order_by_desc(Column::SubmissionDate)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(leads)
    }

    /// List leads submitted by the given user, newest first
    pub async fn list_by_submitter(
        &self,
        submitted_by_id: Uuid,
    ) -> Result<Vec<LeadModel>, RepositoryError> {
        let leads = Lead::find()
            .filter(Column::SubmittedById.eq(submitted_by_id))
            .order_by_desc(Column::SubmissionDate)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(leads)
    }

    /// List all accepted leads, newest first
    pub async fn list_accepted(&self) -> Result<Vec<LeadModel>, RepositoryError> {
        let leads = Lead::find()
            .filter(Column::Status.eq(LeadStatus::Accepted))
            .order_by_desc(Column::SubmissionDate)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(leads)
    }

    /// List the available pool: accepted and not yet assigned, newest first
    pub async fn list_available(&self) -> Result<Vec<LeadModel>, RepositoryError> {
        let leads = Lead::find()
            .filter(Column::Status.eq(LeadStatus::Accepted))
            .filter(Column::AssignedToId.is_null())
            .order_by_desc(Column::SubmissionDate)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(leads)
    }

    /// Apply a lifecycle transition requested by `role`, optionally attaching
    /// a recording reference. Illegal transitions leave the lead untouched.
    pub async fn update_status(
        &self,
        lead_id: Uuid,
        requested: LeadStatus,
        recording: Option<String>,
        role: LifecycleRole,
    ) -> Result<LeadModel, RepositoryError> {
        let lead = Lead::find_by_id(lead_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Lead not found".to_string()))?;

        let next = lifecycle::transition(lead.status, requested, role)?;

        let mut active_lead = lead.into_active_model();
        active_lead.status = Set(next);
        if let Some(recording) = recording {
            active_lead.recording = Set(Some(recording));
        }
        active_lead.updated_at = Set(Utc::now().into());

        active_lead
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Delete a lead by primary key, returning the deleted row
    pub async fn delete_lead(&self, lead_id: Uuid) -> Result<LeadModel, RepositoryError> {
        let lead = Lead::find_by_id(lead_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Lead not found".to_string()))?;

        lead.clone()
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(lead)
    }
}
