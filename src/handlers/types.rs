//! # Common API Types
//!
//! This module contains the wire representations shared across handlers.
//! Field names follow the camelCase contract of the original intake form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::lifecycle::LeadStatus;
use crate::models::user::UserRole;
use crate::models::{lead, lead_assignment, realtor, user};

/// Wire representation of a user row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    /// ISO 8601 creation timestamp
    pub created_at: String,
}

impl From<user::Model> for UserDto {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password: model.password,
            role: model.role,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// Wire representation of a lead row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    pub id: Uuid,
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
    pub status: LeadStatus,
    pub recording: Option<String>,
    pub assigned_to_id: Option<Uuid>,
    pub submitted_by_id: Uuid,
    /// ISO 8601 submission timestamp
    pub submission_date: String,
    /// ISO 8601 timestamp of the last change
    pub updated_at: String,
}

impl From<lead::Model> for LeadDto {
    fn from(model: lead::Model) -> Self {
        Self {
            id: model.id,
            customer_first_name: model.customer_first_name,
            customer_last_name: model.customer_last_name,
            phone_number: model.phone_number,
            email_address: model.email_address,
            property_address: model.property_address,
            city: model.city,
            state: model.state,
            zipcode: model.zipcode,
            home_owner: model.home_owner,
            property_value: model.property_value,
            contract_with_realtor: model.contract_with_realtor,
            status: model.status,
            recording: model.recording,
            assigned_to_id: model.assigned_to_id,
            submitted_by_id: model.submitted_by_id,
            submission_date: model.submission_date.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// Wire representation of a realtor row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RealtorDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub brokerage: String,
    pub state: String,
    pub central_zip_code: String,
    pub radius: i32,
    pub sign_up_category: String,
    pub total_team_members: i32,
    pub agent_code: String,
    pub is_active: bool,
    pub user_id: Uuid,
    /// ISO 8601 sign-up timestamp
    pub created_at: String,
}

impl From<realtor::Model> for RealtorDto {
    fn from(model: realtor::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            email: model.email,
            brokerage: model.brokerage,
            state: model.state,
            central_zip_code: model.central_zip_code,
            radius: model.radius,
            sign_up_category: model.sign_up_category,
            total_team_members: model.total_team_members,
            agent_code: model.agent_code,
            is_active: model.is_active,
            user_id: model.user_id,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// Wire representation of a lead assignment row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub realtor_id: Uuid,
    /// ISO 8601 assignment timestamp
    pub assigned_at: String,
}

impl From<lead_assignment::Model> for AssignmentDto {
    fn from(model: lead_assignment::Model) -> Self {
        Self {
            id: model.id,
            lead_id: model.lead_id,
            realtor_id: model.realtor_id,
            assigned_at: model.assigned_at.to_rfc3339(),
        }
    }
}
