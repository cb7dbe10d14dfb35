//! Customer Portal Model

use serde::{Deserialize, Serialize};

use super::Status;

/// A self-service ordering portal handed to one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerPortal {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Backing customer record, once one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Slug the portal is served under. Generated when the body has none.
    pub unique_url: String,
    #[serde(default)]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
