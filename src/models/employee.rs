//! Employee record as exchanged with the upstream service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One employee as known to the system.
///
/// The identifier is assigned upstream and is the only key used for cache
/// storage and upstream addressing. Records are replaced wholesale, never
/// patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: u64,
    #[serde(rename = "employee_age")]
    pub age: u32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Employee {
    /// Cache key for this record, if it carries an identifier.
    pub fn cache_key(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}
