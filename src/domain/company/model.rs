//! Company domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::merge::merge;

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    /// Login name, unique among live companies
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl Company {
    /// `password_hash` must already be hashed.
    pub fn new(req: NewCompany, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            phone_number: req.phone_number,
            email: req.email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: CompanyPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.phone_number, patch.phone_number);
        merge(&mut self.email, patch.email);
        self.updated_at = Utc::now();
    }
}
