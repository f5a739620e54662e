use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::schema::{adoptions, animals, donations, users};

/// Coarse authorization tier carried in token claims. The store keeps the
/// role as plain text; this enum is the typed view the guards compare
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn matches(self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.as_str())
    }
}

// User rows are read-only from this service; accounts are provisioned
// outside of it.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = animals)]
pub struct Animal {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub health_status: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub adoption_status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = animals)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub health_status: Option<String>,
    pub admission_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = adoptions)]
pub struct Adoption {
    pub id: i32,
    pub animal_id: i32,
    pub adopter_id: i32,
    pub admin_notes: Option<String>,
    pub status: String,
    pub request_date: DateTime<Utc>,
}

// Status and request date come back from the store's defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = adoptions)]
pub struct NewAdoption {
    pub animal_id: i32,
    pub adopter_id: i32,
    pub admin_notes: Option<String>,
}

/// Adoption row joined with the animal and adopter display names, for the
/// administrator listing.
#[derive(Debug, Clone, Queryable, Serialize)]
pub struct AdoptionWithNames {
    pub id: i32,
    pub animal_id: i32,
    pub adopter_id: i32,
    pub admin_notes: Option<String>,
    pub status: String,
    pub request_date: DateTime<Utc>,
    pub animal_name: String,
    pub adopter_name: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = donations)]
pub struct Donation {
    pub id: i32,
    pub donor_id: i32,
    #[serde(rename = "tipo")]
    pub donation_type: String,
    #[serde(rename = "valor")]
    pub amount: f64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donations)]
pub struct NewDonation {
    pub donor_id: i32,
    pub donation_type: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_matching_is_case_insensitive() {
        assert!(UserRole::Admin.matches("admin"));
        assert!(UserRole::Admin.matches("Admin"));
        assert!(!UserRole::Admin.matches("user"));
        assert!(!UserRole::User.matches(""));
    }
}
