//! Basic types for bills and users

use serde::{Deserialize, Serialize};

/// Expense categories offered by the new-bill form
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Bill review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Submitted, waiting for review
    Pending,
    /// Accepted by an administrator
    Accepted,
    /// Refused by an administrator
    Refused,
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Pending
    }
}

impl BillStatus {
    /// Label shown in the bills list
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

impl std::str::FromStr for BillStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            _ => Err(format!("Invalid bill status: {}", s)),
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Accepted => write!(f, "accepted"),
            BillStatus::Refused => write!(f, "refused"),
        }
    }
}

/// Kind of logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

impl Default for UserType {
    fn default() -> Self {
        UserType::Employee
    }
}

impl std::str::FromStr for UserType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employee" => Ok(UserType::Employee),
            "admin" => Ok(UserType::Admin),
            _ => Err(format!("Invalid user type: {}", s)),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Employee => write!(f, "Employee"),
            UserType::Admin => write!(f, "Admin"),
        }
    }
}
