//! Domain enums - employee status, employment type, request status
//!
//! Each enum has a stable lowercase token used in the database and in JSON
//! (via serde), and a human-readable label used in audit summaries (via
//! `Display`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employment status of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    /// Stable token stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnLeave => "on_leave",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::OnLeave => write!(f, "On Leave"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "on_leave" => Ok(Self::OnLeave),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("Invalid employee status: {s}")),
        }
    }
}

/// Contractual employment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Permanent,
    Contract,
    Temporary,
    Intern,
    Graduate,
    Consultant,
}

impl EmploymentType {
    /// Stable token stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Contract => "contract",
            Self::Temporary => "temporary",
            Self::Intern => "intern",
            Self::Graduate => "graduate",
            Self::Consultant => "consultant",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permanent => write!(f, "Permanent"),
            Self::Contract => write!(f, "Contract"),
            Self::Temporary => write!(f, "Temporary"),
            Self::Intern => write!(f, "Intern"),
            Self::Graduate => write!(f, "Graduate"),
            Self::Consultant => write!(f, "Consultant"),
        }
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permanent" => Ok(Self::Permanent),
            "contract" => Ok(Self::Contract),
            "temporary" => Ok(Self::Temporary),
            "intern" => Ok(Self::Intern),
            "graduate" => Ok(Self::Graduate),
            "consultant" => Ok(Self::Consultant),
            _ => Err(format!("Invalid employment type: {s}")),
        }
    }
}

/// Outcome state of a status-change request
///
/// `Pending` is the only non-terminal state; a request transitions exactly
/// once to `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Stable token stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Check whether this state permits no further transitions
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Invalid request status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_token_roundtrip() {
        for status in [
            EmployeeStatus::Active,
            EmployeeStatus::OnLeave,
            EmployeeStatus::Inactive,
        ] {
            assert_eq!(status.as_str().parse::<EmployeeStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_employment_type_token_roundtrip() {
        for et in [
            EmploymentType::Permanent,
            EmploymentType::Contract,
            EmploymentType::Temporary,
            EmploymentType::Intern,
            EmploymentType::Graduate,
            EmploymentType::Consultant,
        ] {
            assert_eq!(et.as_str().parse::<EmploymentType>().unwrap(), et);
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(EmployeeStatus::OnLeave.to_string(), "On Leave");
        assert_eq!(EmploymentType::Permanent.to_string(), "Permanent");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_serde_token() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, "\"on_leave\"");
    }
}
