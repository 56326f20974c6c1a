//! Department entity

use chrono::{DateTime, Utc};

use crate::value_objects::DepartmentId;

/// Organizational department
///
/// Department names are unique. Deleting a department with assigned
/// employees is rejected (restrict-on-delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Create a new department
    pub fn new(id: DepartmentId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the department, bumping the modification timestamp
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename() {
        let mut department = Department::new(DepartmentId::new(1), "Engineering".to_string());
        department.rename("Product Engineering".to_string());
        assert_eq!(department.name, "Product Engineering");
    }
}
