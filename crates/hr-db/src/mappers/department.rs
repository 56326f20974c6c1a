//! Department model -> entity mapper

use hr_core::entities::Department;
use hr_core::value_objects::DepartmentId;

use crate::models::DepartmentModel;

impl From<DepartmentModel> for Department {
    fn from(model: DepartmentModel) -> Self {
        Department {
            id: DepartmentId::new(model.id),
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
