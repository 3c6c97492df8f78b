use sea_orm::entity::prelude::*;

/// One dated presence record.
///
/// `student_name` is a copy taken when the entry was recorded, not a
/// reference: renaming or deleting the student leaves the entry untouched.
/// `present` is stored exactly as submitted, 1 meaning present.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: String,
    #[sea_orm(indexed)]
    pub student_name: String,
    pub present: i32,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_present(&self) -> bool {
        self.present == 1
    }
}
