//! Row mapping between the product table and the `Product` entity

use sea_orm::sea_query::{Iden, SimpleExpr};
use sea_orm::{DbErr, QueryResult};

use super::entity::{Product, ProductTable};

/// Columns in the order used by selects and inserts
pub const COLUMNS: [ProductTable; 2] = [ProductTable::Id, ProductTable::Description];

impl Product {
    /// Decode a selected row. A NULL description reads as empty text.
    pub fn from_row(row: &QueryResult) -> Result<Self, DbErr> {
        let id: i32 = row.try_get("", &ProductTable::Id.to_string())?;
        let description: Option<String> =
            row.try_get("", &ProductTable::Description.to_string())?;

        Ok(Self {
            id,
            description: description.unwrap_or_default(),
        })
    }

    /// Values matching [`COLUMNS`]
    pub fn column_values(&self) -> [SimpleExpr; 2] {
        [self.id.into(), self.description.clone().into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_column_order() {
        let names: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["id", "description"]);

        let values = Product::new(7, "lamp").column_values();
        assert_eq!(values[0], SimpleExpr::from(7i32));
        assert_eq!(values[1], SimpleExpr::from("lamp".to_string()));
    }
}
