use sea_orm::{EntityTrait, PaginatorTrait};
use sparkify_test_utils::prelude::*;

use super::*;

mod create_tables;

/// Names of the warehouse tables present in the database, in drop/create order.
async fn existing_tables(test: &TestContext) -> Result<Vec<&'static str>, TestError> {
    let manager = SchemaManager::new(&test.db);

    let mut names = Vec::new();
    for table in WarehouseTable::ALL {
        if manager.has_table(table.name()).await? {
            names.push(table.name());
        }
    }

    Ok(names)
}

fn all_tables() -> Vec<&'static str> {
    WarehouseTable::ALL.iter().map(|table| table.name()).collect()
}
