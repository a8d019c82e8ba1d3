//! Database tests

use super::*;
use crate::error::Error;
use crate::models::*;

fn food(date: &str, amount: f64) -> NewExpense {
    NewExpense::new(date, "Food", amount, "")
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_expenses().unwrap().is_empty());
    assert_eq!(db.count_expenses().unwrap(), 0);
    assert_eq!(db.path(), ":memory:");
}

#[test]
fn test_schema_exists() {
    let db = Database::in_memory().unwrap();

    let result: i64 = db
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('expenses') WHERE name IN ('id', 'date', 'category', 'amount', 'description')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 5, "expenses table should have 5 expected columns");

    let result: i64 = db
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('categories') WHERE name IN ('id', 'name')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 2, "categories table should have 2 expected columns");
}

#[test]
fn test_open_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.db");
    let path = path.to_str().unwrap();

    let db = Database::open(path).unwrap();
    let id = db
        .create_expense(&NewExpense::new("2024-01-01", "Bills", 42.0, "power"))
        .unwrap();
    db.close().unwrap();

    let db = Database::open(path).unwrap();
    let expenses = db.list_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, id);
    assert_eq!(expenses[0].description, "power");
    db.close().unwrap();
}

#[test]
fn test_create_adds_exactly_one_record() {
    let db = Database::in_memory().unwrap();
    db.create_expense(&food("2024-01-01", 1.0)).unwrap();
    let before = db.list_expenses().unwrap();

    let new = NewExpense::new("2024-01-02", "Transportation", 2.75, "bus fare");
    let id = db.create_expense(&new).unwrap();

    let after = db.list_expenses().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert!(before.iter().all(|e| e.id != id));
    assert_eq!(
        after.last().unwrap(),
        &Expense {
            id,
            date: "2024-01-02".to_string(),
            category: "Transportation".to_string(),
            amount: 2.75,
            description: "bus fare".to_string(),
        }
    );
}

#[test]
fn test_create_accepts_zero_negative_and_free_text() {
    let db = Database::in_memory().unwrap();
    db.create_expense(&food("2024-01-01", 0.0)).unwrap();
    db.create_expense(&food("2024-01-01", -8.0)).unwrap();
    db.create_expense(&NewExpense::new("someday", "Not A Registered Label", 1.0, ""))
        .unwrap();
    assert_eq!(db.count_expenses().unwrap(), 3);
}

#[test]
fn test_create_rejects_invalid_fields() {
    let db = Database::in_memory().unwrap();

    let err = db.create_expense(&food("2024-01-01", f64::NAN)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = db
        .create_expense(&NewExpense::new("2024-01-01", "", 1.0, ""))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_ids_are_never_reused() {
    let db = Database::in_memory().unwrap();
    let first = db.create_expense(&food("2024-01-01", 1.0)).unwrap();
    let second = db.create_expense(&food("2024-01-02", 2.0)).unwrap();
    assert!(second > first);

    assert!(db.delete_expense(second).unwrap());
    let third = db.create_expense(&food("2024-01-03", 3.0)).unwrap();
    assert!(third > second);
}

#[test]
fn test_list_is_insertion_order() {
    let db = Database::in_memory().unwrap();
    let ids: Vec<i64> = ["2024-03-01", "2024-01-01", "2024-02-01"]
        .iter()
        .map(|d| db.create_expense(&food(d, 1.0)).unwrap())
        .collect();

    let listed: Vec<i64> = db.list_expenses().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_get_expense() {
    let db = Database::in_memory().unwrap();
    let id = db.create_expense(&food("2024-01-01", 4.0)).unwrap();

    let expense = db.get_expense(id).unwrap().unwrap();
    assert_eq!(expense.amount, 4.0);
    assert!(db.get_expense(id + 100).unwrap().is_none());
}

#[test]
fn test_update_changes_only_target() {
    let db = Database::in_memory().unwrap();
    let keep = db.create_expense(&food("2024-01-01", 1.0)).unwrap();
    let target = db.create_expense(&food("2024-01-02", 2.0)).unwrap();
    let untouched = db.get_expense(keep).unwrap().unwrap();

    let updated = db
        .update_expense(
            target,
            &NewExpense::new("2024-02-02", "Bills", 20.0, "phone"),
        )
        .unwrap();
    assert!(updated);

    let expense = db.get_expense(target).unwrap().unwrap();
    assert_eq!(expense.date, "2024-02-02");
    assert_eq!(expense.category, "Bills");
    assert_eq!(expense.amount, 20.0);
    assert_eq!(expense.description, "phone");
    assert_eq!(db.get_expense(keep).unwrap().unwrap(), untouched);
}

#[test]
fn test_update_missing_id_is_silent_noop() {
    let db = Database::in_memory().unwrap();
    db.create_expense(&food("2024-01-01", 1.0)).unwrap();
    let before = db.list_expenses().unwrap();

    let updated = db.update_expense(999, &food("2030-01-01", 5.0)).unwrap();
    assert!(!updated);
    assert_eq!(db.list_expenses().unwrap(), before);
}

#[test]
fn test_update_rejects_invalid_fields() {
    let db = Database::in_memory().unwrap();
    let id = db.create_expense(&food("2024-01-01", 1.0)).unwrap();

    let err = db
        .update_expense(id, &food("2024-01-01", f64::INFINITY))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(db.get_expense(id).unwrap().unwrap().amount, 1.0);
}

#[test]
fn test_delete() {
    let db = Database::in_memory().unwrap();
    let keep = db.create_expense(&food("2024-01-01", 1.0)).unwrap();
    let gone = db.create_expense(&food("2024-01-02", 2.0)).unwrap();

    assert!(db.delete_expense(gone).unwrap());
    let ids: Vec<i64> = db.list_expenses().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn test_delete_missing_id_is_silent_noop() {
    let db = Database::in_memory().unwrap();
    db.create_expense(&food("2024-01-01", 1.0)).unwrap();
    let before = db.list_expenses().unwrap();

    assert!(!db.delete_expense(12345).unwrap());
    assert_eq!(db.list_expenses().unwrap(), before);
}

#[test]
fn test_categories_start_empty_and_seed() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_categories().unwrap().is_empty());

    let added = db.seed_default_categories().unwrap();
    assert_eq!(added, DEFAULT_CATEGORIES.len());

    // Seeding again adds nothing
    assert_eq!(db.seed_default_categories().unwrap(), 0);

    let names: Vec<String> = db
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Bills",
            "Entertainment",
            "Food",
            "Groceries",
            "Shopping",
            "Transportation"
        ]
    );
}

#[test]
fn test_ensure_categories_only_seeds_empty_registry() {
    let db = Database::in_memory().unwrap();
    assert_eq!(db.ensure_categories(["Rent", "Coffee"]).unwrap(), 2);
    assert_eq!(db.ensure_categories(["Travel"]).unwrap(), 0);
    assert!(!db.has_category("Travel").unwrap());
    assert!(db.has_category("Coffee").unwrap());
}

#[test]
fn test_add_and_remove_category() {
    let db = Database::in_memory().unwrap();
    let id = db.add_category("  Pets ").unwrap();
    assert_eq!(db.add_category("Pets").unwrap(), id);
    assert!(db.has_category("Pets").unwrap());

    let err = db.add_category("   ").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    assert!(db.remove_category("Pets").unwrap());
    assert!(!db.remove_category("Pets").unwrap());
    assert!(!db.has_category("Pets").unwrap());
}

#[test]
fn test_removing_category_keeps_expenses() {
    let db = Database::in_memory().unwrap();
    db.seed_default_categories().unwrap();
    let id = db.create_expense(&food("2024-01-01", 3.0)).unwrap();

    assert!(db.remove_category("Food").unwrap());
    assert_eq!(db.get_expense(id).unwrap().unwrap().category, "Food");
}

#[test]
fn test_null_columns_read_as_defaults() {
    let db = Database::in_memory().unwrap();
    db.conn()
        .execute(
            "INSERT INTO expenses (date, category, amount, description) VALUES ('2024-01-01', 'Food', 2.0, NULL)",
            [],
        )
        .unwrap();

    let expenses = db.list_expenses().unwrap();
    assert_eq!(expenses[0].description, "");
}
