use crate::models::expense::Expense;
use crate::store::Database;

impl Database {
    pub fn insert_expense(&self, expense: Expense) -> Expense {
        self.expenses.insert(expense.id, expense.clone());
        expense
    }

    pub fn list_expenses(&self) -> Vec<Expense> {
        self.expenses.iter().map(|entry| entry.value().clone()).collect()
    }
}
