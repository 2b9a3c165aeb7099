//! Per-category totals derived from the authoritative list

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Expense;

/// Sum of amounts for one category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Category totals in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    /// Aggregate a record list
    ///
    /// Labels are compared exactly, so "Food" and "food" are separate
    /// buckets.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut entries: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in expenses {
            match index.get(expense.category.as_str()) {
                Some(&i) => entries[i].total += expense.amount,
                None => {
                    index.insert(expense.category.as_str(), entries.len());
                    entries.push(CategoryTotal {
                        category: expense.category.clone(),
                        total: expense.amount,
                    });
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.category.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(id: i64, title: &str, amount: f64, category: &str, date: &str) -> Expense {
        Expense {
            id: ExpenseId(id),
            title: title.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_totals_in_first_appearance_order() {
        let list = vec![
            expense(1, "Coffee", 4.5, "Food", "2024-01-01"),
            expense(2, "Bus", 2.0, "Travel", "2024-01-01"),
            expense(3, "Snack", 1.5, "Food", "2024-01-02"),
        ];
        let totals = CategoryTotals::from_expenses(&list);

        assert_eq!(totals.categories(), vec!["Food", "Travel"]);
        assert_eq!(totals.get("Food"), Some(6.0));
        assert_eq!(totals.get("Travel"), Some(2.0));
    }

    #[test]
    fn test_labels_compared_exactly() {
        let list = vec![
            expense(1, "a", 1.0, "Food", "2024-01-01"),
            expense(2, "b", 2.0, "food", "2024-01-01"),
            expense(3, "c", 4.0, "Food ", "2024-01-01"),
        ];
        let totals = CategoryTotals::from_expenses(&list);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals.get("Food"), Some(1.0));
        assert_eq!(totals.get("food"), Some(2.0));
        assert_eq!(totals.get("Food "), Some(4.0));
    }

    #[test]
    fn test_full_precision_retained() {
        let list = vec![
            expense(1, "a", 0.1, "X", "2024-01-01"),
            expense(2, "b", 0.2, "X", "2024-01-01"),
        ];
        let totals = CategoryTotals::from_expenses(&list);
        assert_eq!(totals.get("X"), Some(0.1 + 0.2));
    }

    #[test]
    fn test_sum_matches_filtered_sum() {
        let categories = ["Food", "Travel", "Rent", "food"];
        let list: Vec<Expense> = (0..40)
            .map(|i| expense(i, "x", (i as f64) * 1.25, categories[(i as usize * 7) % 4], "2024-03-01"))
            .collect();
        let totals = CategoryTotals::from_expenses(&list);

        for entry in totals.iter() {
            let expected: f64 = list
                .iter()
                .filter(|e| e.category == entry.category)
                .fold(0.0, |acc, e| acc + e.amount);
            assert_eq!(entry.total, expected);
        }
        assert_eq!(totals, CategoryTotals::from_expenses(&list));
    }

    #[test]
    fn test_empty_list() {
        let totals = CategoryTotals::from_expenses(&[]);
        assert!(totals.is_empty());
        assert_eq!(serde_json::to_string(&totals).unwrap(), "[]");
    }
}
