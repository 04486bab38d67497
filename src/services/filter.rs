//! Transaction filtering shared by the list view and the cash-flow report

use chrono::NaiveDate;

use crate::models::{AccountId, CategoryId, Transaction, TransactionType};
use crate::reports::Period;

/// Field filters; every field that is set must match (AND), unset fields
/// impose nothing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Case-sensitive substring of the description
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub account_id: Option<AccountId>,
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, needle: impl Into<String>) -> Self {
        self.description = Some(needle.into());
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.description
            .as_deref()
            .map_or(true, |needle| txn.description.contains(needle))
            && self.category_id.map_or(true, |id| txn.category_id == id)
            && self.account_id.map_or(true, |id| txn.account_id == id)
            && self.kind.map_or(true, |kind| txn.kind == kind)
    }
}

/// The transactions that fall in `period`, in their original order.
///
/// `Monthly` and `Yearly` are relative to `today`; a `Custom` period missing
/// either bound keeps everything.
pub fn filter_by_period<'a>(
    transactions: &'a [Transaction],
    period: &Period,
    today: NaiveDate,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| period.includes(t.date, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(d: NaiveDate, description: &str) -> Transaction {
        let mut t = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(100),
            CategoryId::new(),
            AccountId::new(),
            d,
        );
        t.description = description.to_string();
        t
    }

    #[test]
    fn test_all_is_identity() {
        let ts = vec![
            txn(date(2020, 1, 1), "a"),
            txn(date(2030, 5, 5), "b"),
            txn(date(2025, 6, 1), "c"),
        ];
        let kept = filter_by_period(&ts, &Period::All, date(2025, 6, 15));
        let kept: Vec<Transaction> = kept.into_iter().cloned().collect();
        assert_eq!(kept, ts);
    }

    #[test]
    fn test_monthly_uses_today_and_keeps_order() {
        let ts = vec![
            txn(date(2025, 6, 30), "late"),
            txn(date(2024, 6, 10), "last year"),
            txn(date(2025, 6, 1), "early"),
            txn(date(2025, 7, 1), "next month"),
        ];
        let kept = filter_by_period(&ts, &Period::Monthly, date(2025, 6, 15));
        let names: Vec<_> = kept.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["late", "early"]);
    }

    #[test]
    fn test_yearly() {
        let ts = vec![txn(date(2025, 1, 1), "in"), txn(date(2024, 12, 31), "out")];
        let kept = filter_by_period(&ts, &Period::Yearly, date(2025, 6, 15));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].description, "in");
    }

    #[test]
    fn test_custom_inclusive_and_unbounded() {
        let ts = vec![
            txn(date(2025, 1, 1), "start"),
            txn(date(2025, 1, 31), "end"),
            txn(date(2025, 2, 1), "after"),
        ];
        let today = date(2025, 6, 15);
        let range = Period::custom(Some(date(2025, 1, 1)), Some(date(2025, 1, 31)));
        assert_eq!(filter_by_period(&ts, &range, today).len(), 2);

        let open = Period::custom(Some(date(2025, 1, 15)), None);
        assert_eq!(filter_by_period(&ts, &open, today).len(), 3);
    }

    #[test]
    fn test_field_filters_and_combined() {
        let account = AccountId::new();
        let mut rent = txn(date(2025, 1, 1), "Rent January");
        rent.account_id = account;
        let mut salary = txn(date(2025, 1, 2), "Salary");
        salary.account_id = account;
        salary.kind = TransactionType::Income;
        let other = txn(date(2025, 1, 3), "Rent storage");

        let filter = TransactionFilter::new().description("Rent").account(account);
        assert!(filter.matches(&rent));
        assert!(!filter.matches(&salary));
        assert!(!filter.matches(&other));

        assert!(TransactionFilter::new()
            .kind(TransactionType::Income)
            .matches(&salary));
        assert!(!TransactionFilter::new().description("rent").matches(&rent));
        assert!(TransactionFilter::new().matches(&other));
        assert!(!TransactionFilter::new()
            .category(CategoryId::new())
            .matches(&other));
    }
}
