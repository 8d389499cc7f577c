//! Aggregator for income, expense and balance totals

use std::ops::Add;

use crate::models::{Money, Transaction, TransactionType};

/// Totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    /// Always `income - expense`
    pub balance: Money,
}

impl Summary {
    fn from_totals(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

impl Add for Summary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_totals(self.income + other.income, self.expense + other.expense)
    }
}

/// Sum income and expense amounts; empty input yields all zeros
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (income, expense) = records.into_iter().fold(
        (Money::zero(), Money::zero()),
        |(income, expense), txn| match txn.kind {
            TransactionType::Income => (income + txn.amount, expense),
            TransactionType::Expense => (income, expense + txn.amount),
        },
    );
    Summary::from_totals(income, expense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;

    fn txn(id: i64, kind: TransactionType, minor: i64) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            "01/03/2026",
            kind,
            "Other",
            "entry",
            Money::from_minor(minor),
        )
    }

    #[test]
    fn test_empty_is_zero() {
        let empty: Vec<Transaction> = Vec::new();
        assert_eq!(summarize(&empty), Summary::default());
    }

    #[test]
    fn test_totals_and_balance() {
        let records = vec![
            txn(2, TransactionType::Expense, 120000),
            txn(1, TransactionType::Income, 5000000),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.income, Money::from_major(50000));
        assert_eq!(summary.expense, Money::from_major(1200));
        assert_eq!(summary.balance, Money::from_major(48800));
    }

    #[test]
    fn test_negative_balance() {
        let records = vec![txn(1, TransactionType::Expense, 120000)];
        assert_eq!(summarize(&records).balance, Money::from_major(-1200));
    }

    #[test]
    fn test_additive_over_disjoint_subsets() {
        let records = vec![
            txn(5, TransactionType::Income, 1050),
            txn(4, TransactionType::Expense, 999),
            txn(3, TransactionType::Income, 1),
            txn(2, TransactionType::Expense, 250000),
            txn(1, TransactionType::Income, 7),
        ];

        for split in 0..=records.len() {
            let (a, b) = records.split_at(split);
            assert_eq!(summarize(a) + summarize(b), summarize(&records));
        }
    }

    #[test]
    fn test_order_independent() {
        let mut records = vec![
            txn(1, TransactionType::Income, 300),
            txn(2, TransactionType::Expense, 100),
        ];
        let forward = summarize(&records);
        records.reverse();
        assert_eq!(summarize(&records), forward);
    }
}
