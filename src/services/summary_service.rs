//! Read-only period and annual reporting over the cash book.

use crate::ledger::CashBook;

/// Totals for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: String,
    pub opening_balance: f64,
    pub total_inflow: f64,
    pub total_outflow: f64,
    /// Balance of the last entry in `(date, id)` order, or the opening
    /// balance when the period is empty.
    pub closing_balance: f64,
    pub entry_count: usize,
}

/// Twelve-period roll-up.
///
/// `net` is computed independently from any closing balance: opening
/// balances are a per-period convention, so the year's net is the sum of
/// movements only.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSummary {
    pub periods: Vec<PeriodSummary>,
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub net: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(book: &CashBook, period: &str) -> PeriodSummary {
        let entries = book.entries_in(period);
        let opening = book.opening_balance(period);
        let total_inflow: f64 = entries.iter().map(|e| e.inflow).sum();
        let total_outflow: f64 = entries.iter().map(|e| e.outflow).sum();
        let closing_balance = entries.last().map(|e| e.balance).unwrap_or(opening);
        PeriodSummary {
            period: period.to_string(),
            opening_balance: opening,
            total_inflow,
            total_outflow,
            closing_balance,
            entry_count: entries.len(),
        }
    }

    pub fn annual_summary<'a, I>(book: &CashBook, periods: I) -> AnnualSummary
    where
        I: IntoIterator<Item = &'a str>,
    {
        let periods: Vec<PeriodSummary> = periods
            .into_iter()
            .map(|period| Self::summarize(book, period))
            .collect();
        let total_inflow: f64 = periods.iter().map(|p| p.total_inflow).sum();
        let total_outflow: f64 = periods.iter().map(|p| p.total_outflow).sum();
        AnnualSummary {
            total_inflow,
            total_outflow,
            net: total_inflow - total_outflow,
            periods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryInput, Month};
    use crate::services::EntryService;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn summarize_totals_and_closing_balance() {
        let mut book = CashBook::new("Shop");
        EntryService::add(&mut book, "March", EntryInput::inflow(date(3, 4), "Sales", 200.0))
            .unwrap();
        EntryService::add(&mut book, "March", EntryInput::outflow(date(3, 9), "Fees", 50.0))
            .unwrap();
        let summary = SummaryService::summarize(&book, "March");
        assert_eq!(summary.total_inflow, 200.0);
        assert_eq!(summary.total_outflow, 50.0);
        assert_eq!(summary.closing_balance, 150.0);
        assert_eq!(summary.entry_count, 2);
    }

    #[test]
    fn empty_period_closes_at_opening_balance() {
        let mut book = CashBook::new("Shop");
        let summary = SummaryService::summarize(&book, "July");
        assert_eq!(summary.closing_balance, 0.0);
        book.set_opening_balance("July", 80.0);
        let summary = SummaryService::summarize(&book, "July");
        assert_eq!(summary.closing_balance, 80.0);
        assert_eq!(summary.total_inflow, 0.0);
    }

    #[test]
    fn annual_summary_rolls_up_twelve_periods() {
        let mut book = CashBook::new("Shop");
        EntryService::add(&mut book, "March", EntryInput::inflow(date(3, 4), "Sales", 200.0))
            .unwrap();
        EntryService::add(&mut book, "March", EntryInput::outflow(date(3, 9), "Fees", 50.0))
            .unwrap();
        let annual = SummaryService::annual_summary(&book, Month::year_keys());
        assert_eq!(annual.periods.len(), 12);
        assert_eq!(annual.total_inflow, 200.0);
        assert_eq!(annual.total_outflow, 50.0);
        assert_eq!(annual.net, 150.0);
        for summary in annual.periods.iter().filter(|p| p.period != "March") {
            assert_eq!(summary.total_inflow, 0.0);
            assert_eq!(summary.total_outflow, 0.0);
        }
    }
}
