//! Read-side tabular extracts of a period.
//!
//! Pure transformation over the book's current contents; nothing here
//! mutates state or recomputes balances.

use std::io::Write;

use crate::errors::Result;
use crate::format::MoneyFormat;
use crate::ledger::CashBook;

pub const EXPORT_HEADERS: [&str; 6] = [
    "Date",
    "Description",
    "Note",
    "Inflow",
    "Outflow",
    "Balance",
];

/// One rendered export line. Zero inflow/outflow cells are blank, matching
/// the on-screen listing; balance is always rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRow {
    pub date: String,
    pub description: String,
    pub note: String,
    pub inflow: String,
    pub outflow: String,
    pub balance: String,
}

/// Renders the `(date, id)`-ordered entries of `period` for display.
pub fn period_rows(book: &CashBook, period: &str, format: &MoneyFormat) -> Vec<PeriodRow> {
    book.entries_in(period)
        .into_iter()
        .map(|entry| PeriodRow {
            date: format.date(entry.date),
            description: entry.description.clone(),
            note: entry.note.clone().unwrap_or_default(),
            inflow: if entry.inflow > 0.0 {
                format.amount(entry.inflow)
            } else {
                String::new()
            },
            outflow: if entry.outflow > 0.0 {
                format.amount(entry.outflow)
            } else {
                String::new()
            },
            balance: format.amount(entry.balance),
        })
        .collect()
}

/// Writes the period extract as CSV with the canonical header row.
pub fn write_period_csv<W: Write>(
    book: &CashBook,
    period: &str,
    format: &MoneyFormat,
    writer: W,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;
    for row in period_rows(book, period, format) {
        csv_writer.write_record([
            row.date.as_str(),
            row.description.as_str(),
            row.note.as_str(),
            row.inflow.as_str(),
            row.outflow.as_str(),
            row.balance.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryInput;
    use crate::services::EntryService;
    use chrono::NaiveDate;

    fn sample_book() -> CashBook {
        let mut book = CashBook::new("Shop");
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        EntryService::add(
            &mut book,
            "January",
            EntryInput::inflow(date, "Opening", 1000.0).with_note("carried by hand"),
        )
        .unwrap();
        let rent = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        EntryService::add(&mut book, "January", EntryInput::outflow(rent, "Rent", 300.0)).unwrap();
        book
    }

    #[test]
    fn rows_blank_out_zero_sides() {
        let book = sample_book();
        let rows = period_rows(&book, "January", &MoneyFormat::en_us());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].inflow, "$1,000.00");
        assert_eq!(rows[0].outflow, "");
        assert_eq!(rows[1].inflow, "");
        assert_eq!(rows[1].outflow, "$300.00");
        assert_eq!(rows[1].balance, "$700.00");
    }

    #[test]
    fn csv_carries_header_and_rows() {
        let book = sample_book();
        let mut buffer = Vec::new();
        write_period_csv(&book, "January", &MoneyFormat::en_us(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Description,Note,Inflow,Outflow,Balance"
        );
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.next().unwrap().contains("Opening"));
    }

    #[test]
    fn empty_period_exports_header_only() {
        let book = CashBook::new("Shop");
        let mut buffer = Vec::new();
        write_period_csv(&book, "August", &MoneyFormat::pt_br(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
