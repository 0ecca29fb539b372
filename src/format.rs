//! Display-locale formatting for money and dates.

use chrono::NaiveDate;

/// Locale-dependent money rendering for exports and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub decimal_sep: char,
    pub thousands_sep: char,
    pub date_format: &'static str,
}

impl MoneyFormat {
    pub fn en_us() -> Self {
        Self {
            symbol: "$".into(),
            decimal_sep: '.',
            thousands_sep: ',',
            date_format: "%Y-%m-%d",
        }
    }

    pub fn pt_br() -> Self {
        Self {
            symbol: "R$ ".into(),
            decimal_sep: ',',
            thousands_sep: '.',
            date_format: "%d/%m/%Y",
        }
    }

    /// Picks a preset from a BCP 47-ish locale tag, falling back to en-US.
    pub fn for_locale(locale: &str) -> Self {
        match locale {
            "pt-BR" | "pt" => Self::pt_br(),
            _ => Self::en_us(),
        }
    }

    /// Renders `amount` with symbol, grouping, and two decimal places,
    /// e.g. `R$ 1.234,56` or `$1,234.56`. Negatives keep a leading minus.
    pub fn amount(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let fraction = cents % 100;

        let digits = whole.to_string();
        let mut grouped = String::new();
        for (position, ch) in digits.chars().enumerate() {
            if position > 0 && (digits.len() - position) % 3 == 0 {
                grouped.push(self.thousands_sep);
            }
            grouped.push(ch);
        }

        format!(
            "{}{}{}{}{:02}",
            if negative { "-" } else { "" },
            self.symbol,
            grouped,
            self.decimal_sep,
            fraction
        )
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(self.date_format).to_string()
    }
}
