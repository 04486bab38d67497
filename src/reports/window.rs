//! Report periods, step sizes and the date windows they resolve to
//!
//! "Monthly" and "yearly" always mean the month or year containing *today*,
//! not a month the user navigated to. Callers pass `today` explicitly.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Transaction;

/// Which slice of time a list or report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Everything on record
    All,
    /// The current calendar month
    #[default]
    Monthly,
    /// The current calendar year
    Yearly,
    /// An explicit inclusive date range; a missing bound makes it unbounded
    Custom {
        #[serde(default)]
        start: Option<NaiveDate>,
        #[serde(default)]
        end: Option<NaiveDate>,
    },
}

impl Period {
    pub fn custom(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::Custom { start, end }
    }

    /// Build a period from a CLI-style name plus optional bounds.
    ///
    /// Bounds are only meaningful for `custom`; giving bounds without a name
    /// implies `custom`.
    pub fn parse(
        name: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<Self> {
        match name.map(|n| n.trim().to_lowercase()) {
            None if start.is_some() || end.is_some() => Some(Self::custom(start, end)),
            None => None,
            Some(name) => match name.as_str() {
                "all" => Some(Self::All),
                "month" | "monthly" => Some(Self::Monthly),
                "year" | "yearly" => Some(Self::Yearly),
                "custom" | "range" => Some(Self::custom(start, end)),
                _ => None,
            },
        }
    }

    /// Whether a transaction dated `date` belongs to this period, as used by
    /// the list view
    pub fn includes(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            Self::All => true,
            Self::Monthly => date.year() == today.year() && date.month() == today.month(),
            Self::Yearly => date.year() == today.year(),
            Self::Custom {
                start: Some(start),
                end: Some(end),
            } => start <= date && date <= end,
            Self::Custom { .. } => true,
        }
    }

    /// Resolve the concrete window a report walks over.
    ///
    /// Returns `None` when there is nothing to walk: a custom period missing a
    /// bound or with `start > end`, or `All` with no transactions.
    pub fn resolve_window(
        &self,
        today: NaiveDate,
        transactions: &[Transaction],
    ) -> Option<DateWindow> {
        match *self {
            Self::All => {
                let start = transactions.iter().map(|t| t.date).min()?;
                let end = transactions.iter().map(|t| t.date).max()?;
                DateWindow::new(start, end)
            }
            Self::Monthly => {
                let start = first_of_month(today)?;
                DateWindow::new(start, last_of_month(today)?)
            }
            Self::Yearly => DateWindow::new(
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            ),
            Self::Custom { start, end } => DateWindow::new(start?, end?),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all time"),
            Self::Monthly => write!(f, "this month"),
            Self::Yearly => write!(f, "this year"),
            Self::Custom { start, end } => {
                let show = |d: &Option<NaiveDate>| d.map_or("…".to_string(), |d| d.to_string());
                write!(f, "{} to {}", show(start), show(end))
            }
        }
    }
}

/// Bucketing granularity for the cash-flow series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepSize {
    #[default]
    Day,
    Week,
    Month,
}

impl StepSize {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Some(Self::Day),
            "week" | "weekly" => Some(Self::Week),
            "month" | "monthly" => Some(Self::Month),
            _ => None,
        }
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// An inclusive, non-empty range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// `None` if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the window, both ends included
    pub fn len_days(&self) -> usize {
        // start <= end is guaranteed by the constructor
        (self.end - self.start).num_days() as usize + 1
    }

    /// Every day of the window in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Step anchors for a cash-flow walk: `start`, then every 1 day, 7 days or
    /// calendar month, while the anchor is still inside the window.
    ///
    /// Month anchors are computed from `start` rather than from the previous
    /// anchor, so a walk starting on the 31st clamps each month separately
    /// instead of drifting to the 28th.
    pub fn anchors(&self, step: StepSize) -> Vec<NaiveDate> {
        let mut anchors = Vec::new();
        for i in 0u32.. {
            let anchor = match step {
                StepSize::Day => self.start.checked_add_days(Days::new(u64::from(i))),
                StepSize::Week => self.start.checked_add_days(Days::new(7 * u64::from(i))),
                StepSize::Month => self.start.checked_add_months(Months::new(i)),
            };
            match anchor {
                Some(anchor) if anchor <= self.end => anchors.push(anchor),
                _ => break,
            }
        }
        anchors
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// Last day of the month containing `date`
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Sunday-start week containing `date`, as an inclusive (first, last) pair
pub fn sunday_week(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Sun);
    (week.first_day(), week.last_day())
}
