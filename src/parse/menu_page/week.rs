use chrono::{Datelike, Days, NaiveDate, Weekday};
use scraper::ElementRef;

use super::category::{Category, CATEGORIES};
use super::day::Day;
use crate::parse::{cell_text::first_line, Error};
use crate::static_selector;

/// Monday to Friday.
pub const DAYS_PER_WEEK: usize = 5;

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Week {
    days: [Day; DAYS_PER_WEEK],
}

impl Week {
    /// An empty week whose first day is `monday`.
    pub fn starting(monday: NaiveDate) -> Self {
        Self {
            days: [0, 1, 2, 3, 4].map(|n| Day::new(monday + Days::new(n))),
        }
    }

    pub fn from_html_element(monday: NaiveDate, element: ElementRef) -> Result<Self, Error> {
        let mut week = Self::starting(monday);
        week.fill(element)?;
        Ok(week)
    }

    pub fn monday(&self) -> NaiveDate {
        self.days[0].date()
    }

    #[cfg(test)]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// The record for `weekday`, `None` on weekends.
    pub fn day(&self, weekday: Weekday) -> Option<&Day> {
        let index = usize::try_from(weekday.num_days_from_monday()).ok()?;
        self.days.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Day::is_empty)
    }

    /// Copies every category of the menu table found under `element` into the days.
    ///
    /// Only a missing menu table is an error. Missing rows or cells are logged
    /// and leave the affected fields empty.
    pub fn fill(&mut self, element: ElementRef) -> Result<(), Error> {
        static_selector!(
            MENU_SELECTOR <- "div.menu";
            TABLE_SELECTOR <- "table";
            ROW_SELECTOR <- "tr";
        );
        let menu = element
            .select(&MENU_SELECTOR)
            .next()
            .ok_or_else(|| Error::html_parse_error("Menu element not found"))?;
        let table = menu
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or_else(|| Error::html_parse_error("Menu element has no table"))?;
        let rows: Vec<ElementRef> = table.select(&ROW_SELECTOR).collect();

        for (index, category) in CATEGORIES.iter().enumerate() {
            self.fill_category(index, category, &rows);
        }
        log::info!("Daily menus retrieved!");
        Ok(())
    }

    fn fill_category(&mut self, index: usize, category: &Category, rows: &[ElementRef]) {
        static_selector!(CELL_SELECTOR <- "td");
        let Some(row) = rows.get(category.row()) else {
            log::error!(
                "{}",
                Error::missing_cell_error(&format!(
                    "no row {} for {}",
                    category.row(),
                    category.name()
                ))
            );
            return;
        };
        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();

        for (offset, day) in (1..=DAYS_PER_WEEK).zip(self.days.iter_mut()) {
            match cell(&cells, category.column(offset)) {
                Ok(Some(text)) => day.set(index, text),
                Ok(None) => {}
                Err(e) => log::error!("{e}, failed at {offset}"),
            }
        }
    }
}

fn cell<'a>(cells: &[ElementRef<'a>], column: usize) -> Result<Option<&'a str>, Error> {
    let cell = cells.get(column).ok_or_else(|| {
        Error::missing_cell_error(&format!(
            "column {column} out of range for a row of {} cells",
            cells.len()
        ))
    })?;
    Ok(first_line(*cell))
}
