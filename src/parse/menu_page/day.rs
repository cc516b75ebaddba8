use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::ser::SerializeMap;

use super::category::{Category, CATEGORIES, CATEGORY_COUNT};

/// One weekday of the menu: its date and one text per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    items: [String; CATEGORY_COUNT],
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            items: Default::default(),
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// French date heading, ex. `lundi 14/10/24`.
    pub fn label(&self) -> String {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::default()))
            .format_localized("%A %d/%m/%y", Locale::fr_FR)
            .to_string()
    }

    /// Text of the category named `name`, `None` if there is no such category.
    pub fn get(&self, name: &str) -> Option<&str> {
        Category::position(name).map(|i| self.items[i].as_str())
    }

    pub fn set(&mut self, index: usize, text: &str) {
        self.items[index] = text.to_owned();
    }

    pub fn items(&self) -> impl Iterator<Item = (&'static str, &str)> {
        CATEGORIES
            .iter()
            .zip(self.items.iter())
            .map(|(c, item)| (c.name(), item.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(String::is_empty)
    }
}

impl serde::Serialize for Day {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT + 1))?;
        map.serialize_entry("date", &self.date)?;
        for (name, item) in self.items() {
            map.serialize_entry(name, item)?;
        }
        map.end()
    }
}
