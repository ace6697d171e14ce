use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::Result;
use crate::period::Period;
use crate::tag::{FromTag, Tag};
use crate::value::{OtherHasher, SafeInt};

/// A section is a particular timeslot to take a given course. It is
/// uniquely represented in the registration system by its CRN.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    crn: SafeInt,
    num: SafeInt,
    seats_taken: i64,
    seats_total: i64,
    periods: Vec<Period>,
    notes: HashSet<String, OtherHasher>,
}

impl Section {
    pub fn new<N>(
        crn: SafeInt,
        num: SafeInt,
        seats_taken: i64,
        seats_total: i64,
        periods: Vec<Period>,
        notes: N,
    ) -> Self
    where
        N: IntoIterator<Item = String>,
    {
        Self {
            crn,
            num,
            seats_taken,
            seats_total,
            periods,
            notes: notes.into_iter().collect(),
        }
    }
    pub fn crn(&self) -> &SafeInt {
        &self.crn
    }
    pub fn num(&self) -> &SafeInt {
        &self.num
    }
    pub fn seats_taken(&self) -> i64 {
        self.seats_taken
    }
    pub fn seats_total(&self) -> i64 {
        self.seats_total
    }
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }
    pub fn notes(&self) -> &HashSet<String, OtherHasher> {
        &self.notes
    }
    /// Invalid sections have only notes and no real section number.
    pub fn is_valid(&self) -> bool {
        self.num.is_integer()
    }
    /// The section is full and not accepting any more students.
    pub fn is_filled(&self) -> bool {
        self.seats_taken >= self.seats_total
    }
    /// Negative when more seats are taken than available.
    pub fn seats_left(&self) -> i64 {
        self.seats_total - self.seats_taken
    }
}

// seat counts and notes do not take part in equality
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.crn == other.crn && self.num == other.num && self.periods == other.periods
    }
}
impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crn.hash(state);
        self.num.hash(state);
        self.periods.hash(state);
    }
}

impl FromTag for Section {
    fn from_tag<T: Tag>(tag: &T) -> Result<Self> {
        let mut periods = Vec::new();
        let mut notes = Vec::new();
        for child in tag.children() {
            if child.is("period") {
                periods.push(Period::from_tag(child)?);
            } else if child.is("note") {
                notes.push(child.text().unwrap_or("").trim().to_string());
            } else {
                return Err(tag.unexpected(child));
            }
        }
        Ok(Section::new(
            SafeInt::parse(tag.required("crn")?),
            SafeInt::parse(tag.required("num")?),
            tag.integer("students")?,
            tag.integer("seats")?,
            periods,
            notes,
        ))
    }
}
