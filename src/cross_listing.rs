use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::tag::{FromTag, Tag};
use crate::value::{OtherHasher, SafeInt};

/// A crosslisted set of CRNs sharing one pool of seats.
/// This is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossListing {
    crns: HashSet<SafeInt, OtherHasher>,
    seats: i64,
}

impl CrossListing {
    pub fn new<C>(crns: C, seats: i64) -> Self
    where
        C: IntoIterator<Item = SafeInt>,
    {
        Self {
            crns: crns.into_iter().collect(),
            seats,
        }
    }
    pub fn crns(&self) -> &HashSet<SafeInt, OtherHasher> {
        &self.crns
    }
    pub fn seats(&self) -> i64 {
        self.seats
    }
    pub fn contains(&self, crn: &SafeInt) -> bool {
        self.crns.contains(crn)
    }
}

impl FromTag for CrossListing {
    fn from_tag<T: Tag>(tag: &T) -> Result<Self> {
        let mut crns = Vec::new();
        for child in tag.children() {
            if !child.is("crn") {
                return Err(tag.unexpected(child));
            }
            let text = child.text().ok_or_else(|| CatalogError::MissingAttribute {
                tag: child.identity(),
                attribute: "text".to_string(),
            })?;
            crns.push(SafeInt::parse(text.trim()));
        }
        Ok(CrossListing::new(crns, tag.integer("seats")?))
    }
}
