use serde::Serialize;
use tracing::info;

use crate::course::Course;
use crate::cross_listing::CrossListing;
use crate::error::Result;
use crate::markup;
use crate::section::Section;
use crate::tag::{FromTag, Tag};
use crate::value::SafeInt;

/// A whole catalog document: its courses in document order and the
/// crosslistings that tie some of their sections together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    courses: Vec<Course>,
    cross_listings: Vec<CrossListing>,
}

impl Catalog {
    pub fn new(
        timestamp: Option<String>,
        courses: Vec<Course>,
        cross_listings: Vec<CrossListing>,
    ) -> Self {
        Self {
            timestamp,
            courses,
            cross_listings,
        }
    }
    /// Reads catalog markup and builds the catalog from its root element.
    pub fn parse(document: &str) -> Result<Self> {
        let root = markup::parse(document)?;
        Catalog::from_tag(&root)
    }
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
    pub fn cross_listings(&self) -> &[CrossListing] {
        &self.cross_listings
    }
    pub fn section_count(&self) -> usize {
        self.courses.iter().map(|c| c.sections().len()).sum()
    }
    pub fn course(&self, dept: &str, num: &SafeInt) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.dept() == dept && c.num() == num)
    }
    /// The section registered under the given CRN, together with its course.
    pub fn section(&self, crn: &SafeInt) -> Option<(&Course, &Section)> {
        self.courses.iter().find_map(|course| {
            course
                .sections()
                .iter()
                .find(|s| s.crn() == crn)
                .map(|section| (course, section))
        })
    }
    pub fn cross_listing_for(&self, crn: &SafeInt) -> Option<&CrossListing> {
        self.cross_listings.iter().find(|x| x.contains(crn))
    }
}

impl FromTag for Catalog {
    fn from_tag<T: Tag>(tag: &T) -> Result<Self> {
        let mut courses = Vec::new();
        let mut cross_listings = Vec::new();
        for child in tag.children() {
            if child.is("course") {
                courses.push(Course::from_tag(child)?);
            } else if child.is("crosslisting") {
                cross_listings.push(CrossListing::from_tag(child)?);
            } else {
                return Err(tag.unexpected(child));
            }
        }
        let catalog = Catalog::new(
            tag.attribute("timestamp").map(str::to_string),
            courses,
            cross_listings,
        );
        info!(
            courses = catalog.courses.len(),
            sections = catalog.section_count(),
            cross_listings = catalog.cross_listings.len(),
            "catalog complete"
        );
        Ok(catalog)
    }
}
