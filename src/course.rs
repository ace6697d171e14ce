// used to print out readable forms of a course
use std::fmt;
// used for the structural hash and the stable fingerprint
use std::hash::{Hash, Hasher};

use seahash::SeaHasher;
use serde::Serialize;

use crate::error::Result;
use crate::section::Section;
use crate::tag::{FromTag, Tag};
use crate::value::SafeInt;

/// Grade type label of courses graded as pass/fail.
pub const PASS_FAIL: &str = "satisfactory/unsatisfactory";

/// Credit hours of a course, collapsed when the range is a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Credits {
    Fixed(i64),
    Range(i64, i64),
}

/// A catalog entry and its sections. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    name: String,
    dept: String,
    num: SafeInt,
    cred: (i64, i64),
    grade_type: String,
    sections: Vec<Section>,
}

impl Course {
    pub fn new(
        name: &str,
        dept: &str,
        num: SafeInt,
        credmin: i64,
        credmax: i64,
        grade_type: &str,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            dept: dept.trim().to_string(),
            num,
            cred: (credmin, credmax),
            grade_type: grade_type.trim().to_string(),
            sections,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn dept(&self) -> &str {
        &self.dept
    }
    pub fn num(&self) -> &SafeInt {
        &self.num
    }
    /// Always the (min, max) pair, see [`Course::credits`] for the collapsed form.
    pub fn cred(&self) -> (i64, i64) {
        self.cred
    }
    pub fn grade_type(&self) -> &str {
        &self.grade_type
    }
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
    pub fn credits(&self) -> Credits {
        match self.cred {
            (min, max) if min == max => Credits::Fixed(min),
            (min, max) => Credits::Range(min, max),
        }
    }
    pub fn is_pass_or_fail(&self) -> bool {
        self.grade_type.to_lowercase() == PASS_FAIL
    }
    /// "dept num", e.g. "CSCI 1100".
    pub fn code(&self) -> String {
        format!("{} {}", self.dept, self.num)
    }
    /// A hash that stays the same across runs and processes.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = SeaHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

// Covers the same fields as equality.
impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.dept.hash(state);
        self.num.hash(state);
        self.cred.hash(state);
        self.grade_type.hash(state);
        self.sections.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.dept, self.num)
    }
}

impl FromTag for Course {
    fn from_tag<T: Tag>(tag: &T) -> Result<Self> {
        let mut sections = Vec::new();
        for child in tag.children() {
            if !child.is("section") {
                return Err(tag.unexpected(child));
            }
            sections.push(Section::from_tag(child)?);
        }
        let course = Course::new(
            tag.required("name")?,
            tag.required("dept")?,
            SafeInt::Integer(tag.integer("num")?),
            tag.integer("credmin")?,
            tag.integer("credmax")?,
            tag.required("gradetype")?,
            sections,
        );
        tracing::debug!(code = %course.code(), sections = course.sections.len(), "course built");
        Ok(course)
    }
}
