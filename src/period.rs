// used for days of the week and times of day
use chrono::{NaiveTime, Weekday};
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::tag::{FromTag, Tag};

/// Classification of a period by its type code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MeetingType {
    Lecture,
    Lab,
    Studio,
    Testing,
    Recitation,
    Other(String),
}

impl MeetingType {
    pub fn from_code(code: &str) -> Self {
        // codes are compared case-sensitively
        match code {
            "LEC" => MeetingType::Lecture,
            "LAB" => MeetingType::Lab,
            "STU" => MeetingType::Studio,
            "TES" => MeetingType::Testing,
            "REC" => MeetingType::Recitation,
            other => MeetingType::Other(other.to_string()),
        }
    }
}

/// Weekday for a day index as used by the catalog, 0 being Monday.
pub fn weekday_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One recurring meeting block of a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    #[serde(rename = "type")]
    kind: String,
    instructor: String,
    location: String,
    // start and end share one option so that they are announced together
    time: Option<(i64, i64)>,
    days: Vec<Weekday>,
}

impl Period {
    /// Times that do not parse as integers (the "** TBA **" sentinel) leave
    /// the period unannounced.
    pub fn new(
        kind: &str,
        instructor: &str,
        start: &str,
        end: &str,
        location: &str,
        days: Vec<Weekday>,
    ) -> Self {
        let time = match (start.trim().parse::<i64>(), end.trim().parse::<i64>()) {
            (Ok(s), Ok(e)) => Some((s, e)),
            _ => {
                tracing::trace!(start, end, "period time to be announced");
                None
            }
        };
        Self {
            kind: kind.trim().to_string(),
            instructor: instructor.trim().to_string(),
            location: location.trim().to_string(),
            time,
            days,
        }
    }
    // It's intentional to keep the fields private and only expose them
    // through getters, since that makes a period immutable after creation.
    pub fn kind(&self) -> &str {
        &self.kind
    }
    pub fn instructor(&self) -> &str {
        &self.instructor
    }
    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn start(&self) -> Option<i64> {
        self.time.map(|(start, _)| start)
    }
    pub fn end(&self) -> Option<i64> {
        self.time.map(|(_, end)| end)
    }
    /// The time period hasn't been announced yet.
    pub fn tba(&self) -> bool {
        self.time.is_none()
    }
    pub fn weekdays(&self) -> &[Weekday] {
        &self.days
    }
    pub fn int_days(&self) -> Vec<u32> {
        self.days.iter().map(|d| d.num_days_from_monday()).collect()
    }
    pub fn days(&self) -> Vec<&'static str> {
        self.days.iter().map(|d| day_name(*d)).collect()
    }
    pub fn meeting_type(&self) -> MeetingType {
        MeetingType::from_code(&self.kind)
    }
    pub fn is_lecture(&self) -> bool {
        self.meeting_type() == MeetingType::Lecture
    }
    pub fn is_studio(&self) -> bool {
        self.meeting_type() == MeetingType::Studio
    }
    pub fn is_lab(&self) -> bool {
        self.meeting_type() == MeetingType::Lab
    }
    pub fn is_testing_period(&self) -> bool {
        self.meeting_type() == MeetingType::Testing
    }
    pub fn is_recitation(&self) -> bool {
        self.meeting_type() == MeetingType::Recitation
    }
    /// Start as a time of day, reading the value as HHMM.
    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start().and_then(hhmm)
    }
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end().and_then(hhmm)
    }
}

fn hhmm(value: i64) -> Option<NaiveTime> {
    let hour = u32::try_from(value / 100).ok()?;
    let minute = u32::try_from(value % 100).ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

impl FromTag for Period {
    fn from_tag<T: Tag>(tag: &T) -> Result<Self> {
        let mut days = Vec::new();
        for child in tag.children() {
            if !child.is("day") {
                return Err(tag.unexpected(child));
            }
            let text = child.text().unwrap_or("").trim();
            let day = text
                .parse::<u32>()
                .ok()
                .and_then(weekday_from_index)
                .ok_or_else(|| CatalogError::InvalidDay {
                    tag: child.identity(),
                    value: text.to_string(),
                })?;
            days.push(day);
        }
        Ok(Period::new(
            tag.required("type")?,
            tag.required("instructor")?,
            tag.required("start")?,
            tag.required("end")?,
            tag.required("location")?,
            days,
        ))
    }
}
