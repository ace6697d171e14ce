//! Coursecat – reads an academic course catalog into an immutable object graph.
//!
//! A catalog arrives as nested markup: courses containing sections, sections
//! containing meeting periods and notes, periods listing the days they meet.
//! Each level becomes a typed, read-only value:
//! * A [`course::Course`] is a catalog entry (department, number, name, credit
//!   range, grade type) owning its sections in document order.
//! * A [`section::Section`] is one registerable timeslot, identified by its
//!   CRN, with seat counters, periods and a set of notes.
//! * A [`period::Period`] is one recurring meeting block, possibly not yet
//!   announced (TBA).
//! * A [`cross_listing::CrossListing`] groups CRNs that share a seat pool.
//!
//! All fields are private and exposed through getters only, so values are
//! immutable once built. Identifiers that are usually numeric but sometimes
//! symbolic are kept as [`value::SafeInt`].
//!
//! ## Reading
//! Every entity implements [`tag::FromTag`], building itself (and, recursively,
//! its children) from any tree implementing [`tag::Tag`]. The schema is strict:
//! a child tag of an unknown kind fails with [`CatalogError::UnexpectedTag`]
//! carrying the offending tag's identity. The [`markup`] module provides a
//! reader for the XML style catalog documents.
//!
//! ## Quick Start
//! ```
//! use coursecat::catalog::Catalog;
//! use coursecat::course::Credits;
//! let catalog = Catalog::parse(r#"
//!   <courses>
//!     <course dept="CS" num="101" name="Intro" credmin="3" credmax="3" gradetype="Letter">
//!       <section crn="12345" num="1" students="30" seats="30">
//!         <period type="LEC" instructor="Smith" start="900" end="950" location="Rm1">
//!           <day>0</day><day>2</day><day>4</day>
//!         </period>
//!       </section>
//!     </course>
//!   </courses>"#).unwrap();
//! let course = &catalog.courses()[0];
//! assert_eq!(course.code(), "CS 101");
//! assert_eq!(course.credits(), Credits::Fixed(3));
//! assert!(course.sections()[0].is_filled());
//! ```

pub mod catalog;
pub mod course;
pub mod cross_listing;
pub mod error;
pub mod markup;
pub mod period;
pub mod section;
pub mod settings;
pub mod tag;
pub mod value;

pub use error::{CatalogError, Result};
