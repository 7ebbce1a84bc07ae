//! # stuckinside-core — Lockdown Tracker Domain Logic
//!
//! Pure domain logic for the Stuck Inside lockdown tracker. The crate owns
//! everything between the raw OxCGRT policy feed and the per-country
//! summaries the page renders:
//!
//! - [`country`] — static ISO 3166 table with alpha-3 and internet-label
//!   lookups (feed records resolve by alpha-3, the viewer's subdomain label
//!   resolves by internet code).
//! - [`dates`] — compact `YYYYMMDD` date parsing, the open-ended `"null"`
//!   sentinel, and civil calendar-day arithmetic.
//! - [`policy`] — stay-at-home severity values mapped to their fixed
//!   human-readable descriptions.
//! - [`record`] — feed wire types, normalized records, and the
//!   normalization pass that drops unresolvable rows.
//! - [`aggregate`] — grouping normalized records into one
//!   [`CountrySummary`](record::CountrySummary) per country.
//!
//! ## Crate Policy
//!
//! No I/O and no async — every function here is deterministic given its
//! inputs. Fetching the feed lives in `stuckinside-feed`; serving pages
//! lives in `stuckinside-api`.

pub mod aggregate;
pub mod country;
pub mod dates;
pub mod error;
pub mod policy;
pub mod record;

pub use aggregate::{aggregate, LatestMode};
pub use country::{by_internet, by_iso3, Country};
pub use dates::{days_since, PolicyDate};
pub use error::CoreError;
pub use policy::status_text;
pub use record::{normalize, CountrySummary, NormalizedRecord, RawRecord};
