//! # API Route Modules
//!
//! - `page` — `GET /`: the server-rendered tracker page; the viewer's
//!   country comes from the Host header's leftmost label.
//! - `countries` — `GET /v1/countries`: the same summary data as JSON.

pub mod countries;
pub mod page;
