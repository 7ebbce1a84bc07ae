//! # stuckinside-feed — Policy Feed HTTP Client
//!
//! Typed reqwest client for the aggregated Oxford COVID-19 policy-tracker
//! feed (a Workbench module that publishes the tracker as a flat JSON array
//! of per-country policy rows).
//!
//! The client owns the transport concerns the page pipeline should not see:
//! per-request timeout, bounded retry on transient transport failures, and
//! an error taxonomy that distinguishes "the network failed"
//! ([`FeedError::Http`]) from "the feed said no" ([`FeedError::Status`])
//! from "the body was not a record array" ([`FeedError::Parse`]).

mod client;
mod config;
mod error;
mod retry;

pub use client::FeedClient;
pub use config::{ConfigError, FeedConfig, DEFAULT_FEED_URL};
pub use error::FeedError;
