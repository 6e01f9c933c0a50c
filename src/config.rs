//! Backend addressing and view configuration
//!
//! The backend is addressed by {endpoint URL, access key, event id}, supplied
//! via environment variables with CLI overrides. The day-grouping time zone is
//! an explicit UTC offset rather than whatever the host system is set to.

use crate::types::{EventboardError, Result};
use chrono::FixedOffset;
use std::env;

const ENV_URL: &str = "EVENTBOARD_URL";
const ENV_KEY: &str = "EVENTBOARD_KEY";
const ENV_EVENT_ID: &str = "EVENTBOARD_EVENT_ID";
const ENV_UTC_OFFSET: &str = "EVENTBOARD_UTC_OFFSET";

/// Resolved backend configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Supabase project URL, e.g. https://xyz.supabase.co
    pub url: String,
    /// anon/service access key sent as apikey + bearer token
    pub api_key: String,
    /// The event all session/participant queries are scoped to
    pub event_id: String,
    /// Offset used to turn session start times into calendar dates
    pub utc_offset: FixedOffset,
}

impl BackendConfig {
    /// Build from environment variables, letting CLI flags override each field
    pub fn resolve(
        url: Option<String>,
        api_key: Option<String>,
        event_id: Option<String>,
        utc_offset: Option<String>,
    ) -> Result<Self> {
        let url = url
            .or_else(|| env::var(ENV_URL).ok())
            .ok_or_else(|| EventboardError::Config(format!("{} not set", ENV_URL)))?;
        let api_key = api_key
            .or_else(|| env::var(ENV_KEY).ok())
            .ok_or_else(|| EventboardError::Config(format!("{} not set", ENV_KEY)))?;
        let event_id = event_id
            .or_else(|| env::var(ENV_EVENT_ID).ok())
            .ok_or_else(|| EventboardError::Config(format!("{} not set", ENV_EVENT_ID)))?;

        let utc_offset = match utc_offset.or_else(|| env::var(ENV_UTC_OFFSET).ok()) {
            Some(s) => parse_utc_offset(&s)?,
            None => FixedOffset::east_opt(0).unwrap(),
        };

        Ok(Self {
            url,
            api_key,
            event_id,
            utc_offset,
        })
    }
}

/// Parse a "+HH:MM" / "-HH:MM" offset string (also accepts "Z")
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("z") {
        return Ok(FixedOffset::east_opt(0).unwrap());
    }

    let invalid = || EventboardError::Config(format!("invalid UTC offset: {:?}", s));

    let (sign, rest) = match s.as_bytes()[0] {
        b'+' => (1i32, &s[1..]),
        b'-' => (-1i32, &s[1..]),
        _ => (1i32, s),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (
            h.parse::<i32>().map_err(|_| invalid())?,
            m.parse::<i32>().map_err(|_| invalid())?,
        ),
        None => (rest.parse::<i32>().map_err(|_| invalid())?, 0),
    };

    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
