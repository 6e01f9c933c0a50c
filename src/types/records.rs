//! Record types and derived views for event data

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// The conference event all sessions and companies are scoped to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A scheduled talk or activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub id: String,
    #[serde(default)]
    pub event_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

/// A sponsor company, from whichever source the fallback chain hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyRecord {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl CompanyRecord {
    /// Company derived from a bare name projection (participants/profiles)
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_url: None,
        }
    }
}

/// Summary counts over the fetched collections
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct EventStats {
    pub sessions: usize,
    pub speakers: usize,
    pub companies: usize,
    pub tracks: usize,
}

/// Everything one page load fetches, returned as a value from the
/// orchestration so derived views are pure functions of it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventData {
    pub event: EventRecord,
    pub sessions: Vec<SessionRecord>,
    pub companies: Vec<CompanyRecord>,
}

impl EventData {
    /// Count sessions, distinct speakers, distinct tracks, and companies.
    ///
    /// Speaker/track identity is exact string equality — no case or
    /// whitespace normalization.
    pub fn stats(&self) -> EventStats {
        let mut speakers: HashSet<&str> = HashSet::new();
        let mut tracks: HashSet<&str> = HashSet::new();

        for session in &self.sessions {
            if let Some(speaker) = &session.speaker {
                speakers.insert(speaker);
            }
            if let Some(track) = &session.track {
                tracks.insert(track);
            }
        }

        EventStats {
            sessions: self.sessions.len(),
            speakers: speakers.len(),
            companies: self.companies.len(),
            tracks: tracks.len(),
        }
    }

    /// Group sessions by calendar date of start_time in the given offset.
    ///
    /// Sessions without a start_time are excluded here (they still count in
    /// `stats()`). Within a day, source order is preserved; the source
    /// collection is already start_time ascending.
    pub fn sessions_by_day(&self, offset: FixedOffset) -> BTreeMap<NaiveDate, Vec<&SessionRecord>> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&SessionRecord>> = BTreeMap::new();

        for session in &self.sessions {
            let Some(start) = session.start_time else {
                continue;
            };
            let date = start.with_timezone(&offset).date_naive();
            by_day.entry(date).or_default().push(session);
        }

        by_day
    }

    pub fn sponsor_tiers(&self) -> SponsorTiers {
        SponsorTiers::from_companies(&self.companies)
    }
}

/// Sponsor ranking buckets derived purely from list position and count
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SponsorTiers {
    pub platinum: Vec<CompanyRecord>,
    pub gold: Vec<CompanyRecord>,
    pub silver: Vec<CompanyRecord>,
}

impl SponsorTiers {
    /// Split N companies into platinum = min(3, N/3), gold = min(5, N/2)
    /// of the remainder, silver = the rest. N=6 gives 2/3/1.
    pub fn from_companies(companies: &[CompanyRecord]) -> Self {
        let n = companies.len();
        let platinum_count = (n / 3).min(3);
        let gold_count = (n / 2).min(5);
        let gold_end = (platinum_count + gold_count).min(n);

        Self {
            platinum: companies[..platinum_count].to_vec(),
            gold: companies[platinum_count..gold_end].to_vec(),
            silver: companies[gold_end..].to_vec(),
        }
    }
}
