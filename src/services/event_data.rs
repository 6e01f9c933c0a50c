//! Fetch orchestration for one page load
//!
//! Recovery policy per record kind:
//! - event: required — errors propagate and abort the load
//! - sessions, companies: optional — errors degrade to an empty collection
//!
//! Companies come from a three-tier fallback chain tried in strict order,
//! first success wins.

use crate::services::backend::{EventStore, COMPANY_LIMIT, PROFILE_SCAN_LIMIT};
use crate::types::{CompanyRecord, EventData, EventRecord, Result, SessionRecord};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// Max companies kept from the profiles fallback after dedup
const PROFILE_COMPANY_LIMIT: usize = 15;

/// Fetches the three record sets for one event
pub struct EventDataService<S> {
    store: S,
    event_id: String,
}

impl<S: EventStore> EventDataService<S> {
    pub fn new(store: S, event_id: impl Into<String>) -> Self {
        Self {
            store,
            event_id: event_id.into(),
        }
    }

    /// Fetch event, then sessions and companies concurrently.
    ///
    /// Only the event fetch can fail the load; the concurrent stage absorbs
    /// its own errors, and a failure in one side never cancels the other.
    pub async fn fetch_all(&self) -> Result<EventData> {
        let event = self.fetch_event().await?;
        let (sessions, companies) = tokio::join!(self.fetch_sessions(), self.fetch_companies());

        Ok(EventData {
            event,
            sessions,
            companies,
        })
    }

    /// Exactly-one-or-error fetch of the configured event
    pub async fn fetch_event(&self) -> Result<EventRecord> {
        match self.store.event_by_id(&self.event_id).await {
            Ok(event) => {
                info!(event = %event.name, "event record fetched");
                Ok(event)
            }
            Err(e) => {
                error!(event_id = %self.event_id, "event fetch failed: {}", e);
                Err(e)
            }
        }
    }

    /// All sessions for the event, start_time ascending; empty on error
    pub async fn fetch_sessions(&self) -> Vec<SessionRecord> {
        let sessions = degrade_to_empty(
            "sessions",
            self.store.sessions_for_event(&self.event_id).await,
        );
        debug!(count = sessions.len(), "sessions fetched");
        sessions
    }

    /// Three-tier company fallback; empty if every tier misses.
    ///
    /// 1. dedicated companies table (success = no error and at least one row)
    /// 2. participant company projection for the event
    /// 3. global profile projection, truncated after dedup
    pub async fn fetch_companies(&self) -> Vec<CompanyRecord> {
        match self.store.companies(COMPANY_LIMIT).await {
            Ok(companies) if !companies.is_empty() => {
                debug!(count = companies.len(), "companies fetched from companies table");
                return companies;
            }
            Ok(_) => debug!("companies table empty, trying participants"),
            Err(e) => warn!("companies table query failed: {}", e),
        }

        match self.store.participant_companies(&self.event_id).await {
            Ok(names) => {
                let companies: Vec<CompanyRecord> = dedup_first_occurrence(names)
                    .into_iter()
                    .map(CompanyRecord::from_name)
                    .collect();
                debug!(count = companies.len(), "companies derived from participants");
                return companies;
            }
            Err(e) => warn!("participant company query failed: {}", e),
        }

        match self.store.profile_companies(PROFILE_SCAN_LIMIT).await {
            Ok(names) => {
                let mut companies: Vec<CompanyRecord> = dedup_first_occurrence(names)
                    .into_iter()
                    .map(CompanyRecord::from_name)
                    .collect();
                companies.truncate(PROFILE_COMPANY_LIMIT);
                debug!(count = companies.len(), "companies derived from profiles");
                companies
            }
            Err(e) => {
                warn!("profile company query failed, no company source available: {}", e);
                Vec::new()
            }
        }
    }
}

/// Declared recovery for optional record kinds: log and continue with nothing
fn degrade_to_empty<T>(what: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!("{} fetch failed, continuing with none: {}", what, e);
            Vec::new()
        }
    }
}

/// Keep the first occurrence of each name, exact string equality
fn dedup_first_occurrence(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.into_iter().filter(|name| seen.insert(name.clone())).collect()
}
