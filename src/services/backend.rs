//! PostgREST backend client
//!
//! `EventStore` is the read boundary the fetch layer is generic over;
//! `SupabaseClient` is the production implementation. A client handle only
//! exists after a successful `connect`, so no fetch can run against an
//! unconnected backend.

use crate::config::BackendConfig;
use crate::types::{CompanyRecord, EventRecord, EventboardError, Result, SessionRecord};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Row bound for the dedicated companies source
pub const COMPANY_LIMIT: usize = 20;

/// Pre-filter row bound for the global profiles scan
pub const PROFILE_SCAN_LIMIT: usize = 20;

/// PostgREST "not exactly one row" status for object-accept requests
const NOT_SINGLE_STATUS: u16 = 406;

/// Max body bytes echoed into backend error details
const ERROR_DETAIL_LIMIT: usize = 200;

/// Read operations the fetch layer needs from the backend
#[allow(async_fn_in_trait)]
pub trait EventStore {
    /// Exactly-one-or-error lookup of an event by id
    async fn event_by_id(&self, id: &str) -> Result<EventRecord>;

    /// All sessions for an event, start_time ascending
    async fn sessions_for_event(&self, event_id: &str) -> Result<Vec<SessionRecord>>;

    /// Dedicated companies source, bounded
    async fn companies(&self, limit: usize) -> Result<Vec<CompanyRecord>>;

    /// Non-null company names projected from the event's participants
    async fn participant_companies(&self, event_id: &str) -> Result<Vec<String>>;

    /// Non-null company names projected from profiles (not event-scoped), bounded
    async fn profile_companies(&self, limit: usize) -> Result<Vec<String>>;
}

/// Connected Supabase/PostgREST client
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base: String,
}

/// Projection row for company-name queries
#[derive(Debug, Deserialize)]
struct CompanyNameRow {
    company: Option<String>,
}

impl SupabaseClient {
    /// Establish a client for the configured backend.
    ///
    /// The access key is baked into default headers (apikey + bearer), so
    /// every request through this handle is authenticated the same way.
    pub fn connect(config: &BackendConfig) -> Result<Self> {
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| EventboardError::Config("access key is not a valid header value".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| EventboardError::Config("access key is not a valid header value".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        let base = format!("{}/rest/v1", config.url.trim_end_matches('/'));

        Ok(Self { http, base })
    }

    /// GET a PostgREST path+query and decode the JSON body.
    ///
    /// `single` requests the object representation, which the backend
    /// enforces as exactly-one-or-error.
    async fn get_json<T: DeserializeOwned>(&self, path_query: &str, single: bool) -> Result<T> {
        let url = format!("{}/{}", self.base, path_query);
        let mut request = self.http.get(&url);
        if single {
            request = request.header(ACCEPT, "application/vnd.pgrst.object+json");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let mut detail = response.text().await.unwrap_or_default();
            detail.truncate(ERROR_DETAIL_LIMIT);
            return Err(EventboardError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

impl EventStore for SupabaseClient {
    async fn event_by_id(&self, id: &str) -> Result<EventRecord> {
        let query = format!("events?id=eq.{}&select=*", id);
        match self.get_json(&query, true).await {
            Err(EventboardError::Backend { status, .. }) if status == NOT_SINGLE_STATUS => {
                Err(EventboardError::EventNotFound(id.to_string()))
            }
            other => other,
        }
    }

    async fn sessions_for_event(&self, event_id: &str) -> Result<Vec<SessionRecord>> {
        let query = format!(
            "sessions?event_id=eq.{}&select=*&order=start_time.asc",
            event_id
        );
        self.get_json(&query, false).await
    }

    async fn companies(&self, limit: usize) -> Result<Vec<CompanyRecord>> {
        let query = format!("companies?select=*&limit={}", limit);
        self.get_json(&query, false).await
    }

    async fn participant_companies(&self, event_id: &str) -> Result<Vec<String>> {
        let query = format!(
            "event_participants?select=company&event_id=eq.{}&company=not.is.null",
            event_id
        );
        let rows: Vec<CompanyNameRow> = self.get_json(&query, false).await?;
        Ok(rows.into_iter().filter_map(|row| row.company).collect())
    }

    async fn profile_companies(&self, limit: usize) -> Result<Vec<String>> {
        let query = format!(
            "profiles?select=company&company=not.is.null&limit={}",
            limit
        );
        let rows: Vec<CompanyNameRow> = self.get_json(&query, false).await?;
        Ok(rows.into_iter().filter_map(|row| row.company).collect())
    }
}
