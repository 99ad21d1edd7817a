//! Supabase record store adapter.
//!
//! Implements `RecordStore` over Supabase's PostgREST interface. Public
//! reads use the anon key; order handling, draft reads and inserts use the
//! service-role key.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::config::SupabaseConfig;
use crate::domain::foundation::{DomainError, DraftId, ExternalOrderId, OrderRecordId};
use crate::domain::memorial::{Draft, Memorial, NewMemorial, Slug};
use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::ports::{RecordStore, StorePing};

use super::rows::{parse_content_range_total, NewOrderRow, OrderRow, DRAFT_COLUMNS, ORDER_COLUMNS};

const ORDERS: &str = "orders";
const DRAFTS: &str = "burial_drafts";
const MEMORIALS: &str = "memorials";

/// Which key a request is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Service,
}

/// Supabase connection settings. Absent values are reported per call.
#[derive(Clone)]
pub struct SupabaseStoreConfig {
    rest_url: Option<String>,
    anon_key: Option<SecretString>,
    service_role_key: Option<SecretString>,
}

impl SupabaseStoreConfig {
    /// Create settings from a project URL and keys.
    pub fn new(
        project_url: impl Into<String>,
        anon_key: impl Into<String>,
        service_role_key: impl Into<String>,
    ) -> Self {
        let project_url = project_url.into();
        let rest_url = if project_url.trim().is_empty() {
            None
        } else {
            Some(format!("{}/rest/v1", project_url.trim().trim_end_matches('/')))
        };

        Self {
            rest_url,
            anon_key: secret(anon_key.into()),
            service_role_key: secret(service_role_key.into()),
        }
    }

    /// Create settings from the loaded application configuration.
    pub fn from_app_config(config: &SupabaseConfig) -> Self {
        Self::new(
            config.url.clone(),
            config.anon_key.clone(),
            config.service_role_key.clone(),
        )
    }
}

/// PostgREST-backed record store.
pub struct SupabaseRecordStore {
    config: SupabaseStoreConfig,
    http_client: reqwest::Client,
}

impl SupabaseRecordStore {
    /// Create a store sharing the given HTTP client.
    pub fn new(config: SupabaseStoreConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn request(
        &self,
        method: reqwest::Method,
        table: &str,
        access: Access,
    ) -> Result<reqwest::RequestBuilder, DomainError> {
        let base = self
            .config
            .rest_url
            .as_deref()
            .ok_or_else(|| DomainError::configuration_missing("SUPABASE_URL"))?;

        let key = match access {
            Access::Public => self
                .config
                .anon_key
                .as_ref()
                .ok_or_else(|| DomainError::configuration_missing("SUPABASE_ANON_KEY"))?,
            Access::Service => self
                .config
                .service_role_key
                .as_ref()
                .ok_or_else(|| DomainError::configuration_missing("SUPABASE_SERVICE_ROLE_KEY"))?,
        };

        Ok(self
            .http_client
            .request(method, format!("{}/{}", base, table))
            .header("apikey", key.expose_secret())
            .bearer_auth(key.expose_secret()))
    }

    async fn send(
        &self,
        table: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, DomainError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(table, error = %e, "Supabase request failed");
            DomainError::database(format!("Supabase request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(table, status = status.as_u16(), error = %error_text, "Supabase returned an error");
            return Err(DomainError::database(format!(
                "Supabase {} error: {}",
                table, error_text
            ))
            .with_detail("status", status.as_u16().to_string()));
        }

        Ok(response)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        access: Access,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, DomainError> {
        let request = self.request(reqwest::Method::GET, table, access)?.query(query);
        let response = self.send(table, request).await?;
        response.json().await.map_err(|e| {
            DomainError::database(format!("Failed to decode {} rows: {}", table, e))
        })
    }

    async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, DomainError> {
        let request = self
            .request(reqwest::Method::POST, table, Access::Service)?
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.send(table, request).await?;

        let mut rows: Vec<T> = response.json().await.map_err(|e| {
            DomainError::database(format!("Failed to decode inserted {} row: {}", table, e))
        })?;
        if rows.is_empty() {
            return Err(DomainError::database(format!(
                "Supabase returned no {} row after insert",
                table
            )));
        }
        Ok(rows.swap_remove(0))
    }
}

#[async_trait]
impl RecordStore for SupabaseRecordStore {
    async fn find_order_by_external_id(
        &self,
        external_id: &ExternalOrderId,
    ) -> Result<Option<Order>, DomainError> {
        let rows: Vec<OrderRow> = self
            .select(
                ORDERS,
                Access::Service,
                &[
                    ("select", ORDER_COLUMNS.to_string()),
                    ("paypal_order_id", format!("eq.{}", external_id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        rows.into_iter().next().map(Order::try_from).transpose()
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let row: OrderRow = self.insert(ORDERS, &NewOrderRow::from(order)).await?;
        Order::try_from(row)
    }

    async fn mark_order_paid(&self, id: &OrderRecordId) -> Result<(), DomainError> {
        let request = self
            .request(reqwest::Method::PATCH, ORDERS, Access::Service)?
            .query(&[("id", format!("eq.{}", id))])
            .json(&json!({ "status": OrderStatus::Paid.as_str() }));
        self.send(ORDERS, request).await?;
        Ok(())
    }

    async fn find_draft(&self, id: &DraftId) -> Result<Option<Draft>, DomainError> {
        let rows: Vec<Draft> = self
            .select(
                DRAFTS,
                Access::Service,
                &[
                    ("select", DRAFT_COLUMNS.to_string()),
                    ("id", format!("eq.{}", id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_memorial(&self, memorial: &NewMemorial) -> Result<Memorial, DomainError> {
        self.insert(MEMORIALS, memorial).await
    }

    async fn find_memorial_by_slug(&self, slug: &Slug) -> Result<Option<Memorial>, DomainError> {
        let rows: Vec<Memorial> = self
            .select(
                MEMORIALS,
                Access::Public,
                &[
                    ("select", "*".to_string()),
                    ("slug", format!("eq.{}", slug)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn list_memorials(&self, limit: usize) -> Result<Vec<Memorial>, DomainError> {
        self.select(
            MEMORIALS,
            Access::Public,
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc.nullslast".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn ping(&self) -> Result<StorePing, DomainError> {
        let request = self
            .request(reqwest::Method::GET, MEMORIALS, Access::Public)?
            .header("Prefer", "count=exact")
            .query(&[("select", "id"), ("limit", "1")]);
        let response = self.send(MEMORIALS, request).await?;

        let memorials_count = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);

        Ok(StorePing { memorials_count })
    }
}

fn secret(value: String) -> Option<SecretString> {
    if value.trim().is_empty() {
        None
    } else {
        Some(SecretString::new(value))
    }
}
