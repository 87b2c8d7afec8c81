//! Platform metafield store client
//!
//! Speaks the commerce platform's Admin GraphQL API over HTTPS. Banner
//! settings live as shop-owned metafields, one string value per key
//! under the banner namespace. Three fixed-shape documents cover every
//! store interaction: the shop identity lookup, the namespace read
//! query, and the per-key set mutation.

use async_trait::async_trait;
use promobar_common::settings::{EntryWrite, StoreEntry};
use promobar_common::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::types::SettingsStore;

const USER_AGENT: &str = "promobar-admin/0.1 (+https://github.com/promobar/promobar)";
const HTTP_TIMEOUT_SECS: u64 = 30;
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Read query page size; the banner namespace holds four keys
const METAFIELD_PAGE_SIZE: u32 = 10;

const SHOP_ID_QUERY: &str = "query { shop { id } }";

const METAFIELDS_QUERY: &str = r#"
query BannerMetafields($namespace: String!, $first: Int!) {
  shop {
    metafields(namespace: $namespace, first: $first) {
      edges {
        node {
          namespace
          key
          value
        }
      }
    }
  }
}"#;

const METAFIELDS_SET_MUTATION: &str = r#"
mutation SetBannerMetafield($metafields: [MetafieldsSetInput!]!) {
  metafieldsSet(metafields: $metafields) {
    metafields {
      key
      value
    }
    userErrors {
      field
      message
    }
  }
}"#;

/// Metafield store client
pub struct MetafieldClient {
    http_client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl MetafieldClient {
    pub fn new(shop_domain: &str, api_version: &str, access_token: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::StoreUnreachable(e.to_string()))?;

        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            shop_domain, api_version
        );

        Ok(Self {
            http_client,
            endpoint,
            access_token,
        })
    }

    /// Execute one GraphQL document and decode its data payload
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| Error::StoreUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Store(format!("store returned HTTP {}", status)));
        }

        let envelope: GraphqlEnvelope<T> = response
            .json()
            .await
            .map_err(|e| Error::Store(format!("malformed store response: {}", e)))?;

        if let Some(errors) = envelope.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::Store(messages.join("; ")));
        }

        envelope
            .data
            .ok_or_else(|| Error::Store("store response missing data".to_string()))
    }
}

#[async_trait]
impl SettingsStore for MetafieldClient {
    async fn owner_id(&self) -> Result<String> {
        let data: ShopIdData = self.execute(SHOP_ID_QUERY, json!({})).await?;
        Ok(data.shop.id)
    }

    async fn list_entries(&self, namespace: &str) -> Result<Vec<StoreEntry>> {
        let variables = json!({ "namespace": namespace, "first": METAFIELD_PAGE_SIZE });
        let data: MetafieldsData = self.execute(METAFIELDS_QUERY, variables).await?;

        Ok(data
            .shop
            .metafields
            .edges
            .into_iter()
            .map(|edge| StoreEntry {
                namespace: edge.node.namespace,
                key: edge.node.key,
                value: edge.node.value,
            })
            .collect())
    }

    async fn write_entry(&self, write: &EntryWrite) -> Result<()> {
        let input = MetafieldsSetInput {
            namespace: &write.namespace,
            key: &write.key,
            value: &write.value,
            value_type: &write.value_type,
            owner_id: &write.owner_id,
        };
        let variables = json!({ "metafields": [input] });
        let data: MetafieldsSetData = self.execute(METAFIELDS_SET_MUTATION, variables).await?;

        let user_errors = data.metafields_set.user_errors;
        if !user_errors.is_empty() {
            let messages: Vec<String> = user_errors.into_iter().map(|e| e.message).collect();
            return Err(Error::Store(format!(
                "write rejected for {}: {}",
                write.key,
                messages.join("; ")
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphqlEnvelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ShopIdData {
    shop: ShopId,
}

#[derive(Debug, Deserialize)]
struct ShopId {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MetafieldsData {
    shop: ShopMetafields,
}

#[derive(Debug, Deserialize)]
struct ShopMetafields {
    metafields: MetafieldConnection,
}

#[derive(Debug, Deserialize)]
struct MetafieldConnection {
    edges: Vec<MetafieldEdge>,
}

#[derive(Debug, Deserialize)]
struct MetafieldEdge {
    node: MetafieldNode,
}

#[derive(Debug, Deserialize)]
struct MetafieldNode {
    namespace: String,
    key: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct MetafieldsSetData {
    #[serde(rename = "metafieldsSet")]
    metafields_set: MetafieldsSetPayload,
}

#[derive(Debug, Deserialize)]
struct MetafieldsSetPayload {
    #[serde(rename = "userErrors")]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
struct UserError {
    #[allow(dead_code)]
    field: Option<Vec<String>>,
    message: String,
}

/// One MetafieldsSetInput value as the mutation expects it
#[derive(Debug, Serialize)]
struct MetafieldsSetInput<'a> {
    namespace: &'a str,
    key: &'a str,
    value: &'a str,
    #[serde(rename = "type")]
    value_type: &'a str,
    #[serde(rename = "ownerId")]
    owner_id: &'a str,
}

// ============================================================================
// Tests
// ============================================================================
