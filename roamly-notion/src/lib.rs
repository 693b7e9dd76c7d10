//! Notion-backed content store.
//!
//! Thin client over the key-based Notion HTTP API: typed-property page
//! queries for the tools and blog databases, page creation for the records
//! the site writes back. No retries, no caching — one request per call.

pub mod mapping;
pub mod query;
pub mod records;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use roamly_core::blog::{BlogBlock, BlogPost};
use roamly_core::submission::{AdInquiry, ContactMessage, SubmissionRecord, Subscriber};
use roamly_core::tool::{apply_client_filters, Tool, ToolQuery};
use roamly_core::{ContentStore, CoreError, CoreResult};

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Clone, Deserialize)]
pub struct NotionDatabases {
    pub tools: String,
    pub blog: String,
    pub submissions: String,
    pub subscribers: String,
    pub contacts: String,
    pub inquiries: String,
}

pub struct NotionClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    databases: NotionDatabases,
}

impl NotionClient {
    pub fn new(api_key: String, databases: NotionDatabases) -> CoreResult<Self> {
        Self::with_base_url(api_key, databases, NOTION_API_BASE)
    }

    pub fn with_base_url(
        api_key: String,
        databases: NotionDatabases,
        base_url: impl Into<String>,
    ) -> CoreResult<Self> {
        if api_key.trim().is_empty() {
            return Err(CoreError::Config(
                "content backend api key is not configured".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CoreError::Config(format!("http client init failed: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            databases,
        })
    }

    async fn request(&self, method: Method, endpoint: &str, body: Option<&Value>) -> CoreResult<Value> {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, endpoint))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CoreError::Content(format!("request failed: {e}")))?;

        let status = response.status();
        let data: Value = response
            .json()
            .await
            .map_err(|e| CoreError::Content(format!("response unreadable: {e}")))?;

        // The API reports errors both ways: a non-2xx status and an
        // `object: "error"` body with a message.
        if data.get("object").and_then(Value::as_str) == Some("error") {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("content backend error");
            return Err(CoreError::Content(message.to_string()));
        }
        if !status.is_success() {
            return Err(CoreError::Content(format!("endpoint returned {status}")));
        }
        Ok(data)
    }

    async fn query_database(&self, database_id: &str, body: Value) -> CoreResult<Vec<Value>> {
        let data = self
            .request(
                Method::POST,
                &format!("/databases/{database_id}/query"),
                Some(&body),
            )
            .await?;
        Ok(data
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_page(&self, body: Value) -> CoreResult<()> {
        self.request(Method::POST, "/pages", Some(&body)).await?;
        Ok(())
    }
}

#[async_trait]
impl ContentStore for NotionClient {
    async fn query_tools(&self, query: &ToolQuery) -> CoreResult<Vec<Tool>> {
        let pages = self
            .query_database(&self.databases.tools, query::tools_query_body(query))
            .await?;
        let tools = pages
            .iter()
            .enumerate()
            .map(|(index, page)| mapping::tool_from_page(page, index))
            .collect();
        Ok(apply_client_filters(tools, query))
    }

    async fn list_posts(&self) -> CoreResult<Vec<BlogPost>> {
        let pages = self
            .query_database(&self.databases.blog, query::posts_query_body())
            .await?;
        Ok(pages.iter().map(mapping::post_from_page).collect())
    }

    async fn get_post(&self, slug: &str) -> CoreResult<Option<BlogPost>> {
        let posts = self.list_posts().await?;
        Ok(posts.into_iter().find(|post| post.slug == slug))
    }

    async fn post_blocks(&self, notion_id: &str) -> CoreResult<Vec<BlogBlock>> {
        let data = self
            .request(
                Method::GET,
                &format!("/blocks/{notion_id}/children?page_size=100"),
                None,
            )
            .await?;
        let children = data
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Ok(mapping::blocks_from_children(&children))
    }

    async fn create_submission(&self, record: &SubmissionRecord) -> CoreResult<()> {
        self.create_page(records::submission_page(&self.databases.submissions, record))
            .await?;
        tracing::info!(
            reference = %record.reference,
            order_id = %record.order_id,
            "submission record created"
        );
        Ok(())
    }

    async fn create_subscriber(&self, subscriber: &Subscriber) -> CoreResult<()> {
        self.create_page(records::subscriber_page(
            &self.databases.subscribers,
            subscriber,
        ))
        .await
    }

    async fn create_contact(&self, message: &ContactMessage) -> CoreResult<()> {
        self.create_page(records::contact_page(&self.databases.contacts, message))
            .await
    }

    async fn create_inquiry(&self, inquiry: &AdInquiry) -> CoreResult<()> {
        self.create_page(records::inquiry_page(&self.databases.inquiries, inquiry))
            .await
    }
}
