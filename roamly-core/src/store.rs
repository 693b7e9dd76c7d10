use async_trait::async_trait;

use crate::blog::{BlogBlock, BlogPost};
use crate::submission::{AdInquiry, ContactMessage, SubmissionRecord, Subscriber};
use crate::tool::{Tool, ToolQuery};
use crate::CoreResult;

/// Persistence seam over the content backend. Handlers only ever talk to
/// this trait; the Notion client is one implementation, test doubles are
/// another. Nothing in the process holds mutable record state.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn query_tools(&self, query: &ToolQuery) -> CoreResult<Vec<Tool>>;

    async fn list_posts(&self) -> CoreResult<Vec<BlogPost>>;

    async fn get_post(&self, slug: &str) -> CoreResult<Option<BlogPost>>;

    async fn post_blocks(&self, notion_id: &str) -> CoreResult<Vec<BlogBlock>>;

    async fn create_submission(&self, record: &SubmissionRecord) -> CoreResult<()>;

    async fn create_subscriber(&self, subscriber: &Subscriber) -> CoreResult<()>;

    async fn create_contact(&self, message: &ContactMessage) -> CoreResult<()>;

    async fn create_inquiry(&self, inquiry: &AdInquiry) -> CoreResult<()>;
}
