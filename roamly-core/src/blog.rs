use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub notion_id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// The subset of Notion block types the blog renderer understands.
/// Anything else is dropped during mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlogBlock {
    Paragraph(String),
    Heading1(String),
    Heading2(String),
    Heading3(String),
    Bullet(String),
    Quote(String),
}
