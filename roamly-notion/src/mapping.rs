//! Typed-property extraction from Notion pages.
//!
//! The property schema is fixed, field by field; every accessor
//! falls back to the same defaults the site has always shown rather than
//! failing the whole listing.

use chrono::{DateTime, Utc};
use serde_json::Value;

use roamly_core::blog::{BlogBlock, BlogPost};
use roamly_core::tool::{slugify, Tool};

fn plain_text(fragments: &Value) -> Option<String> {
    fragments
        .get(0)
        .and_then(|f| f.get("plain_text"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn title_text(props: &Value, key: &str) -> Option<String> {
    props.get(key).and_then(|p| p.get("title")).and_then(plain_text)
}

fn rich_text(props: &Value, key: &str) -> Option<String> {
    props.get(key).and_then(|p| p.get("rich_text")).and_then(plain_text)
}

fn select_name(props: &Value, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(|p| p.get("select"))
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn multi_select_names(props: &Value, key: &str) -> Vec<String> {
    props
        .get(key)
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn number(props: &Value, key: &str) -> Option<f64> {
    props.get(key).and_then(|p| p.get("number")).and_then(Value::as_f64)
}

fn url(props: &Value, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(|p| p.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn checkbox(props: &Value, key: &str) -> bool {
    props
        .get(key)
        .and_then(|p| p.get("checkbox"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn timestamp(page: &Value, key: &str) -> Option<DateTime<Utc>> {
    page.get(key)
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn tool_from_page(page: &Value, index: usize) -> Tool {
    let empty = Value::Null;
    let props = page.get("properties").unwrap_or(&empty);
    let category = select_name(props, "Category").unwrap_or_else(|| "Uncategorized".to_string());
    let category_slug = if category == "Uncategorized" {
        "other".to_string()
    } else {
        slugify(&category)
    };

    Tool {
        id: index + 1,
        notion_id: page
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        name: title_text(props, "Name").unwrap_or_else(|| "Unnamed".to_string()),
        category,
        category_slug,
        description: rich_text(props, "Description").unwrap_or_default(),
        features: multi_select_names(props, "Features"),
        rating: number(props, "Rating").unwrap_or(0.0),
        reviews: number(props, "Reviews").unwrap_or(0.0) as u32,
        pricing: select_name(props, "Pricing")
            .unwrap_or_else(|| "free".to_string())
            .to_lowercase(),
        price_label: rich_text(props, "Price Text").unwrap_or_else(|| "Free".to_string()),
        icon: rich_text(props, "Icon").unwrap_or_else(|| "🔧".to_string()),
        travel_style: multi_select_names(props, "Travel Style"),
        url: url(props, "Website URL").unwrap_or_else(|| "#".to_string()),
        featured: checkbox(props, "Featured"),
        created_at: timestamp(page, "created_time"),
    }
}

pub fn post_from_page(page: &Value) -> BlogPost {
    let empty = Value::Null;
    let props = page.get("properties").unwrap_or(&empty);
    let title = title_text(props, "Name").unwrap_or_else(|| "Untitled".to_string());
    let slug = rich_text(props, "Slug").unwrap_or_else(|| slugify(&title));
    let published_at = props
        .get("Date")
        .and_then(|p| p.get("date"))
        .and_then(|d| d.get("start"))
        .and_then(Value::as_str)
        .and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        });

    BlogPost {
        notion_id: page
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        title,
        slug,
        excerpt: rich_text(props, "Excerpt").unwrap_or_default(),
        tags: multi_select_names(props, "Tags"),
        published_at,
    }
}

fn block_text(block: &Value, kind: &str) -> String {
    block
        .get(kind)
        .and_then(|b| b.get("rich_text"))
        .and_then(Value::as_array)
        .map(|fragments| {
            fragments
                .iter()
                .filter_map(|f| f.get("plain_text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Map a block list response to renderable blocks; unknown types drop out.
pub fn blocks_from_children(children: &[Value]) -> Vec<BlogBlock> {
    children
        .iter()
        .filter_map(|block| {
            let kind = block.get("type").and_then(Value::as_str)?;
            let text = block_text(block, kind);
            match kind {
                "paragraph" => Some(BlogBlock::Paragraph(text)),
                "heading_1" => Some(BlogBlock::Heading1(text)),
                "heading_2" => Some(BlogBlock::Heading2(text)),
                "heading_3" => Some(BlogBlock::Heading3(text)),
                "bulleted_list_item" => Some(BlogBlock::Bullet(text)),
                "quote" => Some(BlogBlock::Quote(text)),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_page() -> Value {
        json!({
            "id": "page-abc",
            "created_time": "2026-01-15T09:30:00.000Z",
            "properties": {
                "Name": { "title": [{ "plain_text": "WanderPlan" }] },
                "Category": { "select": { "name": "Trip Planning" } },
                "Description": { "rich_text": [{ "plain_text": "Plans trips" }] },
                "Features": { "multi_select": [{ "name": "Itineraries" }, { "name": "Maps" }] },
                "Rating": { "number": 4.7 },
                "Reviews": { "number": 321 },
                "Pricing": { "select": { "name": "Freemium" } },
                "Price Text": { "rich_text": [{ "plain_text": "From $9/mo" }] },
                "Icon": { "rich_text": [{ "plain_text": "🧭" }] },
                "Travel Style": { "multi_select": [{ "name": "Solo" }] },
                "Website URL": { "url": "https://wanderplan.example" },
                "Featured": { "checkbox": true }
            }
        })
    }

    #[test]
    fn maps_every_property() {
        let tool = tool_from_page(&full_page(), 0);
        assert_eq!(tool.id, 1);
        assert_eq!(tool.notion_id, "page-abc");
        assert_eq!(tool.name, "WanderPlan");
        assert_eq!(tool.category_slug, "trip-planning");
        assert_eq!(tool.features, vec!["Itineraries", "Maps"]);
        assert_eq!(tool.rating, 4.7);
        assert_eq!(tool.reviews, 321);
        assert_eq!(tool.pricing, "freemium");
        assert_eq!(tool.price_label, "From $9/mo");
        assert!(tool.featured);
        assert!(tool.created_at.is_some());
    }

    #[test]
    fn empty_page_gets_every_fallback() {
        let tool = tool_from_page(&json!({ "id": "page-x", "properties": {} }), 4);
        assert_eq!(tool.id, 5);
        assert_eq!(tool.name, "Unnamed");
        assert_eq!(tool.category, "Uncategorized");
        assert_eq!(tool.category_slug, "other");
        assert_eq!(tool.description, "");
        assert!(tool.features.is_empty());
        assert_eq!(tool.rating, 0.0);
        assert_eq!(tool.pricing, "free");
        assert_eq!(tool.price_label, "Free");
        assert_eq!(tool.icon, "🔧");
        assert_eq!(tool.url, "#");
        assert!(!tool.featured);
    }

    #[test]
    fn post_slug_falls_back_to_title() {
        let page = json!({
            "id": "post-1",
            "properties": {
                "Name": { "title": [{ "plain_text": "Hidden Gems of Lisbon" }] }
            }
        });
        let post = post_from_page(&page);
        assert_eq!(post.slug, "hidden-gems-of-lisbon");
        assert_eq!(post.excerpt, "");
    }

    #[test]
    fn blocks_map_known_types_and_skip_the_rest() {
        let children = vec![
            json!({ "type": "heading_1", "heading_1": { "rich_text": [{ "plain_text": "Intro" }] } }),
            json!({ "type": "paragraph", "paragraph": { "rich_text": [
                { "plain_text": "Part one " }, { "plain_text": "and two" }
            ] } }),
            json!({ "type": "image", "image": {} }),
            json!({ "type": "bulleted_list_item", "bulleted_list_item": { "rich_text": [{ "plain_text": "Pack light" }] } }),
        ];
        let blocks = blocks_from_children(&children);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], BlogBlock::Heading1("Intro".to_string()));
        assert_eq!(blocks[1], BlogBlock::Paragraph("Part one and two".to_string()));
        assert_eq!(blocks[2], BlogBlock::Bullet("Pack light".to_string()));
    }
}
