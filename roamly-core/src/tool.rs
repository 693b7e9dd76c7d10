use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory listing, mapped out of a Notion page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: usize,
    pub notion_id: String,
    pub name: String,
    pub category: String,
    pub category_slug: String,
    pub description: String,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub pricing: String,
    pub price_label: String,
    pub icon: String,
    pub travel_style: Vec<String>,
    pub url: String,
    pub featured: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_tools: usize,
    pub total_reviews: u64,
    pub categories: usize,
    pub avg_rating: String,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Query model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Rating,
    Reviews,
    Name,
    Newest,
}

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct ToolQuery {
    pub category: Option<String>,
    pub pricing: Option<String>,
    pub featured: bool,
    pub search: Option<String>,
    pub sort: SortKey,
    pub limit: usize,
}

impl Default for ToolQuery {
    fn default() -> Self {
        Self {
            category: None,
            pricing: None,
            featured: false,
            search: None,
            sort: SortKey::Reviews,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ToolQuery {
    /// Build a query from raw query-string parameters. Unknown keys are
    /// ignored; malformed values fall back to the defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let sort = match params.get("sort").map(String::as_str) {
            Some("rating") => SortKey::Rating,
            Some("name") => SortKey::Name,
            Some("newest") => SortKey::Newest,
            _ => SortKey::Reviews,
        };

        let limit = params
            .get("limit")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_PAGE_SIZE);

        Self {
            category: params.get("category").cloned().filter(|v| !v.is_empty()),
            pricing: params.get("pricing").cloned().filter(|v| !v.is_empty()),
            featured: params.get("featured").map(String::as_str) == Some("true"),
            search: params.get("search").cloned().filter(|v| !v.is_empty()),
            sort,
            limit,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_PAGE_SIZE);
        self
    }
}

// ============================================================================
// Pure transformations
// ============================================================================

/// Lowercase a display name into a URL slug.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Case-insensitive substring match over name, description and features.
pub fn matches_search(tool: &Tool, query: &str) -> bool {
    let q = query.to_lowercase();
    tool.name.to_lowercase().contains(&q)
        || tool.description.to_lowercase().contains(&q)
        || tool.features.iter().any(|f| f.to_lowercase().contains(&q))
}

/// Apply the client-side parts of a query: search filter, then limit.
/// The upstream query already handled category/pricing/featured and sort.
pub fn apply_client_filters(mut tools: Vec<Tool>, query: &ToolQuery) -> Vec<Tool> {
    if let Some(search) = &query.search {
        tools.retain(|t| matches_search(t, search));
    }
    tools.truncate(query.limit);
    tools
}

const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Trip Planning", "🗺️"),
    ("Local Guides", "📍"),
    ("Flights & Hotels", "✈️"),
    ("Road Trip Planning", "🚗"),
    ("Luxury Travel", "💎"),
    ("Group Travel", "👥"),
    ("Adventure Travel", "🏕️"),
    ("Points & Rewards", "🎁"),
];

fn category_icon(name: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, icon)| *icon)
        .unwrap_or("📦")
}

/// Count tools per category, preserving first-seen order.
pub fn summarize_categories(tools: &[Tool]) -> Vec<CategorySummary> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();
    for tool in tools {
        if !counts.contains_key(&tool.category) {
            order.push(tool.category.clone());
        }
        *counts.entry(tool.category.clone()).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|name| CategorySummary {
            id: slugify(&name),
            icon: category_icon(&name).to_string(),
            count: counts[&name],
            name,
        })
        .collect()
}

pub fn summarize_stats(tools: &[Tool]) -> DirectoryStats {
    let total_reviews = tools.iter().map(|t| t.reviews as u64).sum();
    let avg_rating = if tools.is_empty() {
        "0".to_string()
    } else {
        let sum: f64 = tools.iter().map(|t| t.rating).sum();
        format!("{:.1}", sum / tools.len() as f64)
    };
    let categories = tools
        .iter()
        .map(|t| t.category.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();

    DirectoryStats {
        total_tools: tools.len(),
        total_reviews,
        categories,
        avg_rating,
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, category: &str, rating: f64, reviews: u32) -> Tool {
        Tool {
            id: 1,
            notion_id: "page-1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            category_slug: slugify(category),
            description: "plans trips".to_string(),
            features: vec!["Itineraries".to_string()],
            rating,
            reviews,
            pricing: "free".to_string(),
            price_label: "Free".to_string(),
            icon: "🔧".to_string(),
            travel_style: vec![],
            url: "https://example.com".to_string(),
            featured: false,
            created_at: None,
        }
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Trip Planning"), "trip-planning");
        assert_eq!(slugify("Flights & Hotels"), "flights-&-hotels");
    }

    #[test]
    fn query_defaults_when_params_absent() {
        let q = ToolQuery::from_params(&HashMap::new());
        assert_eq!(q.sort, SortKey::Reviews);
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert!(!q.featured);
        assert!(q.category.is_none());
    }

    #[test]
    fn query_limit_is_capped() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "5000".to_string());
        assert_eq!(ToolQuery::from_params(&params).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn search_matches_features_case_insensitively() {
        let t = tool("WanderPlan", "Trip Planning", 4.5, 10);
        assert!(matches_search(&t, "ITINER"));
        assert!(matches_search(&t, "wander"));
        assert!(!matches_search(&t, "hotels"));
    }

    #[test]
    fn client_filters_apply_search_then_limit() {
        let tools = vec![
            tool("Alpha", "Trip Planning", 4.0, 1),
            tool("Beta", "Trip Planning", 4.0, 2),
            tool("Gamma", "Local Guides", 4.0, 3),
        ];
        let query = ToolQuery {
            search: Some("a".to_string()),
            ..ToolQuery::default()
        }
        .with_limit(2);
        let filtered = apply_client_filters(tools, &query);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Alpha");
    }

    #[test]
    fn categories_count_and_keep_order() {
        let tools = vec![
            tool("A", "Trip Planning", 4.0, 1),
            tool("B", "Local Guides", 4.0, 1),
            tool("C", "Trip Planning", 4.0, 1),
        ];
        let summaries = summarize_categories(&tools);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Trip Planning");
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].icon, "🗺️");
        assert_eq!(summaries[1].count, 1);
    }

    #[test]
    fn unknown_category_gets_fallback_icon() {
        let tools = vec![tool("A", "Something Else", 4.0, 1)];
        assert_eq!(summarize_categories(&tools)[0].icon, "📦");
    }

    #[test]
    fn stats_average_has_one_decimal() {
        let tools = vec![
            tool("A", "Trip Planning", 4.0, 10),
            tool("B", "Local Guides", 5.0, 20),
        ];
        let stats = summarize_stats(&tools);
        assert_eq!(stats.total_tools, 2);
        assert_eq!(stats.total_reviews, 30);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.avg_rating, "4.5");
    }

    #[test]
    fn stats_for_empty_directory() {
        let stats = summarize_stats(&[]);
        assert_eq!(stats.total_tools, 0);
        assert_eq!(stats.avg_rating, "0");
    }
}
