//! Database query bodies for the content backend.
//!
//! Category, pricing and featured filters are pushed upstream; search and
//! limit stay client-side. A single condition is sent bare, several are
//! wrapped in an `and` group.

use serde_json::{json, Value};

use roamly_core::tool::{SortKey, ToolQuery, MAX_PAGE_SIZE};

const PRICING_LABELS: &[(&str, &str)] = &[
    ("free", "Free"),
    ("freemium", "Freemium"),
    ("paid", "Paid"),
];

fn pricing_label(raw: &str) -> String {
    PRICING_LABELS
        .iter()
        .find(|(k, _)| *k == raw)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn sort_body(sort: SortKey) -> Value {
    match sort {
        SortKey::Rating => json!([{ "property": "Rating", "direction": "descending" }]),
        SortKey::Reviews => json!([{ "property": "Reviews", "direction": "descending" }]),
        SortKey::Name => json!([{ "property": "Name", "direction": "ascending" }]),
        SortKey::Newest => json!([{ "timestamp": "created_time", "direction": "descending" }]),
    }
}

pub fn tools_query_body(query: &ToolQuery) -> Value {
    let mut conditions: Vec<Value> = Vec::new();
    if let Some(category) = &query.category {
        conditions.push(json!({ "property": "Category", "select": { "equals": category } }));
    }
    if let Some(pricing) = &query.pricing {
        conditions.push(json!({
            "property": "Pricing",
            "select": { "equals": pricing_label(pricing) }
        }));
    }
    if query.featured {
        conditions.push(json!({ "property": "Featured", "checkbox": { "equals": true } }));
    }

    let mut body = json!({ "page_size": MAX_PAGE_SIZE });
    match conditions.len() {
        0 => {}
        1 => body["filter"] = conditions.into_iter().next().unwrap(),
        _ => body["filter"] = json!({ "and": conditions }),
    }
    body["sorts"] = sort_body(query.sort);
    body
}

pub fn posts_query_body() -> Value {
    json!({
        "page_size": MAX_PAGE_SIZE,
        "filter": { "property": "Published", "checkbox": { "equals": true } },
        "sorts": [{ "property": "Date", "direction": "descending" }]
    })
}
