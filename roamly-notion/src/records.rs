//! Page-creation payloads for the four record kinds the site writes back.

use serde_json::{json, Value};

use roamly_core::submission::{AdInquiry, ContactMessage, SubmissionRecord, Subscriber};

fn title(text: &str) -> Value {
    json!({ "title": [{ "text": { "content": text } }] })
}

fn rich_text(text: &str) -> Value {
    json!({ "rich_text": [{ "text": { "content": text } }] })
}

fn email(address: &str) -> Value {
    json!({ "email": address })
}

fn select(name: &str) -> Value {
    json!({ "select": { "name": name } })
}

fn url(link: &str) -> Value {
    json!({ "url": link })
}

fn page(parent_db: &str, properties: Value) -> Value {
    json!({
        "parent": { "database_id": parent_db },
        "properties": properties
    })
}

pub fn submission_page(parent_db: &str, record: &SubmissionRecord) -> Value {
    let mut properties = json!({
        "Name": title(&record.tool_name),
        "Website URL": url(&record.tool_url),
        "Contact Email": email(&record.contact_email),
        "Description": rich_text(&record.description),
        "Order ID": rich_text(&record.order_id),
        "Capture ID": rich_text(&record.capture_id),
        "Fee": rich_text(&record.fee),
        "Status": select(&record.status),
        "Reference": rich_text(&record.reference.to_string()),
    });
    if !record.category.is_empty() {
        properties["Category"] = select(&record.category);
    }
    if let Some(payer) = &record.payer_email {
        properties["Payer Email"] = email(payer);
    }
    page(parent_db, properties)
}

pub fn subscriber_page(parent_db: &str, subscriber: &Subscriber) -> Value {
    page(parent_db, json!({ "Email": title(&subscriber.email) }))
}

pub fn contact_page(parent_db: &str, message: &ContactMessage) -> Value {
    page(
        parent_db,
        json!({
            "Name": title(&message.name),
            "Email": email(&message.email),
            "Message": rich_text(&message.message),
        }),
    )
}

pub fn inquiry_page(parent_db: &str, inquiry: &AdInquiry) -> Value {
    page(
        parent_db,
        json!({
            "Company": title(&inquiry.company_name),
            "Contact Email": email(&inquiry.contact_email),
            "Message": rich_text(&inquiry.message),
        }),
    )
}
