//! Server-rendered blog pages.
//!
//! Fixed single-pass templating over small post lists; no template engine.
//! Everything sourced from the content backend is escaped before it reaches
//! the page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use roamly_core::blog::{BlogBlock, BlogPost};

use crate::error::ApiError;
use crate::state::AppState;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} — Roamly</title>\n<link rel=\"stylesheet\" href=\"/styles.css\">\n\
         </head>\n<body>\n<main class=\"blog\">\n{}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn format_date(post: &BlogPost) -> String {
    post.published_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn render_index(posts: &[BlogPost]) -> String {
    let mut body = String::from("<h1>Travel notes</h1>\n<ul class=\"posts\">\n");
    for post in posts {
        body.push_str(&format!(
            "<li><a href=\"/blog/{}\">{}</a><time>{}</time><p>{}</p></li>\n",
            escape_html(&post.slug),
            escape_html(&post.title),
            format_date(post),
            escape_html(&post.excerpt),
        ));
    }
    body.push_str("</ul>");
    page_shell("Blog", &body)
}

fn render_block(block: &BlogBlock) -> String {
    match block {
        BlogBlock::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
        BlogBlock::Heading1(text) => format!("<h1>{}</h1>", escape_html(text)),
        BlogBlock::Heading2(text) => format!("<h2>{}</h2>", escape_html(text)),
        BlogBlock::Heading3(text) => format!("<h3>{}</h3>", escape_html(text)),
        BlogBlock::Bullet(text) => format!("<li>{}</li>", escape_html(text)),
        BlogBlock::Quote(text) => format!("<blockquote>{}</blockquote>", escape_html(text)),
    }
}

pub fn render_post(post: &BlogPost, blocks: &[BlogBlock]) -> String {
    let mut body = format!(
        "<article>\n<h1>{}</h1>\n<time>{}</time>\n",
        escape_html(&post.title),
        format_date(post),
    );
    // Consecutive bullets share one <ul>.
    let mut in_list = false;
    for block in blocks {
        let is_bullet = matches!(block, BlogBlock::Bullet(_));
        if is_bullet && !in_list {
            body.push_str("<ul>\n");
        } else if !is_bullet && in_list {
            body.push_str("</ul>\n");
        }
        in_list = is_bullet;
        body.push_str(&render_block(block));
        body.push('\n');
    }
    if in_list {
        body.push_str("</ul>\n");
    }
    body.push_str("</article>");
    page_shell(&post.title, &body)
}

fn render_not_found(slug: &str) -> String {
    page_shell(
        "Post not found",
        &format!(
            "<h1>Post not found</h1>\n<p>No post named \u{201c}{}\u{201d}. \
             <a href=\"/blog\">Back to the blog</a>.</p>",
            escape_html(slug)
        ),
    )
}

/// GET /blog
pub async fn blog_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let posts = state.content.list_posts().await?;
    Ok(Html(render_index(&posts)))
}

/// GET /blog/{slug}
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let Some(post) = state.content.get_post(&slug).await? else {
        return Ok((StatusCode::NOT_FOUND, Html(render_not_found(&slug))).into_response());
    };
    let blocks = state.content.post_blocks(&post.notion_id).await?;
    Ok(Html(render_post(&post, &blocks)).into_response())
}
