use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Editorial style of an article, stored as the `article_style` enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "article_style")]
pub enum ArticleStyle {
    Listicle,
    #[serde(rename = "How-to")]
    #[sqlx(rename = "How-to")]
    HowTo,
    News,
    Interview,
    Story,
}

/// A published article
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub style: ArticleStyle,
    pub date_published: DateTime<Utc>,
}

/// Candidate article as submitted by a client, before the database assigns an
/// id and publication timestamp. Fields are optional on purpose: a missing one
/// is passed through as NULL and rejected by the table constraints.
#[derive(Debug, Deserialize)]
pub struct NewArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<ArticleStyle>,
}
