use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of an article, returned by every successful
/// operation on the `/articles` resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            code: article.code.into(),
            name: article.name.into(),
            description: article.description,
            price: article.price.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
