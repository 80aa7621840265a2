// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleCode, ArticleName, ArticlePrice};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub code: ArticleCode,
    pub name: ArticleName,
    pub description: Option<String>,
    pub price: ArticlePrice,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Replace the mutable attributes of the article. The code is the
    /// identity of the record and never changes.
    pub fn set_attributes(
        &mut self,
        name: ArticleName,
        description: Option<String>,
        price: ArticlePrice,
        now: DateTime<Utc>,
    ) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.updated_at = now;
    }

    pub fn set_price(&mut self, price: ArticlePrice, now: DateTime<Utc>) {
        self.price = price;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub code: ArticleCode,
    pub name: ArticleName,
    pub description: Option<String>,
    pub price: ArticlePrice,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub code: ArticleCode,
    pub name: ArticleName,
    pub description: Option<String>,
    pub price: ArticlePrice,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn from_article(article: &Article) -> Self {
        Self {
            code: article.code.clone(),
            name: article.name.clone(),
            description: article.description.clone(),
            price: article.price,
            updated_at: article.updated_at,
        }
    }
}
