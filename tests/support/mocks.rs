// tests/support/mocks.rs
use article_api::application::ports::time::Clock;
use article_api::domain::article::{
    Article, ArticleCode, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use article_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Clock that always returns the same instant, so command services produce
/// deterministic timestamps under test.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory stand-in for both article repository ports, keyed by code.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<BTreeMap<String, Article>>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let key = article.code.as_str().to_string();
        if articles.contains_key(&key) {
            return Err(DomainError::Conflict(
                "an article with this code already exists".into(),
            ));
        }
        let stored = Article {
            code: article.code,
            name: article.name,
            description: article.description,
            price: article.price,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.insert(key, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let key = update.code.as_str().to_string();
        let existing = articles
            .get_mut(&key)
            .ok_or_else(|| DomainError::NotFound(format!("article {key} not found")))?;
        existing.name = update.name;
        existing.description = update.description;
        existing.price = update.price;
        existing.updated_at = update.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, code: &ArticleCode) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        articles
            .remove(code.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {code} not found")))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_code(&self, code: &ArticleCode) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.get(code.as_str()).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.values().cloned().collect())
    }
}
