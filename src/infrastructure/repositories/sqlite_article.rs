use crate::domain::article::{
    Article, ArticleCode, ArticleName, ArticlePrice, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

fn map_insert_error(err: sqlx::Error) -> DomainError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if unique_violation {
        DomainError::Conflict("an article with this code already exists".into())
    } else {
        map_error(err)
    }
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    code: String,
    name: String,
    description: Option<String>,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            code: ArticleCode::new(row.code)?,
            name: ArticleName::new(row.name)?,
            description: row.description,
            price: ArticlePrice::new(row.price)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            code,
            name,
            description,
            price,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (code, name, description, price, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING code, name, description, price, created_at, updated_at",
        )
        .bind(code.as_str())
        .bind(name.as_str())
        .bind(description.as_deref())
        .bind(f64::from(price))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_insert_error)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            code,
            name,
            description,
            price,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET name = ?, description = ?, price = ?, updated_at = ? WHERE code = ? RETURNING code, name, description, price, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(description.as_deref())
        .bind(f64::from(price))
        .bind(updated_at)
        .bind(code.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?
        .ok_or_else(|| DomainError::NotFound(format!("article {code} not found")))?;

        Article::try_from(row)
    }

    async fn delete(&self, code: &ArticleCode) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE code = ?")
            .bind(code.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {code} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_code(&self, code: &ArticleCode) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT code, name, description, price, created_at, updated_at FROM articles WHERE code = ?",
        )
        .bind(code.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT code, name, description, price, created_at, updated_at FROM articles ORDER BY code",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
