// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
        UpdateArticlePriceCommand,
    },
    dto::ArticleDto,
    queries::articles::{GetArticleByCodeQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

/// Full article payload used by both create and update. The `code` in an
/// update payload is accepted but the path code identifies the record and
/// the stored code never changes.
#[derive(Debug, Deserialize)]
pub struct UpsertArticleRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticlePriceRequest {
    pub price: f64,
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<UpsertArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) = payload?;
    let command = CreateArticleCommand {
        code: payload.code,
        name: payload.name,
        description: payload.description,
        price: payload.price,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_code(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_code(GetArticleByCodeQuery { code })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
    payload: Result<Json<UpsertArticleRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Json(payload) = payload?;
    let command = UpdateArticleCommand {
        code,
        name: payload.name,
        description: payload.description,
        price: payload.price,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article_price(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
    payload: Result<Json<UpdateArticlePriceRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Json(payload) = payload?;
    state
        .services
        .article_commands
        .update_article_price(UpdateArticlePriceCommand {
            code,
            price: payload.price,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(code): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { code })
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}
