use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleCode,
};

pub struct GetArticleByCodeQuery {
    pub code: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_code(
        &self,
        query: GetArticleByCodeQuery,
    ) -> ApplicationResult<ArticleDto> {
        let code = ArticleCode::new(query.code)?;
        let article = self
            .read_repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}
