// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleCode, ArticleName, ArticlePrice, NewArticle},
};

pub struct CreateArticleCommand {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let code = ArticleCode::new(command.code)?;
        let name = ArticleName::new(command.name)?;
        let price = ArticlePrice::new(command.price)?;

        if self.read_repo.find_by_code(&code).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "article {code} already exists"
            )));
        }

        let now = self.clock.now();

        tracing::info!(code = %code, "creating article");

        let new_article = NewArticle {
            code,
            name,
            description: command.description,
            price,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
