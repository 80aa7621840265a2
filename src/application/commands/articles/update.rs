use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleCode, ArticleName, ArticlePrice, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let code = ArticleCode::new(command.code)?;
        let name = ArticleName::new(command.name)?;
        let price = ArticlePrice::new(command.price)?;

        let mut article = self
            .read_repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::info!(code = %code, "updating article");

        let now = self.clock.now();
        article.set_attributes(name, command.description, price, now);

        let updated = self
            .write_repo
            .update(ArticleUpdate::from_article(&article))
            .await?;
        Ok(updated.into())
    }
}
