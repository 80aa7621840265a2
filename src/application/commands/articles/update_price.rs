use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleCode, ArticlePrice, ArticleUpdate},
};

pub struct UpdateArticlePriceCommand {
    pub code: String,
    pub price: f64,
}

impl ArticleCommandService {
    /// Partial update: only the price (and the update timestamp) change.
    pub async fn update_article_price(
        &self,
        command: UpdateArticlePriceCommand,
    ) -> ApplicationResult<ArticleDto> {
        let code = ArticleCode::new(command.code)?;
        let price = ArticlePrice::new(command.price)?;

        let mut article = self
            .read_repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::info!(code = %code, price = command.price, "updating article price");

        let now = self.clock.now();
        article.set_price(price, now);

        let updated = self
            .write_repo
            .update(ArticleUpdate::from_article(&article))
            .await?;
        Ok(updated.into())
    }
}
