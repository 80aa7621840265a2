// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleCode,
};

pub struct DeleteArticleCommand {
    pub code: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let code = ArticleCode::new(command.code)?;

        self.read_repo
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::info!(code = %code, "deleting article");

        self.write_repo.delete(&code).await?;
        Ok(())
    }
}
