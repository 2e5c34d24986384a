// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        services::SlugOutcome,
    },
    domain::article::{ArticleBody, ArticleId, ArticleTitle, ArticleUpdate, Locale},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub locale: Option<String>,
}

impl ArticleCommandService {
    /// Apply the requested changes and re-resolve the slug when the title
    /// changed. Updates that leave the title alone keep the current slug.
    ///
    /// A locale-only change keeps the slug as well; if it is already taken in
    /// the target locale the unique index rejects the write with
    /// `DomainError::Conflict`.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let UpdateArticleCommand {
            id: _,
            title,
            body,
            locale,
        } = command;

        let title_opt = title.map(ArticleTitle::new).transpose()?;
        let body_opt = body.map(ArticleBody::new).transpose()?;
        let locale_opt = locale.map(Locale::new).transpose()?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        if title_opt.is_some() || body_opt.is_some() {
            let new_title = title_opt.unwrap_or_else(|| article.title.clone());
            let new_body = body_opt.unwrap_or_else(|| article.body.clone());
            article.set_content(new_title.clone(), new_body.clone(), now);
            update = update.with_title(new_title).with_body(new_body);
        }

        if let Some(locale) = locale_opt {
            article.set_locale(locale.clone(), now);
            update = update.with_locale(locale);
        }

        if let SlugOutcome::Assigned(slug) = self.slugging.assign(&mut article).await? {
            update = update.with_slug(slug);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
