// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleTitle, Locale, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub locale: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    locale: Option<String>,
}

impl CreateArticleCommandBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            locale: self.locale.unwrap_or_else(|| "en".into()),
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let locale = Locale::new(command.locale)?;
        let now = self.clock.now();

        let mut new_article = NewArticle {
            title,
            slug: None,
            locale,
            body,
            created_at: now,
            updated_at: now,
        };

        self.slugging.assign(&mut new_article).await?;
        if new_article.slug.is_none() {
            return Err(ApplicationError::validation(
                "slug assignment is disabled and no slug was provided",
            ));
        }

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
