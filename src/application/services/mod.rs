// src/application/services/mod.rs
mod slugging;

use std::sync::Arc;

pub use slugging::{SlugAssignmentService, SlugAssignmentServiceBuilder, SlugOutcome};

use crate::{
    application::{commands::articles::ArticleCommandService, ports::time::Clock},
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    slugging: Arc<SlugAssignmentService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        slugging: Arc<SlugAssignmentService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slugging),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            slugging,
        }
    }

    pub fn slugging(&self) -> Arc<SlugAssignmentService> {
        Arc::clone(&self.slugging)
    }
}
