// src/application/services/slugging.rs
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    application::ports::SlugGeneratorPort,
    config::{DEFAULT_GENERATOR, SlugConfig},
    domain::{
        errors::DomainResult,
        slug::{Slug, SlugError, SlugRepository, SlugResolver, Sluggable, extract_scope_filters},
    },
    infrastructure::util::DefaultSlugGenerator,
};

/// Result of running slug assignment on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugOutcome {
    /// A slug was resolved and written to the entity.
    Assigned(Slug),
    /// The source text did not change; the existing slug was kept.
    Unchanged,
    /// Slug assignment is switched off in configuration.
    Disabled,
}

/// Runs on every insert/update of a sluggable entity: decides whether the
/// slug needs to change, normalizes the source text, resolves a free slug
/// and writes it back to the entity.
pub struct SlugAssignmentService {
    enabled: bool,
    generator: RwLock<Arc<SlugGeneratorPort>>,
    resolver: SlugResolver,
}

impl SlugAssignmentService {
    pub fn builder(config: SlugConfig) -> SlugAssignmentServiceBuilder {
        SlugAssignmentServiceBuilder::new(config)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn resolver(&self) -> &SlugResolver {
        &self.resolver
    }

    pub fn generator(&self) -> Arc<SlugGeneratorPort> {
        match self.generator.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Swap the active normalizer. Assignments already in flight keep the
    /// generator they started with.
    pub fn replace_generator(&self, generator: Arc<SlugGeneratorPort>) {
        match self.generator.write() {
            Ok(mut guard) => *guard = generator,
            Err(poisoned) => *poisoned.into_inner() = generator,
        }
    }

    pub fn normalize(&self, input: Option<&str>) -> Option<String> {
        self.generator().generate(input)
    }

    pub async fn assign<E>(&self, entity: &mut E) -> DomainResult<SlugOutcome>
    where
        E: Sluggable + Send + Sync,
    {
        if !self.enabled {
            return Ok(SlugOutcome::Disabled);
        }

        if !self.needs_resolution(entity).await {
            return Ok(SlugOutcome::Unchanged);
        }

        let entity_type = E::entity_type();
        let base = self.normalize(entity.slug_source()).unwrap_or_default();
        let declared = self.resolver.repository().declared_scope_fields(entity_type);
        let scope = extract_scope_filters(entity, &declared);
        let identity = entity.identity();

        let slug = self
            .resolver
            .resolve(entity_type, &base, identity.as_ref(), &scope)
            .await?;

        tracing::info!(entity_type = %entity_type, slug = %slug, "slug assigned");
        entity.set_slug(slug.clone());
        Ok(SlugOutcome::Assigned(slug))
    }

    async fn needs_resolution<E>(&self, entity: &E) -> bool
    where
        E: Sluggable + Send + Sync,
    {
        if entity.slug().is_none() {
            return true;
        }

        let Some(identity) = entity.identity() else {
            return true;
        };

        let entity_type = E::entity_type();
        match self
            .resolver
            .repository()
            .fetch_prior_source(entity_type, &identity)
            .await
        {
            Ok(Some(prior)) => entity.slug_source() != Some(prior.as_str()),
            Ok(None) => {
                tracing::debug!(
                    entity_type = %entity_type,
                    identity = %identity,
                    "no prior copy found; re-resolving slug"
                );
                true
            }
            Err(err) => {
                tracing::warn!(
                    entity_type = %entity_type,
                    identity = %identity,
                    error = %err,
                    "could not load prior source; re-resolving slug"
                );
                true
            }
        }
    }
}

pub struct SlugAssignmentServiceBuilder {
    config: SlugConfig,
    generators: HashMap<String, Arc<SlugGeneratorPort>>,
    repository: Option<Arc<dyn SlugRepository>>,
}

impl SlugAssignmentServiceBuilder {
    fn new(config: SlugConfig) -> Self {
        let mut generators: HashMap<String, Arc<SlugGeneratorPort>> = HashMap::new();
        generators.insert(
            DEFAULT_GENERATOR.to_string(),
            Arc::new(DefaultSlugGenerator),
        );
        Self {
            config,
            generators,
            repository: None,
        }
    }

    /// Make a custom normalizer selectable by name through `SLUG_GENERATOR`.
    /// Registering under `default` replaces the built-in one.
    #[must_use]
    pub fn register_generator(
        mut self,
        name: impl Into<String>,
        generator: Arc<SlugGeneratorPort>,
    ) -> Self {
        self.generators.insert(name.into(), generator);
        self
    }

    #[must_use]
    pub fn repository(mut self, repository: Arc<dyn SlugRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(mut self) -> DomainResult<SlugAssignmentService> {
        let name = self.config.generator().to_string();
        let generator = self
            .generators
            .remove(&name)
            .ok_or(SlugError::MisconfiguredGenerator(name))?;
        let repository = self.repository.ok_or_else(|| {
            SlugError::MisconfiguredProvider("no slug repository was supplied".into())
        })?;

        let resolver = SlugResolver::new(repository)
            .with_max_attempts(self.config.max_attempts())
            .with_check_failure_policy(self.config.check_failure_policy());

        Ok(SlugAssignmentService {
            enabled: self.config.enabled(),
            generator: RwLock::new(generator),
            resolver,
        })
    }
}
