//! Entry point used by the HTTP router and the command line.

mod router;
mod views;

pub use router::{recommendation_router, RecommendationRequest, RecommendationsResponse};
pub use views::{CardFeatures, RecommendationView, ShortlistCardView, ShortlistView};

use crate::catalog::CardCatalog;
use crate::config::DEFAULT_RECOMMENDATION_LIMIT;
use crate::preferences::{PreferenceError, PreferenceForm, PreferenceFormError, PreferenceRecord};
use crate::ranking::Ranker;
use crate::scoring::ScoringRubric;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Form(#[from] PreferenceFormError),
    #[error("invalid preferences: {0}")]
    Preferences(#[from] PreferenceError),
}

/// Recommends cards from a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct CardAdvisor {
    catalog: Arc<CardCatalog>,
    ranker: Ranker,
    default_limit: usize,
}

impl CardAdvisor {
    pub fn new(catalog: Arc<CardCatalog>, rubric: ScoringRubric) -> Self {
        Self {
            catalog,
            ranker: Ranker::new(rubric),
            default_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Size used when a caller asks for 0 recommendations.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        if limit > 0 {
            self.default_limit = limit;
        }
        self
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn max_score(&self) -> f64 {
        self.ranker.scorer().max_score()
    }

    /// Best `limit` cards for the preferences, best first.
    pub fn recommend(
        &self,
        preferences: &PreferenceRecord,
        limit: usize,
    ) -> Result<Vec<RecommendationView>, AdvisorError> {
        preferences.validate()?;
        let max_score = self.max_score();
        let ranking = self
            .ranker
            .rank(&self.catalog, preferences, self.resolve(limit));

        Ok(ranking
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RecommendationView::from_ranked(index + 1, entry, max_score))
            .collect())
    }

    /// Validates a raw submission before recommending.
    pub fn recommend_form(
        &self,
        form: &PreferenceForm,
        limit: usize,
    ) -> Result<Vec<RecommendationView>, AdvisorError> {
        let preferences = form.validate()?;
        self.recommend(&preferences, limit)
    }

    pub fn shortlist(
        &self,
        preferences: &PreferenceRecord,
        size: usize,
    ) -> Result<ShortlistView, AdvisorError> {
        preferences.validate()?;
        let shortlist = self
            .ranker
            .shortlist(&self.catalog, preferences, self.resolve(size));
        Ok(ShortlistView::from(&shortlist))
    }

    pub fn shortlist_form(
        &self,
        form: &PreferenceForm,
        size: usize,
    ) -> Result<ShortlistView, AdvisorError> {
        let preferences = form.validate()?;
        self.shortlist(&preferences, size)
    }

    fn resolve(&self, requested: usize) -> usize {
        if requested == 0 {
            self.default_limit
        } else {
            requested
        }
    }
}
