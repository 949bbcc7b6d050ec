use card_advisor::advisor::CardAdvisor;
use card_advisor::catalog::CardCatalog;
use card_advisor::config::AppConfig;
use card_advisor::error::AppError;
use card_advisor::scoring::ScoringRubric;
use clap::Args;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog overrides shared by the one-shot commands.
#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Card dataset to load instead of the configured one
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Number of cards to return (defaults to CARD_RECOMMENDATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

/// Load the catalog once and wrap it for read-only sharing. Returns the advisor and the
/// result size to use.
pub(crate) fn load_advisor(
    config: &AppConfig,
    args: &CatalogArgs,
) -> Result<(Arc<CardAdvisor>, usize), AppError> {
    let path = args
        .dataset
        .clone()
        .unwrap_or_else(|| config.catalog.dataset_path.clone());
    let catalog = CardCatalog::from_path(&path)?;

    let advisor = CardAdvisor::new(Arc::new(catalog), ScoringRubric::standard())
        .with_default_limit(config.catalog.recommendation_limit);
    let limit = args.limit.unwrap_or(0);
    Ok((Arc::new(advisor), limit))
}
