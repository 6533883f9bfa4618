use std::sync::Arc;

use crate::analysis::analyzer::StructuredAnalyzer;
use crate::analysis::keywords::PhraseDictionary;
use crate::config::Config;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The analyzer and store sit behind trait objects so tests can
/// swap them for doubles.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: Arc<dyn StructuredAnalyzer>,
    pub store: Arc<dyn RecordStore>,
    /// Known-phrase dictionary for the keyword extractor. Injected at
    /// startup so vocabularies stay versionable.
    pub phrases: Arc<PhraseDictionary>,
}
