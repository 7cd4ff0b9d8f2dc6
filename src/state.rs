use std::sync::Arc;

use crate::config::Config;
use crate::translate::google::GoogleTranslator;
use crate::translate::interface::Translator;
use crate::upload::preview::PreviewStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn Translator>,
    pub previews: Arc<PreviewStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let translator = Arc::new(GoogleTranslator::new(
            config.translation.endpoint.clone(),
            config.translation.api_key.clone(),
        ));
        let previews = Arc::new(PreviewStore::new(&config.system.cache_dir));

        Self {
            config,
            translator,
            previews,
        }
    }
}
