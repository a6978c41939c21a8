use crate::config::Config;
use crate::download::fetch_cached;
use crate::image_classifier::impl_model::ImageClassifierModel;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::model::impl_tract_onnx::ModelTractOnnx;
use crate::image_classifier::model::interface::Model;
use crate::labels::LabelTable;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Everything loaded once at startup and shared by the window.
pub struct AppContext {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl AppContext {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger,
            image_classifier,
        }
    }

    /// Fetches the model and labels and builds the classifier. Any failure
    /// here is fatal to the process.
    pub fn load(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let startup_logger = logger.with_namespace("startup");

        let model_path = fetch_cached(&config.model_file, &config.cache_dir, &startup_logger)?;
        let labels_path = fetch_cached(&config.labels_file, &config.cache_dir, &startup_logger)?;

        let model = ModelTractOnnx::new(&model_path, config.model.clone())?;
        startup_logger.info(&format!(
            "Loaded model with {} classes",
            model.num_classes()
        ))?;

        let labels = LabelTable::parse(&std::fs::read_to_string(&labels_path)?)
            .aligned_to(model.num_classes())?;
        startup_logger.info(&format!("Loaded {} labels", labels.len()))?;

        let image_classifier = Arc::new(ImageClassifierModel::new(
            Arc::new(model),
            labels,
            logger.clone(),
        ));

        Ok(Self::new(config, logger, image_classifier))
    }
}
