use config::Config;
use evaluation::pipeline::Evaluator;
use image_classifier::from_config::model_loader;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod app;
mod config;
mod error;
mod evaluation;
mod image_classifier;
mod image_intake;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let loader = model_loader(&config, logger.clone());

    let evaluator = Evaluator::new(config.model_descriptors.clone(), loader, logger.clone());

    let _ = logger.info(&format!(
        "Starting with {} models",
        evaluator.descriptors().len()
    ));

    app::window::run(config, logger, evaluator)
}
