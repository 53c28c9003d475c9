use crate::app::core::{Effect, Msg};
use crate::config::Config;
use crate::evaluation::pipeline::Evaluator;
use crate::image_intake::image::load_selected_image;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    evaluator: Evaluator,
    event_sender: Sender<Msg>,
    ctx: egui::Context,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        evaluator: Evaluator,
        event_sender: Sender<Msg>,
        ctx: egui::Context,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            evaluator,
            event_sender,
            ctx,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::LoadPhoto { path } => {
                let selected =
                    load_selected_image(&path, self.config.input_shape, self.config.preview_size)
                        .map(Arc::new);
                let _ = self.event_sender.send(Msg::PhotoLoadDone(selected));
            }
            Effect::Evaluate { tensor } => {
                let report = self.evaluator.evaluate(&tensor);
                let _ = self.event_sender.send(Msg::EvaluateDone(report));
            }
        }

        self.ctx.request_repaint();
    }
}
