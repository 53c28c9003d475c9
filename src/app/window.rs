use crate::app::core::{init, transition, Effect, Msg, State};
use crate::app::render::render;
use crate::app::run_effect::RunEffect;
use crate::config::Config;
use crate::evaluation::pipeline::Evaluator;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub struct EvaluatorWindow {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    event_receiver: Receiver<Msg>,
    run_effect: RunEffect,
    preview: Option<(u64, egui::TextureHandle)>,
}

impl EvaluatorWindow {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        evaluator: Evaluator,
        ctx: egui::Context,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(
            config.clone(),
            logger.clone(),
            evaluator,
            event_sender,
            ctx,
        );
        let (state, effects) = init();

        let window = Self {
            config,
            logger: logger.with_namespace("window"),
            state,
            event_receiver,
            run_effect,
            preview: None,
        };
        window.execute_effects(effects);
        window
    }

    fn dispatch(&mut self, msg: Msg) {
        let _ = self
            .logger
            .info(&format!("msg: {}", msg.to_display_string()));

        let (new_state, effects) = transition(std::mem::take(&mut self.state), msg);
        self.state = new_state;

        self.execute_effects(effects);
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    /// Dropped files are dispatched in the frame they arrive in.
    fn handle_dropped(&mut self, dropped: Option<PathBuf>) {
        if let Some(path) = dropped {
            self.dispatch(Msg::PhotoDropped(path));
        }
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let Some(selected) = &self.state.selected else {
            self.preview = None;
            return;
        };
        let generation = self.state.selection_generation;
        if matches!(&self.preview, Some((loaded, _)) if *loaded == generation) {
            return;
        }

        let (width, height) = selected.preview.dimensions();
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            selected.preview.as_raw(),
        );
        let texture = ctx.load_texture("preview", image, egui::TextureOptions::default());
        self.preview = Some((generation, texture));
    }
}

impl eframe::App for EvaluatorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(msg) = self.event_receiver.try_recv() {
            self.dispatch(msg);
        }

        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        self.handle_dropped(dropped);

        self.refresh_preview(ctx);

        let msgs = render(
            ctx,
            &self.state,
            self.preview.as_ref().map(|(_, texture)| texture),
            self.config.preview_size,
            self.config.confidence_threshold,
        );
        for msg in msgs {
            self.dispatch(msg);
        }
    }
}

pub fn run(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    evaluator: Evaluator,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([config.window_size.0, config.window_size.1]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Box::new(EvaluatorWindow::new(
                config,
                logger,
                evaluator,
                cc.egui_ctx.clone(),
            ))
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
