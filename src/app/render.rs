use crate::app::core::{Msg, NoticeKind, State, Status};
use crate::evaluation::report::Tone;
use egui::{Color32, RichText};

const BACKGROUND: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf9);
const SELECT_BUTTON: Color32 = Color32::from_rgb(0x09, 0x84, 0xe3);
const EVALUATE_BUTTON: Color32 = Color32::from_rgb(0xff, 0x6f, 0x91);
const CANVAS: Color32 = Color32::from_rgb(0xdf, 0xe6, 0xe9);
const TEXT: Color32 = Color32::from_rgb(0x2d, 0x34, 0x36);

pub fn photo_label(state: &State) -> String {
    match &state.selected {
        Some(selected) => format!("Selected Photo: {}", selected.file_name()),
        None => "No photo selected.".to_string(),
    }
}

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Positive => Color32::from_rgb(0, 128, 0),
        Tone::Negative => Color32::RED,
    }
}

fn button(text: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).color(Color32::WHITE).size(14.0))
        .fill(fill)
        .min_size(egui::vec2(140.0, 28.0))
}

/// Draws one frame and returns what the user did during it.
pub fn render(
    ctx: &egui::Context,
    state: &State,
    preview: Option<&egui::TextureHandle>,
    preview_size: (u32, u32),
    confidence_threshold: f32,
) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(BACKGROUND).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.add_enabled_ui(state.notice.is_none(), |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(photo_label(state)).size(14.0).color(TEXT));
                    ui.add_space(10.0);

                    let canvas = egui::vec2(preview_size.0 as f32, preview_size.1 as f32);
                    match preview {
                        Some(texture) => {
                            ui.image((texture.id(), canvas));
                        }
                        None => {
                            let (rect, _) = ui.allocate_exact_size(canvas, egui::Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, CANVAS);
                        }
                    }
                    ui.add_space(10.0);

                    let mut path_input = state.path_input.clone();
                    let edit = ui.add_enabled(
                        state.can_select(),
                        egui::TextEdit::singleline(&mut path_input)
                            .hint_text("Path to a .jpg or .png, or drop a file here"),
                    );
                    if edit.changed() {
                        msgs.push(Msg::PathInputChanged(path_input));
                    }
                    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        msgs.push(Msg::SelectPhotoClicked);
                    }

                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(state.can_select(), button("Select Photo", SELECT_BUTTON))
                            .clicked()
                        {
                            msgs.push(Msg::SelectPhotoClicked);
                        }
                        if ui
                            .add_enabled(state.can_evaluate(), button("Evaluate", EVALUATE_BUTTON))
                            .clicked()
                        {
                            msgs.push(Msg::EvaluateClicked);
                        }
                        if state.status != Status::Idle {
                            ui.spinner();
                        }
                    });
                    ui.add_space(10.0);

                    render_report(ui, state, confidence_threshold);
                });
            });
        });

    if let Some(notice) = &state.notice {
        let color = match notice.kind {
            NoticeKind::Warning => Color32::from_rgb(0xe1, 0x70, 0x55),
            NoticeKind::Error => Color32::RED,
        };
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&notice.message).color(color));
                if ui.button("OK").clicked() {
                    msgs.push(Msg::NoticeDismissed);
                }
            });
    }

    msgs
}

fn render_report(ui: &mut egui::Ui, state: &State, confidence_threshold: f32) {
    let Some(report) = &state.report else {
        return;
    };

    egui::Grid::new("results")
        .num_columns(3)
        .striped(true)
        .min_col_width(150.0)
        .show(ui, |ui| {
            ui.strong("Model Name");
            ui.strong("Predicted Letter");
            ui.strong("Confidence");
            ui.end_row();

            for row in report.rows() {
                ui.label(row.model_name);
                ui.label(row.label);
                ui.label(row.confidence);
                ui.end_row();
            }
        });

    ui.add_space(10.0);
    let summary = report.summary(confidence_threshold);
    ui.label(
        RichText::new(summary.text)
            .size(16.0)
            .color(tone_color(summary.tone)),
    );
}
