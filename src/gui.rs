//! The single-window desktop front end.

use crate::constants::{BUTTON_TEXT, FOOTER_TEXT, HEADING_TEXT, WINDOW_SIZE, WINDOW_TITLE};
use crate::dialogs::{Dialogs, NativeDialogs};
use crate::error::{CompressionError, Result};
use crate::processing::CompressionOptions;
use crate::workflow::{CompressionWorkflow, StatusDisplay, StatusTone, WorkflowOutcome};
use eframe::egui::{self, Color32, RichText};

const BUTTON_FILL: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

pub struct CompressorApp<D: Dialogs = NativeDialogs> {
    workflow: CompressionWorkflow,
    status: StatusDisplay,
    dialogs: D,
}

impl CompressorApp<NativeDialogs> {
    pub fn new(options: CompressionOptions) -> Self {
        Self::with_dialogs(options, NativeDialogs)
    }
}

impl<D: Dialogs> CompressorApp<D> {
    pub fn with_dialogs(options: CompressionOptions, dialogs: D) -> Self {
        Self {
            workflow: CompressionWorkflow::new(options),
            status: StatusDisplay::default(),
            dialogs,
        }
    }

    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    /// What the button does: one blocking run of the workflow.
    pub fn compress(&mut self) -> WorkflowOutcome {
        self.workflow.run(&self.dialogs, &mut self.status)
    }
}

pub fn status_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Ready => Color32::GRAY,
        StatusTone::Success => SUCCESS_COLOR,
    }
}

impl<D: Dialogs> eframe::App for CompressorApp<D> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(FOOTER_TEXT).size(10.0));
                ui.add_space(6.0);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading(RichText::new(HEADING_TEXT).size(20.0).strong());
                ui.add_space(12.0);

                let button = egui::Button::new(
                    RichText::new(BUTTON_TEXT)
                        .size(15.0)
                        .strong()
                        .color(Color32::WHITE),
                )
                .fill(BUTTON_FILL)
                .min_size(egui::vec2(220.0, 36.0));

                if ui.add(button).clicked() {
                    self.compress();
                }

                ui.add_space(16.0);
                ui.label(
                    RichText::new(self.status.text()).color(status_color(self.status.tone())),
                );
            });
        });
    }
}

/// Opens the window and blocks until it is closed.
pub fn launch(options: CompressionOptions) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    crate::verbose!("Opening window with {:?}", options);
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(CompressorApp::new(options))),
    )
    .map_err(|e| CompressionError::Gui(e.to_string()))
}
