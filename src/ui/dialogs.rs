//! Modal prompts used by the editor window
//!
//! Each dialog is a small state struct with a `show` method returning what the
//! user decided, if anything; the editor applies the result. All of them render
//! through [`egui::Modal`], so the editor underneath stays inert until the
//! dialog is answered. Input semantics follow the editor contract: an empty
//! string means "no change" and a failed integer parse is silently ignored.

use eframe::egui;

use crate::config::font::{FontFamilyKind, FontSpec};

/// Which settings field (or list operation) a text prompt feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    AddItem,
    EditItem(usize),
    Separator,
    TimerInterval,
    LeftMargin,
    RightMargin,
    BottomMargin,
}

impl PromptField {
    fn title(&self) -> &'static str {
        match self {
            Self::AddItem => "Add item",
            Self::EditItem(_) => "Edit text",
            Self::Separator => "Separator",
            Self::TimerInterval => "Text speed",
            Self::LeftMargin | Self::RightMargin | Self::BottomMargin => "Ticker margin",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::AddItem => "Set new To-do list item text",
            Self::EditItem(_) => "Modify To-do list item text",
            Self::Separator => "Set To-do list items separator",
            Self::TimerInterval => "Set ticker timer interval (milliseconds, less is faster)",
            Self::LeftMargin => "Set left margin (in pixels)",
            Self::RightMargin => "Set right margin (in pixels)",
            Self::BottomMargin => "Set bottom margin (in pixels)",
        }
    }
}

/// Outcome of a modal dialog for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

/// Single-line text prompt, the InputBox of this application. Modal: a
/// captured `EditItem` index stays valid because the list cannot change
/// underneath it.
pub struct InputPrompt {
    pub field: PromptField,
    value: String,
    focus_requested: bool,
}

impl InputPrompt {
    pub fn new(field: PromptField, current: impl Into<String>) -> Self {
        Self {
            field,
            value: current.into(),
            focus_requested: false,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<PromptOutcome> {
        let mut outcome = None;
        let modal = egui::Modal::new(egui::Id::new("input_prompt")).show(ctx, |ui| {
            ui.strong(self.field.title());
            ui.separator();
            ui.label(self.field.label());
            let response =
                ui.add(egui::TextEdit::singleline(&mut self.value).desired_width(280.0));
            if !self.focus_requested {
                response.request_focus();
                self.focus_requested = true;
            }

            let enter =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || enter {
                    outcome = Some(PromptOutcome::Submitted(self.value.clone()));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(PromptOutcome::Cancelled);
                }
            });
        });
        // Escape or a click on the backdrop cancels.
        if outcome.is_none() && modal.should_close() {
            outcome = Some(PromptOutcome::Cancelled);
        }
        outcome
    }
}

/// Yes/No confirmation before clearing the list. Default answer is No:
/// Escape, Enter and the backdrop all decline.
pub struct ConfirmClear;

impl ConfirmClear {
    pub fn show(ctx: &egui::Context) -> Option<bool> {
        let mut answer = None;
        let modal = egui::Modal::new(egui::Id::new("confirm_clear")).show(ctx, |ui| {
            ui.strong("New list");
            ui.separator();
            ui.label("Proceed to clear list items?");
            ui.horizontal(|ui| {
                if ui.button("No").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    answer = Some(false);
                }
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                }
            });
        });
        if answer.is_none() && modal.should_close() {
            answer = Some(false);
        }
        answer
    }
}

/// Font family + size picker.
pub struct FontDialog {
    spec: FontSpec,
}

impl FontDialog {
    pub fn new(current: FontSpec) -> Self {
        Self { spec: current }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<Option<FontSpec>> {
        let mut outcome = None;
        let modal = egui::Modal::new(egui::Id::new("font_dialog")).show(ctx, |ui| {
            ui.strong("Font");
            ui.separator();
            ui.label("Family");
            for family in FontFamilyKind::all() {
                ui.radio_value(&mut self.spec.family, family, family.label());
            }
            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Size");
                ui.add(egui::DragValue::new(&mut self.spec.size).range(6.0..=96.0));
            });
            ui.label(
                egui::RichText::new(format!("Sample  ({})", self.spec)).font(self.spec.font_id()),
            );
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = Some(Some(self.spec));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(None);
                }
            });
        });
        if outcome.is_none() && modal.should_close() {
            outcome = Some(None);
        }
        outcome
    }
}

/// Which color the color dialog edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Foreground,
    Background,
}

/// Modal color picker for the ticker foreground/background.
pub struct ColorDialog {
    pub target: ColorTarget,
    color: egui::Color32,
}

impl ColorDialog {
    pub fn new(target: ColorTarget, current: egui::Color32) -> Self {
        Self {
            target,
            color: current,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<Option<egui::Color32>> {
        let title = match self.target {
            ColorTarget::Foreground => "Foreground color",
            ColorTarget::Background => "Background color",
        };
        let mut outcome = None;
        let modal = egui::Modal::new(egui::Id::new("color_dialog")).show(ctx, |ui| {
            ui.strong(title);
            ui.separator();
            egui::widgets::color_picker::color_picker_color32(
                ui,
                &mut self.color,
                egui::widgets::color_picker::Alpha::Opaque,
            );
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = Some(Some(self.color));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(None);
                }
            });
        });
        if outcome.is_none() && modal.should_close() {
            outcome = Some(None);
        }
        outcome
    }
}
