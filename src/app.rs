use std::path::PathBuf;

use eframe::egui;

use crate::config::font::FontSpec;
use crate::config::settings::{StoreError, TickerSettings, SETTINGS_VERSION};
use crate::model::todo_list::TodoList;
use crate::ticker::TickerWindow;
use crate::ui::dialogs::{
    ColorDialog, ColorTarget, ConfirmClear, FontDialog, InputPrompt, PromptField, PromptOutcome,
};
use crate::ui::list_panel::{ListAction, ListPanel};

const THREAD_URL: &str = "https://www.donationcoder.com/forum/index.php?topic=52963.0";
const REPO_URL: &str = "https://github.com/publicdomain/todo-ticker";

fn to_color32(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn to_rgba(color: egui::Color32) -> [u8; 4] {
    color.to_srgba_unmultiplied()
}

/// Apply a submitted prompt value to the record and list. List operations
/// return the index to select afterwards; everything else returns `None`.
/// An empty string leaves list entries and the separator unchanged, and the
/// integer fields silently keep their old value when the input does not parse.
pub(crate) fn apply_prompt_value(
    settings: &mut TickerSettings,
    list: &mut TodoList,
    field: PromptField,
    value: &str,
) -> Option<usize> {
    match field {
        PromptField::AddItem => return list.add(value),
        PromptField::EditItem(index) => return list.replace(index, value),
        PromptField::Separator => {
            if !value.is_empty() {
                settings.separator = value.to_string();
            }
        }
        PromptField::TimerInterval => {
            if let Ok(v) = value.trim().parse::<u32>() {
                settings.timer_interval_ms = v;
            }
        }
        PromptField::LeftMargin => {
            if let Ok(v) = value.trim().parse::<i32>() {
                settings.left_margin = v;
            }
        }
        PromptField::RightMargin => {
            if let Ok(v) = value.trim().parse::<i32>() {
                settings.right_margin = v;
            }
        }
        PromptField::BottomMargin => {
            if let Ok(v) = value.trim().parse::<i32>() {
                settings.bottom_margin = v;
            }
        }
    }
    None
}

/// The editor window: owns the settings record, the to-do model and the
/// ticker overlay, and dispatches every menu/dialog/list action.
pub struct TickerApp {
    /// Default-path record read at startup and written (or deleted) at exit.
    data_file_path: PathBuf,

    settings: TickerSettings,

    todo_list: TodoList,

    selected: Option<usize>,

    // Working copies of the record fields that live behind pickers; snapshotted
    // back into the record before save/show, refreshed from it after load.
    font: FontSpec,
    foreground: egui::Color32,
    background: egui::Color32,
    always_on_top: bool,
    full_width: bool,

    remember_settings: bool,

    status_message: String,

    list_panel: ListPanel,

    prompt: Option<InputPrompt>,
    font_dialog: Option<FontDialog>,
    color_dialog: Option<ColorDialog>,
    confirm_clear: bool,
    show_about: bool,

    ticker: Option<TickerWindow>,
}

impl TickerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let data_file_path = TickerSettings::default_path();

        let (settings, status_message) = match TickerSettings::load(&data_file_path) {
            Ok(settings) => (settings, "Ready".to_string()),
            Err(StoreError::NotFound) => (TickerSettings::default(), "Ready".to_string()),
            Err(e) => {
                tracing::warn!("Could not load {:?}: {}", data_file_path, e);
                (TickerSettings::default(), "Open file error".to_string())
            }
        };

        let mut app = Self {
            data_file_path,
            settings,
            todo_list: TodoList::new(),
            selected: None,
            font: FontSpec::default(),
            foreground: egui::Color32::BLACK,
            background: egui::Color32::WHITE,
            always_on_top: false,
            full_width: false,
            remember_settings: true,
            status_message,
            list_panel: ListPanel,
            prompt: None,
            font_dialog: None,
            color_dialog: None,
            confirm_clear: false,
            show_about: false,
            ticker: None,
        };
        app.refresh_from_settings();
        app
    }

    /// Bring the record to life in the UI: parse the font descriptor, restore
    /// colors, flags and list contents.
    fn refresh_from_settings(&mut self) {
        self.font = self.settings.text_font.parse().unwrap_or_else(|e| {
            tracing::warn!("Bad font descriptor in settings: {}", e);
            FontSpec::default()
        });
        self.foreground = to_color32(self.settings.foreground);
        self.background = to_color32(self.settings.background);
        self.always_on_top = self.settings.always_on_top;
        self.full_width = self.settings.full_width;
        self.todo_list = TodoList::from_items(self.settings.list_items.clone());
        self.selected = None;
    }

    /// Snapshot the current UI state back into the record.
    fn snapshot_settings(&mut self) {
        self.settings.version = SETTINGS_VERSION;
        self.settings.text_font = self.font.to_string();
        self.settings.foreground = to_rgba(self.foreground);
        self.settings.background = to_rgba(self.background);
        self.settings.always_on_top = self.always_on_top;
        self.settings.full_width = self.full_width;
        self.settings.list_items = self.todo_list.to_vec();
    }

    fn open_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match TickerSettings::load(&path) {
            Ok(settings) => {
                self.settings = settings;
                self.refresh_from_settings();
            }
            Err(e) => {
                tracing::warn!("Open failed for {:?}: {}", path, e);
                self.status_message = "Open file error".to_string();
            }
        }
    }

    fn save_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(crate::config::settings::DEFAULT_FILE_NAME)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        self.snapshot_settings();
        match self.settings.save(&path) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.status_message = format!("Saved to \"{name}\"");
            }
            Err(e) => {
                tracing::warn!("Save failed for {:?}: {}", path, e);
                self.status_message = "Save file error".to_string();
            }
        }
    }

    fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!("Could not open {}: {}", url, e);
            self.status_message = "Could not open browser".to_string();
        }
    }

    /// Show/Close ticker toggle. No-op while the list is empty.
    fn toggle_ticker(&mut self, ctx: &egui::Context) {
        if self.todo_list.is_empty() {
            return;
        }

        if self.ticker.take().is_some() {
            tracing::info!("Ticker closed");
            return;
        }

        self.snapshot_settings();

        let monitor = ctx
            .input(|i| i.viewport().monitor_size)
            .unwrap_or(egui::vec2(1920.0, 1080.0));

        // Ticker height is the font's line height plus 10 px padding.
        let row_height = ctx.fonts(|f| f.row_height(&self.font.font_id())).ceil();
        let height = row_height + 10.0;

        let (x, width) = if self.full_width {
            (0.0, monitor.x)
        } else {
            let margins = (self.settings.left_margin + self.settings.right_margin) as f32;
            (
                self.settings.left_margin as f32,
                (monitor.x - margins).max(1.0),
            )
        };
        let y = monitor.y - height - self.settings.bottom_margin as f32;

        self.ticker = Some(TickerWindow::new(
            self.todo_list.joined(&self.settings.separator),
            self.font,
            self.settings.timer_interval_ms,
            self.foreground,
            self.background,
            egui::pos2(x, y),
            egui::vec2(width, height),
            self.always_on_top,
        ));
    }

    fn apply_prompt(&mut self, field: PromptField, value: String) {
        if let Some(index) =
            apply_prompt_value(&mut self.settings, &mut self.todo_list, field, &value)
        {
            self.selected = Some(index);
        }
    }

    fn handle_list_action(&mut self, action: ListAction, ctx: &egui::Context) {
        match action {
            ListAction::Select(index) => {
                self.selected = Some(index);
            }
            ListAction::EditRequested(index) => {
                if let Some(current) = self.todo_list.get(index) {
                    self.prompt = Some(InputPrompt::new(PromptField::EditItem(index), current));
                }
            }
            ListAction::AddRequested => {
                self.prompt = Some(InputPrompt::new(PromptField::AddItem, ""));
            }
            ListAction::RemoveRequested => {
                if let Some(index) = self.selected {
                    if self.todo_list.remove(index).is_some() {
                        self.selected = None;
                    }
                }
            }
            ListAction::ToggleTicker => {
                self.toggle_ticker(ctx);
            }
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        ui.close_menu();
                        if !self.todo_list.is_empty() {
                            self.confirm_clear = true;
                        }
                    }
                    if ui.button("Open…").clicked() {
                        ui.close_menu();
                        self.open_file();
                    }
                    if ui.button("Save…").clicked() {
                        ui.close_menu();
                        self.save_file();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ui.close_menu();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Tools", |ui| {
                    ui.menu_button("Customize", |ui| {
                        if ui.button("Font…").clicked() {
                            ui.close_menu();
                            self.font_dialog = Some(FontDialog::new(self.font));
                        }
                        if ui.button("Separator…").clicked() {
                            ui.close_menu();
                            self.prompt = Some(InputPrompt::new(
                                PromptField::Separator,
                                self.settings.separator.clone(),
                            ));
                        }
                        if ui.button("Text speed…").clicked() {
                            ui.close_menu();
                            self.prompt = Some(InputPrompt::new(
                                PromptField::TimerInterval,
                                self.settings.timer_interval_ms.to_string(),
                            ));
                        }
                        ui.menu_button("Margins", |ui| {
                            if ui.button("Left…").clicked() {
                                ui.close_menu();
                                self.prompt = Some(InputPrompt::new(
                                    PromptField::LeftMargin,
                                    self.settings.left_margin.to_string(),
                                ));
                            }
                            if ui.button("Right…").clicked() {
                                ui.close_menu();
                                self.prompt = Some(InputPrompt::new(
                                    PromptField::RightMargin,
                                    self.settings.right_margin.to_string(),
                                ));
                            }
                            if ui.button("Bottom…").clicked() {
                                ui.close_menu();
                                self.prompt = Some(InputPrompt::new(
                                    PromptField::BottomMargin,
                                    self.settings.bottom_margin.to_string(),
                                ));
                            }
                        });
                        ui.menu_button("Colors", |ui| {
                            if ui.button("Foreground…").clicked() {
                                ui.close_menu();
                                self.color_dialog = Some(ColorDialog::new(
                                    ColorTarget::Foreground,
                                    self.foreground,
                                ));
                            }
                            if ui.button("Background…").clicked() {
                                ui.close_menu();
                                self.color_dialog = Some(ColorDialog::new(
                                    ColorTarget::Background,
                                    self.background,
                                ));
                            }
                        });
                    });
                    ui.menu_button("Options", |ui| {
                        ui.checkbox(&mut self.always_on_top, "Always on top");
                        ui.checkbox(&mut self.full_width, "Full width");
                        ui.checkbox(&mut self.remember_settings, "Remember settings");
                    });
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("Original thread @ DonationCoder.com").clicked() {
                        ui.close_menu();
                        self.open_url(THREAD_URL);
                    }
                    if ui.button("Source code @ GitHub.com").clicked() {
                        ui.close_menu();
                        self.open_url(REPO_URL);
                    }
                    ui.separator();
                    if ui.button("About…").clicked() {
                        ui.close_menu();
                        self.show_about = true;
                    }
                });
            });
        });
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        let mut finished_prompt = None;
        if let Some(prompt) = &mut self.prompt {
            if let Some(outcome) = prompt.show(ctx) {
                finished_prompt = Some((prompt.field, outcome));
            }
        }
        if let Some((field, outcome)) = finished_prompt {
            self.prompt = None;
            if let PromptOutcome::Submitted(value) = outcome {
                self.apply_prompt(field, value);
            }
        }

        let mut finished_font = None;
        if let Some(dialog) = &mut self.font_dialog {
            if let Some(outcome) = dialog.show(ctx) {
                finished_font = Some(outcome);
            }
        }
        if let Some(outcome) = finished_font {
            self.font_dialog = None;
            if let Some(spec) = outcome {
                self.font = spec;
            }
        }

        let mut finished_color = None;
        if let Some(dialog) = &mut self.color_dialog {
            if let Some(outcome) = dialog.show(ctx) {
                finished_color = Some((dialog.target, outcome));
            }
        }
        if let Some((target, outcome)) = finished_color {
            self.color_dialog = None;
            if let Some(color) = outcome {
                match target {
                    ColorTarget::Foreground => self.foreground = color,
                    ColorTarget::Background => self.background = color,
                }
            }
        }

        if self.confirm_clear {
            if let Some(yes) = ConfirmClear::show(ctx) {
                self.confirm_clear = false;
                if yes {
                    self.todo_list.clear();
                    self.selected = None;
                }
            }
        }

        if self.show_about {
            let modal = egui::Modal::new(egui::Id::new("about_dialog")).show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("To-do List ticker");
                    ui.label(
                        egui::RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                            .strong(),
                    );
                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);
                    ui.label("CC0 1.0 Universal - Public Domain Dedication");
                    ui.label("Made for: N.A.N.Y. 2023, DonationCoder.com");
                    ui.add_space(20.0);
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
            });
            if modal.should_close() {
                self.show_about = false;
            }
        }
    }
}

impl eframe::App for TickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_menu_bar(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&self.status_message);
                });
            });

        let mut list_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            list_action =
                self.list_panel
                    .show(ui, &self.todo_list, self.selected, self.ticker.is_some());
        });
        if let Some(action) = list_action {
            self.handle_list_action(action, ctx);
        }

        self.show_dialogs(ctx);

        if let Some(ticker) = &mut self.ticker {
            if !ticker.show(ctx) {
                self.ticker = None;
                tracing::info!("Ticker closed by user");
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.remember_settings {
            self.snapshot_settings();
            if let Err(e) = self.settings.save(&self.data_file_path) {
                tracing::error!("Could not persist settings at exit: {}", e);
            }
        } else if let Err(e) = TickerSettings::delete(&self.data_file_path) {
            tracing::error!("Could not delete settings file at exit: {}", e);
        }
        // The ticker viewport is immediate; it dies with the editor.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_prompt_garbage_keeps_old_value() {
        let mut settings = TickerSettings::default();
        settings.timer_interval_ms = 10;
        settings.left_margin = 50;
        let mut list = TodoList::new();

        apply_prompt_value(&mut settings, &mut list, PromptField::LeftMargin, "abc");
        apply_prompt_value(&mut settings, &mut list, PromptField::TimerInterval, "abc");
        apply_prompt_value(&mut settings, &mut list, PromptField::RightMargin, "12px");
        apply_prompt_value(&mut settings, &mut list, PromptField::BottomMargin, "");

        assert_eq!(settings.left_margin, 50);
        assert_eq!(settings.timer_interval_ms, 10);
        assert_eq!(settings.right_margin, TickerSettings::default().right_margin);
        assert_eq!(settings.bottom_margin, TickerSettings::default().bottom_margin);
    }

    #[test]
    fn test_numeric_prompt_accepts_surrounding_whitespace() {
        let mut settings = TickerSettings::default();
        let mut list = TodoList::new();

        apply_prompt_value(&mut settings, &mut list, PromptField::TimerInterval, " 25 ");
        apply_prompt_value(&mut settings, &mut list, PromptField::BottomMargin, "-5");

        assert_eq!(settings.timer_interval_ms, 25);
        assert_eq!(settings.bottom_margin, -5);
    }

    #[test]
    fn test_empty_prompt_leaves_separator_and_items_alone() {
        let mut settings = TickerSettings::default();
        let mut list = TodoList::from_items(vec!["Buy milk".to_string()]);
        let separator = settings.separator.clone();

        assert_eq!(
            apply_prompt_value(&mut settings, &mut list, PromptField::Separator, ""),
            None
        );
        assert_eq!(
            apply_prompt_value(&mut settings, &mut list, PromptField::AddItem, ""),
            None
        );
        assert_eq!(
            apply_prompt_value(&mut settings, &mut list, PromptField::EditItem(0), ""),
            None
        );

        assert_eq!(settings.separator, separator);
        assert_eq!(list.items(), ["Buy milk"]);
    }

    #[test]
    fn test_edit_prompt_changes_only_that_entry() {
        let mut settings = TickerSettings::default();
        let mut list =
            TodoList::from_items(vec!["Buy milk".to_string(), "Call Alice".to_string()]);

        let new_index =
            apply_prompt_value(&mut settings, &mut list, PromptField::EditItem(0), "Walk dog");
        assert_eq!(new_index, Some(1));
        assert_eq!(list.items(), ["Call Alice", "Walk dog"]);

        // An index past the end is a silent no-op.
        assert_eq!(
            apply_prompt_value(&mut settings, &mut list, PromptField::EditItem(7), "X"),
            None
        );
        assert_eq!(list.items(), ["Call Alice", "Walk dog"]);
    }
}
