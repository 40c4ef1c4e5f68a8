use eframe::egui;

use crate::model::todo_list::TodoList;

/// What the user did in the list view this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Select(usize),
    /// Right-click on an entry: open the edit prompt for it.
    EditRequested(usize),
    AddRequested,
    RemoveRequested,
    ToggleTicker,
}

/// The sorted to-do list view with its Add/Remove buttons and the
/// show/close-ticker toggle. Pure view: renders the model, reports actions.
#[derive(Default)]
pub struct ListPanel;

impl ListPanel {
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        list: &TodoList,
        selected: Option<usize>,
        ticker_shown: bool,
    ) -> Option<ListAction> {
        let mut action = None;

        ui.heading("To-do list");
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height((ui.available_height() - 70.0).max(60.0))
            .show(ui, |ui| {
                for (index, item) in list.items().iter().enumerate() {
                    let response =
                        ui.selectable_label(selected == Some(index), item.as_str());
                    if response.clicked() {
                        action = Some(ListAction::Select(index));
                    }
                    if response.secondary_clicked() {
                        action = Some(ListAction::EditRequested(index));
                    }
                }
                if list.is_empty() {
                    ui.weak("No items yet. Use Add to create one.");
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Add").clicked() {
                action = Some(ListAction::AddRequested);
            }
            if ui.button("Remove").clicked() {
                action = Some(ListAction::RemoveRequested);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if ticker_shown {
                    "Close ticker"
                } else {
                    "Show ticker"
                };
                if ui.button(label).clicked() {
                    action = Some(ListAction::ToggleTicker);
                }
            });
        });

        action
    }
}
