//! List-backed controls.
//!
//! `DIALOG.BOX` cannot take list contents inline: each list box, drop-down, or combo box names a
//! workbook-level name in its text column, and that name must resolve to the items when the
//! dialog is rendered. Every list control therefore registers its items with the host before the
//! table is built and removes the name again when disposed.

use log::{debug, warn};

use crate::cell::Cell;
use crate::error::DialogError;
use crate::host::NamedListHost;
use crate::item::{selection_from_cell, selection_to_cell, ControlItem, DialogControl};
use crate::kind::ControlKind;
use crate::names::{generated_list_name, validate_list_name};
use crate::settings::DialogSettings;
use crate::table::Row;

/// Items of a list-backed control plus the name they are currently registered under.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    items: Vec<String>,
    registered: Option<String>,
}

impl ListState {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Name the items were last registered under, if they still are.
    pub fn registered_name(&self) -> Option<&str> {
        self.registered.as_deref()
    }
}

/// Item and selection accessors shared by [`ListBox`], [`DropdownList`] and [`ComboBox`].
///
/// The list name is kept in the item's text column; the selection is kept 1-based in the value
/// column and exposed 0-based.
pub trait ListControl: DialogControl {
    fn list(&self) -> &ListState;
    fn list_mut(&mut self) -> &mut ListState;

    fn items(&self) -> &[String] {
        &self.list().items
    }

    fn items_mut(&mut self) -> &mut Vec<String> {
        &mut self.list_mut().items
    }

    fn add_item(&mut self, item: impl Into<String>)
    where
        Self: Sized,
    {
        self.list_mut().items.push(item.into());
    }

    fn extend_items<I, S>(&mut self, items: I)
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_mut()
            .items
            .extend(items.into_iter().map(Into::into));
    }

    fn clear_items(&mut self) {
        self.list_mut().items.clear();
    }

    fn selected_index(&self) -> Option<usize> {
        selection_from_cell(self.item().value())
    }

    fn set_selected_index(&mut self, selected: Option<usize>) {
        self.item_mut().set_value(selection_to_cell(selected));
    }

    fn selected_item(&self) -> Option<&str> {
        let selected = self.selected_index()?;
        self.items().get(selected).map(String::as_str)
    }

    /// Workbook name the items are published under. Empty until set or generated at build.
    fn list_name(&self) -> &str {
        self.item().text()
    }

    fn set_list_name(&mut self, name: &str) {
        self.item_mut().set_text(name);
    }
}

/// Prepares and publishes a list control's items. Any failure aborts the build before the
/// dialog is shown.
fn register_list(
    item: &mut ControlItem,
    list: &mut ListState,
    host: &mut dyn NamedListHost,
    settings: &DialogSettings,
) -> Result<(), DialogError> {
    if let Some(selected) = selection_from_cell(item.value()) {
        if selected >= list.items.len() {
            warn!(
                "selection {selected} is out of range for {} items; clearing it",
                list.items.len()
            );
            item.set_value(Cell::Empty);
        }
    }

    if !item.has_text() {
        let name =
            generated_list_name(&settings.list_name_prefix, item.kind(), item.index());
        item.set_text(name);
    }
    let name = item.text().to_string();

    if settings.validate_list_names {
        validate_list_name(&name).map_err(|source| DialogError::InvalidListName {
            name: name.clone(),
            source,
        })?;
    }

    // The host rejects empty lists, so an empty control publishes a single blank entry.
    let items = if list.items.is_empty() {
        vec![String::new()]
    } else {
        list.items.clone()
    };

    // `registered` only changes once the host accepted the new registration, so a failed
    // rebuild still leaves the earlier name for dispose to clear.
    host.set_named_list(&name, &items)
        .map_err(|err| DialogError::ListRegistration {
            name: name.clone(),
            reason: err.message,
        })?;
    debug!("registered list `{name}` with {} items", items.len());
    if let Some(previous) = list.registered.replace(name) {
        if list.registered.as_deref() != Some(previous.as_str()) {
            host.clear_named_list(&previous);
        }
    }
    Ok(())
}

fn unregister_list(list: &mut ListState, host: &mut dyn NamedListHost) {
    if let Some(name) = list.registered.take() {
        if !host.clear_named_list(&name) {
            debug!("list `{name}` was already gone at dispose");
        }
    }
}

macro_rules! list_control {
    ($ty:ident) => {
        impl ListControl for $ty {
            fn list(&self) -> &ListState {
                &self.list
            }

            fn list_mut(&mut self) -> &mut ListState {
                &mut self.list
            }
        }
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListBox {
    item: ControlItem,
    list: ListState,
}

impl ListBox {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::ListBox),
            list: ListState::default(),
        }
    }
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogControl for ListBox {
    fn item(&self) -> &ControlItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut ControlItem {
        &mut self.item
    }

    fn before_build(
        &mut self,
        host: &mut dyn NamedListHost,
        settings: &DialogSettings,
    ) -> Result<(), DialogError> {
        register_list(&mut self.item, &mut self.list, host, settings)
    }

    fn dispose(&mut self, host: &mut dyn NamedListHost) {
        unregister_list(&mut self.list, host);
    }
}

list_control!(ListBox);

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownList {
    item: ControlItem,
    list: ListState,
}

impl DropdownList {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::DropdownList),
            list: ListState::default(),
        }
    }

    /// The selected item, or an empty string when nothing is selected.
    pub fn value(&self) -> &str {
        self.selected_item().unwrap_or("")
    }
}

impl Default for DropdownList {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogControl for DropdownList {
    fn item(&self) -> &ControlItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut ControlItem {
        &mut self.item
    }

    fn before_build(
        &mut self,
        host: &mut dyn NamedListHost,
        settings: &DialogSettings,
    ) -> Result<(), DialogError> {
        register_list(&mut self.item, &mut self.list, host, settings)
    }

    fn dispose(&mut self, host: &mut dyn NamedListHost) {
        unregister_list(&mut self.list, host);
    }
}

list_control!(DropdownList);

/// Drop-down combination edit/list box.
///
/// The host requires the combo row to be preceded by a text edit row that holds the typed text,
/// so this control always encodes as two rows: the edit row first, then the list row. Geometry
/// set on the combo box is mirrored onto the edit row, and [`DialogControl::text`] reads and
/// writes the edit row's value rather than the list name.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboBox {
    item: ControlItem,
    list: ListState,
    edit: ControlItem,
}

impl ComboBox {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::ComboBox),
            list: ListState::default(),
            edit: ControlItem::new(ControlKind::TextEdit),
        }
    }

    /// The edit row that precedes the list row.
    pub fn edit(&self) -> &ControlItem {
        &self.edit
    }
}

impl Default for ComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogControl for ComboBox {
    fn item(&self) -> &ControlItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut ControlItem {
        &mut self.item
    }

    fn set_x(&mut self, x: i32) {
        self.item.set_x(x);
        self.edit.set_x(x);
    }

    fn set_y(&mut self, y: i32) {
        self.item.set_y(y);
        self.edit.set_y(y);
    }

    fn set_width(&mut self, width: i32) {
        self.item.set_width(width);
        self.edit.set_width(width);
    }

    fn set_height(&mut self, height: i32) {
        self.item.set_height(height);
        self.edit.set_height(height);
    }

    fn text(&self) -> &str {
        self.edit.value().as_str().unwrap_or("")
    }

    /// Sets the edit text and selects the matching item; text that matches no item clears the
    /// selection.
    fn set_text(&mut self, text: &str) {
        self.edit.set_value(text);
        let selected = self.list.items.iter().position(|item| item == text);
        self.set_selected_index(selected);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.item.set_enabled(enabled);
        self.edit.set_enabled(enabled);
    }

    fn row_count(&self) -> usize {
        2
    }

    fn to_rows(&self) -> Vec<Row> {
        vec![self.edit.to_row(), self.item.to_row()]
    }

    fn apply_result(&mut self, rows: &[Row]) {
        if let [edit_row, list_row] = rows {
            self.edit.set_value(edit_row.value().clone());
            self.item.set_value(list_row.value().clone());
        }
    }

    fn before_build(
        &mut self,
        host: &mut dyn NamedListHost,
        settings: &DialogSettings,
    ) -> Result<(), DialogError> {
        register_list(&mut self.item, &mut self.list, host, settings)
    }

    fn dispose(&mut self, host: &mut dyn NamedListHost) {
        unregister_list(&mut self.list, host);
    }
}

list_control!(ComboBox);
