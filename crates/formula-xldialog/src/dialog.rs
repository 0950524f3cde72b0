use log::{debug, info};

use crate::cell::Cell;
use crate::collection::{ControlCollection, ControlHandle};
use crate::error::DialogError;
use crate::host::{DialogHost, ModalOutcome};
use crate::item::DialogControl;
use crate::settings::DialogSettings;
use crate::table::DefinitionTable;

/// A `DIALOG.BOX` dialog: a header row describing the dialog itself plus its controls.
///
/// ```
/// use formula_xldialog::{Dialog, DropdownList, InMemoryHost, ListControl, OkButton};
///
/// let mut dialog = Dialog::new();
/// dialog.set_text("Pick");
/// let colors = dialog.add({
///     let mut list = DropdownList::new();
///     list.extend_items(["Red", "Green", "Blue"]);
///     list
/// });
/// dialog.add(OkButton::new());
///
/// let mut host = InMemoryHost::new();
/// assert!(dialog.show_dialog(&mut host).unwrap());
/// assert_eq!(colors.borrow().value(), "");
/// ```
#[derive(Debug)]
pub struct Dialog {
    controls: ControlCollection,
    result: Option<DefinitionTable>,
}

impl Dialog {
    pub fn new() -> Self {
        Self::with_settings(DialogSettings::default())
    }

    pub fn with_settings(settings: DialogSettings) -> Self {
        let controls = ControlCollection::with_settings(settings.clone());
        {
            let mut header = controls.header().borrow_mut();
            header.set_width(settings.default_width);
            header.set_height(settings.default_height);
            header.set_text(settings.default_title);
        }
        Self {
            controls,
            result: None,
        }
    }

    pub fn controls(&self) -> &ControlCollection {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlCollection {
        &mut self.controls
    }

    /// Appends a control; shorthand for `controls_mut().add(control)`.
    pub fn add<T: DialogControl + 'static>(&mut self, control: T) -> ControlHandle<T> {
        self.controls.add(control)
    }

    pub fn x(&self) -> i32 {
        self.controls.header().borrow().x()
    }

    pub fn set_x(&mut self, x: i32) {
        self.controls.header().borrow_mut().set_x(x);
    }

    pub fn y(&self) -> i32 {
        self.controls.header().borrow().y()
    }

    pub fn set_y(&mut self, y: i32) {
        self.controls.header().borrow_mut().set_y(y);
    }

    pub fn width(&self) -> i32 {
        self.controls.header().borrow().width()
    }

    pub fn set_width(&mut self, width: i32) {
        self.controls.header().borrow_mut().set_width(width);
    }

    pub fn height(&self) -> i32 {
        self.controls.header().borrow().height()
    }

    pub fn set_height(&mut self, height: i32) {
        self.controls.header().borrow_mut().set_height(height);
    }

    /// Dialog title.
    pub fn text(&self) -> String {
        self.controls.header().borrow().text().to_string()
    }

    pub fn set_text(&mut self, title: impl Into<String>) {
        self.controls.header().borrow_mut().set_text(title);
    }

    /// Position number of the item that has focus when the dialog opens.
    ///
    /// Shares the header's value column with [`Dialog::help_reference`]; setting one replaces
    /// the other.
    pub fn default_item(&self) -> Option<usize> {
        self.controls
            .header()
            .borrow()
            .value()
            .as_i64()
            .and_then(|position| usize::try_from(position).ok())
    }

    pub fn set_default_item(&mut self, position: Option<usize>) {
        let value = position.map_or(Cell::Empty, |position| Cell::Int(position as i64));
        self.controls.header().borrow_mut().set_value(value);
    }

    /// Help topic reference (`file!topic`) for the dialog's help button.
    pub fn help_reference(&self) -> Option<String> {
        self.controls
            .header()
            .borrow()
            .value()
            .as_str()
            .map(str::to_string)
    }

    pub fn set_help_reference(&mut self, reference: impl Into<String>) {
        self.controls
            .header()
            .borrow_mut()
            .set_value(Cell::Text(reference.into()));
    }

    /// The table returned by the last confirmed presentation.
    pub fn result_table(&self) -> Option<&DefinitionTable> {
        self.result.as_ref()
    }

    /// Builds the definition table, shows it through `host` and decodes the result.
    ///
    /// Returns `Ok(true)` when the user confirmed (control values are updated in place) and
    /// `Ok(false)` when they cancelled (control values are left as they were). Every control is
    /// disposed afterwards on all paths, including build and host failures.
    pub fn show_dialog<H: DialogHost>(&mut self, host: &mut H) -> Result<bool, DialogError> {
        let outcome = self.present(host);
        self.controls.dispose(host);
        outcome
    }

    fn present<H: DialogHost>(&mut self, host: &mut H) -> Result<bool, DialogError> {
        let table = self.controls.build(host)?;
        match host.show_modal_table(&table)? {
            ModalOutcome::Confirmed(result) => {
                self.controls.update_result(&result)?;
                debug!("dialog `{}` confirmed", self.text());
                self.result = Some(result);
                Ok(true)
            }
            ModalOutcome::Cancelled => {
                info!("dialog `{}` cancelled", self.text());
                Ok(false)
            }
        }
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{COL_HEIGHT, COL_KIND, COL_TEXT, COL_VALUE, COL_WIDTH};

    #[test]
    fn new_dialog_header_uses_settings_defaults() {
        let dialog = Dialog::new();
        let header = dialog.controls().header().borrow().to_row();
        assert_eq!(header.get(COL_KIND), &Cell::Empty);
        assert_eq!(header.get(COL_WIDTH), &Cell::Int(300));
        assert_eq!(header.get(COL_HEIGHT), &Cell::Int(200));
        assert_eq!(header.get(COL_TEXT), &Cell::Text("Text".to_string()));
        assert_eq!(dialog.x(), -1);
    }

    #[test]
    fn default_item_and_help_reference_share_the_value_column() {
        let mut dialog = Dialog::new();
        dialog.set_default_item(Some(3));
        assert_eq!(dialog.default_item(), Some(3));

        dialog.set_help_reference("help.chm!120");
        assert_eq!(dialog.default_item(), None);
        assert_eq!(dialog.help_reference().as_deref(), Some("help.chm!120"));
        assert_eq!(
            dialog.controls().header().borrow().to_row().get(COL_VALUE),
            &Cell::Text("help.chm!120".to_string())
        );
    }
}
