use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::error::DialogError;
use crate::host::NamedListHost;
use crate::item::{ControlItem, DialogControl};
use crate::settings::DialogSettings;
use crate::table::DefinitionTable;

/// A typed handle to a control owned by a [`ControlCollection`].
pub type ControlHandle<T> = Rc<RefCell<T>>;

/// A type-erased handle as stored by the collection.
pub type SharedControl = Rc<RefCell<dyn DialogControl>>;

/// The ordered controls of one dialog, header first.
///
/// Callers keep [`ControlHandle`]s to read results back after the dialog closes. The
/// collection borrows each control mutably while building, decoding and disposing, so no
/// handle may be borrowed across those calls. Collections are single-threaded by construction.
#[derive(Debug)]
pub struct ControlCollection {
    items: Vec<SharedControl>,
    header: ControlHandle<ControlItem>,
    settings: DialogSettings,
    built_rows: Option<usize>,
}

impl ControlCollection {
    pub fn new() -> Self {
        Self::with_settings(DialogSettings::default())
    }

    pub fn with_settings(settings: DialogSettings) -> Self {
        let header = Rc::new(RefCell::new(ControlItem::header()));
        let shared: SharedControl = header.clone();
        Self {
            items: vec![shared],
            header,
            settings,
            built_rows: None,
        }
    }

    /// The dialog header row, always at position 0.
    pub fn header(&self) -> &ControlHandle<ControlItem> {
        &self.header
    }

    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    /// Number of entries, including the header.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, position: usize) -> Option<&SharedControl> {
        self.items.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedControl> {
        self.items.iter()
    }

    /// Appends `control` and returns a handle to it.
    pub fn add<T: DialogControl + 'static>(&mut self, control: T) -> ControlHandle<T> {
        let handle = Rc::new(RefCell::new(control));
        self.push_shared(handle.clone());
        handle
    }

    /// Appends a control the caller already holds a handle to.
    pub fn push_shared(&mut self, control: SharedControl) {
        control.borrow_mut().item_mut().set_index(self.items.len());
        self.items.push(control);
    }

    /// Inserts `control` at `position`, shifting later controls (and their indices) back by one.
    pub fn insert<T: DialogControl + 'static>(
        &mut self,
        position: usize,
        control: T,
    ) -> Result<ControlHandle<T>, DialogError> {
        if position == 0 {
            return Err(DialogError::HeaderPinned);
        }
        if position > self.items.len() {
            return Err(DialogError::OutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let handle = Rc::new(RefCell::new(control));
        self.items.insert(position, handle.clone());
        self.renumber(position);
        Ok(handle)
    }

    /// Removes the control at `position`; controls after it move up one index.
    pub fn remove(&mut self, position: usize) -> Result<SharedControl, DialogError> {
        if position == 0 {
            return Err(DialogError::HeaderPinned);
        }
        if position >= self.items.len() {
            return Err(DialogError::OutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(position);
        self.renumber(position);
        Ok(removed)
    }

    fn renumber(&mut self, start: usize) {
        for (index, control) in self.items.iter().enumerate().skip(start) {
            control.borrow_mut().item_mut().set_index(index);
        }
    }

    fn visible(&self) -> impl Iterator<Item = &SharedControl> {
        self.items.iter().filter(|control| control.borrow().visible())
    }

    fn visible_row_count(&self) -> usize {
        self.visible().map(|control| control.borrow().row_count()).sum()
    }

    /// Builds the definition table from the visible controls, in order.
    ///
    /// List-backed controls publish their items to `host` first; the first failure aborts the
    /// build. Lists registered before the failure stay registered until [`Self::dispose`].
    pub fn build(&mut self, host: &mut dyn NamedListHost) -> Result<DefinitionTable, DialogError> {
        self.built_rows = None;
        let mut table = DefinitionTable::new();
        for control in self.visible() {
            let mut control = control.borrow_mut();
            control.before_build(host, &self.settings)?;
            let rows = control.to_rows();
            debug_assert_eq!(rows.len(), control.row_count());
            for row in rows {
                table.push(row);
            }
        }
        debug!(
            "built dialog table with {} rows from {} controls",
            table.height(),
            self.items.len()
        );
        self.built_rows = Some(table.height());
        Ok(table)
    }

    /// Copies column 7 of `result` back into the controls, walking them the same way
    /// [`Self::build`] did.
    ///
    /// Fails without touching any control if no build preceded this call, if `result` has a
    /// different number of rows than the build produced, or if the visible controls changed
    /// since. A successful call consumes the build.
    pub fn update_result(&mut self, result: &DefinitionTable) -> Result<(), DialogError> {
        let built = self.built_rows.ok_or(DialogError::NotBuilt)?;
        if result.height() != built {
            return Err(DialogError::ResultShape {
                expected: built,
                actual: result.height(),
            });
        }
        let current = self.visible_row_count();
        if current != built {
            return Err(DialogError::CollectionChanged { built, current });
        }

        let rows = result.rows();
        let mut offset = 0;
        for control in self.visible() {
            let mut control = control.borrow_mut();
            let count = control.row_count();
            control.apply_result(&rows[offset..offset + count]);
            offset += count;
        }
        debug!("applied {offset} result rows");
        self.built_rows = None;
        Ok(())
    }

    /// Disposes every control, visible or not, in order.
    pub fn dispose(&mut self, host: &mut dyn NamedListHost) {
        for control in &self.items {
            control.borrow_mut().dispose(host);
        }
        self.built_rows = None;
    }
}

impl Default for ControlCollection {
    fn default() -> Self {
        Self::new()
    }
}
