//! `formula-xldialog` builds and decodes the definition tables consumed and returned by Excel's
//! legacy `DIALOG.BOX` primitive.
//!
//! Callers describe a dialog as a [`Dialog`] holding typed controls (buttons, edit boxes, list
//! boxes, labels). The crate compiles those controls into a 7-column [`DefinitionTable`], hands
//! it to a [`DialogHost`], and copies the values of the returned table back into the controls.
//!
//! The crate exposes:
//! - The table model ([`Cell`], [`Row`], [`DefinitionTable`]) and item codes ([`ControlKind`]).
//! - Controls: [`ControlItem`] plus typed wrappers, and the list-backed [`ListBox`],
//!   [`DropdownList`] and [`ComboBox`] which publish their items as workbook names.
//! - [`ControlCollection`], which owns control order, builds tables and applies results.
//! - Host seams ([`NamedListHost`], [`DialogHost`]) and an [`InMemoryHost`] for tests.
//!
//! Everything here is single-threaded; the host's modal call blocks until the user closes the
//! dialog.

mod cell;
mod collection;
mod controls;
mod dialog;
mod error;
mod host;
mod item;
mod kind;
mod list;
mod names;
mod settings;
mod table;

pub use crate::cell::{Cell, CellError};
pub use crate::collection::{ControlCollection, ControlHandle, SharedControl};
pub use crate::controls::{
    CancelButton, CheckBox, FormulaEdit, GroupBox, HelpButton, IntegerEdit, Label, NumberEdit,
    OkButton, OptionButton, OptionGroup, ReferenceEdit, TextBox,
};
pub use crate::dialog::Dialog;
pub use crate::error::DialogError;
pub use crate::host::{
    DialogHost, HostError, InMemoryHost, ModalOutcome, NamedListHost, ScriptedResponse,
};
pub use crate::item::{ControlItem, DialogControl};
pub use crate::kind::{ControlKind, DISABLE_OFFSET};
pub use crate::list::{ComboBox, DropdownList, ListBox, ListControl, ListState};
pub use crate::names::{validate_list_name, ListNameError, LIST_NAME_MAX_LEN};
pub use crate::settings::DialogSettings;
pub use crate::table::{
    DefinitionTable, Row, COL_HEIGHT, COL_KIND, COL_TEXT, COL_VALUE, COL_WIDTH, COL_X, COL_Y,
    ROW_WIDTH,
};
