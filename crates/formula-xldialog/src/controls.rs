//! Typed wrappers over [`ControlItem`] for the single-row control kinds.

use crate::cell::Cell;
use crate::item::{selection_from_cell, selection_to_cell, ControlItem, DialogControl};
use crate::kind::ControlKind;

macro_rules! single_row_control {
    ($ty:ident) => {
        impl DialogControl for $ty {
            fn item(&self) -> &ControlItem {
                &self.item
            }

            fn item_mut(&mut self) -> &mut ControlItem {
                &mut self.item
            }
        }
    };
}

/// Static text.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    item: ControlItem,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::StaticText);
        item.set_text(text);
        Self { item }
    }
}

single_row_control!(Label);

#[derive(Clone, Debug, PartialEq)]
pub struct GroupBox {
    item: ControlItem,
}

impl GroupBox {
    pub fn new(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::GroupBox);
        item.set_x(10);
        item.set_y(10);
        item.set_text(text);
        Self { item }
    }
}

single_row_control!(GroupBox);

/// Free-form text edit box. The edited text lives in the value column.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    item: ControlItem,
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::TextEdit),
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut text_box = Self::new();
        text_box.set_value(value);
        text_box
    }

    pub fn value(&self) -> Option<&str> {
        self.item.value().as_str()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.item.set_value(Cell::Text(value.into()));
    }

    pub fn clear_value(&mut self) {
        self.item.set_value(Cell::Empty);
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(TextBox);

#[derive(Clone, Debug, PartialEq)]
pub struct IntegerEdit {
    item: ControlItem,
}

impl IntegerEdit {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::IntegerEdit),
        }
    }

    /// `None` when the box holds no number.
    pub fn value(&self) -> Option<i32> {
        self.item.value().as_i32()
    }

    pub fn set_value(&mut self, value: i32) {
        self.item.set_value(value);
    }

    pub fn clear_value(&mut self) {
        self.item.set_value(Cell::Empty);
    }
}

impl Default for IntegerEdit {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(IntegerEdit);

#[derive(Clone, Debug, PartialEq)]
pub struct NumberEdit {
    item: ControlItem,
}

impl NumberEdit {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::NumberEdit),
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.item.value().as_f64()
    }

    pub fn set_value(&mut self, value: f64) {
        self.item.set_value(value);
    }

    pub fn clear_value(&mut self) {
        self.item.set_value(Cell::Empty);
    }
}

impl Default for NumberEdit {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(NumberEdit);

#[derive(Clone, Debug, PartialEq)]
pub struct FormulaEdit {
    item: ControlItem,
}

impl FormulaEdit {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::FormulaEdit),
        }
    }

    pub fn formula(&self) -> Option<&str> {
        self.item.value().as_str()
    }

    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.item.set_value(Cell::Text(formula.into()));
    }
}

impl Default for FormulaEdit {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(FormulaEdit);

/// Reference edit box; the host returns the picked range as an R1C1 string.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceEdit {
    item: ControlItem,
}

impl ReferenceEdit {
    pub fn new() -> Self {
        Self {
            item: ControlItem::new(ControlKind::ReferenceEdit),
        }
    }

    pub fn reference(&self) -> Option<&str> {
        self.item.value().as_str()
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.item.set_value(Cell::Text(reference.into()));
    }
}

impl Default for ReferenceEdit {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(ReferenceEdit);

#[derive(Clone, Debug, PartialEq)]
pub struct CheckBox {
    item: ControlItem,
}

impl CheckBox {
    pub fn new(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::CheckBox);
        item.set_text(text);
        Self { item }
    }

    /// An unset (or error) value cell reads as unchecked.
    pub fn value(&self) -> bool {
        let cell = self.item.value();
        !cell.is_null() && cell.as_bool().unwrap_or(false)
    }

    pub fn set_value(&mut self, checked: bool) {
        self.item.set_value(checked);
    }
}

single_row_control!(CheckBox);

/// OK button; `is_default` switches between the default (1) and plain (3) item codes.
#[derive(Clone, Debug, PartialEq)]
pub struct OkButton {
    item: ControlItem,
}

impl OkButton {
    pub fn new() -> Self {
        Self::with_text("OK")
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::OkButton);
        item.set_text(text);
        Self { item }
    }

    pub fn is_default(&self) -> bool {
        self.item.kind() == ControlKind::DefaultOkButton
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.item.set_kind(if is_default {
            ControlKind::DefaultOkButton
        } else {
            ControlKind::OkButton
        });
    }
}

impl Default for OkButton {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(OkButton);

/// Cancel button; `is_default` switches between the default (4) and plain (2) item codes.
#[derive(Clone, Debug, PartialEq)]
pub struct CancelButton {
    item: ControlItem,
}

impl CancelButton {
    pub fn new() -> Self {
        Self::with_text("Cancel")
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::CancelButton);
        item.set_text(text);
        Self { item }
    }

    pub fn is_default(&self) -> bool {
        self.item.kind() == ControlKind::DefaultCancelButton
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.item.set_kind(if is_default {
            ControlKind::DefaultCancelButton
        } else {
            ControlKind::CancelButton
        });
    }
}

impl Default for CancelButton {
    fn default() -> Self {
        Self::new()
    }
}

single_row_control!(CancelButton);

/// Option button group. The option buttons that follow it in the collection belong to it; the
/// host reports the chosen button as a 1-based position.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionGroup {
    item: ControlItem,
}

impl OptionGroup {
    pub fn new(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::OptionGroup);
        item.set_text(text);
        Self { item }
    }

    /// 0-based index of the chosen option button.
    pub fn selected(&self) -> Option<usize> {
        selection_from_cell(self.item.value())
    }

    pub fn set_selected(&mut self, selected: Option<usize>) {
        self.item.set_value(selection_to_cell(selected));
    }
}

single_row_control!(OptionGroup);

#[derive(Clone, Debug, PartialEq)]
pub struct OptionButton {
    item: ControlItem,
}

impl OptionButton {
    pub fn new(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::OptionButton);
        item.set_text(text);
        Self { item }
    }
}

single_row_control!(OptionButton);

/// Help button; the value column carries the help reference (`file!topic`).
#[derive(Clone, Debug, PartialEq)]
pub struct HelpButton {
    item: ControlItem,
}

impl HelpButton {
    pub fn new(text: impl Into<String>) -> Self {
        let mut item = ControlItem::new(ControlKind::HelpButton);
        item.set_text(text);
        Self { item }
    }

    pub fn help_reference(&self) -> Option<&str> {
        self.item.value().as_str()
    }

    pub fn set_help_reference(&mut self, reference: impl Into<String>) {
        self.item.set_value(Cell::Text(reference.into()));
    }
}

single_row_control!(HelpButton);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{COL_KIND, COL_VALUE};

    #[test]
    fn unset_checkbox_reads_false() {
        let mut check = CheckBox::new("Bold");
        assert!(!check.value());
        check.item_mut().set_value(Cell::Number(1.0));
        assert!(check.value());
    }

    #[test]
    fn default_flags_swap_button_codes() {
        let mut ok = OkButton::new();
        assert_eq!(ok.item().kind_code(), Some(3));
        ok.set_default(true);
        assert!(ok.is_default());
        assert_eq!(ok.to_rows()[0].get(COL_KIND), &Cell::Int(1));

        let mut cancel = CancelButton::new();
        cancel.set_default(true);
        cancel.set_enabled(false);
        assert_eq!(cancel.item().kind_code(), Some(204));
    }

    #[test]
    fn group_box_defaults_to_the_top_left_corner() {
        let group = GroupBox::new("Options");
        assert_eq!((group.x(), group.y()), (10, 10));
    }

    #[test]
    fn option_group_selection_is_one_based_in_the_row() {
        let mut group = OptionGroup::new("Align");
        group.set_selected(Some(2));
        assert_eq!(group.to_rows()[0].get(COL_VALUE), &Cell::Int(3));
        group.set_selected(None);
        assert_eq!(group.selected(), None);
    }
}
