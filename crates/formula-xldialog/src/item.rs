use std::fmt;

use crate::cell::Cell;
use crate::error::DialogError;
use crate::host::NamedListHost;
use crate::kind::ControlKind;
use crate::settings::DialogSettings;
use crate::table::{
    DefinitionTable, Row, COL_HEIGHT, COL_KIND, COL_TEXT, COL_VALUE, COL_WIDTH, COL_X, COL_Y,
};

/// The state behind one definition-table row.
///
/// Geometry is exposed with `-1` meaning "host default"; internally an absent coordinate is
/// `None` and is written as the table's null sentinel, never as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlItem {
    kind: ControlKind,
    enabled: bool,
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
    text: Option<String>,
    value: Cell,
    visible: bool,
    index: usize,
}

impl ControlItem {
    /// A generic item for kinds without a typed wrapper, such as [`ControlKind::Icons`].
    ///
    /// The header kind and the list-backed kinds are refused: the collection owns the only
    /// header, and list rows need the registration and row layout of [`ListBox`],
    /// [`DropdownList`] or [`ComboBox`].
    ///
    /// [`ListBox`]: crate::ListBox
    /// [`DropdownList`]: crate::DropdownList
    /// [`ComboBox`]: crate::ComboBox
    pub fn try_new(kind: ControlKind) -> Result<Self, DialogError> {
        if kind == ControlKind::Form || kind.is_list_backed() {
            return Err(DialogError::GenericKind { kind });
        }
        Ok(Self::new(kind))
    }

    pub(crate) fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            enabled: true,
            x: None,
            y: None,
            width: None,
            height: None,
            text: None,
            value: Cell::Empty,
            visible: true,
            index: 0,
        }
    }

    pub(crate) fn header() -> Self {
        Self::new(ControlKind::Form)
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: ControlKind) {
        self.kind = kind;
    }

    /// Integer written to the item column, including the disable offset.
    pub fn kind_code(&self) -> Option<i32> {
        self.kind.encode(self.enabled)
    }

    pub fn x(&self) -> i32 {
        self.x.unwrap_or(-1)
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = coordinate(x);
    }

    pub fn y(&self) -> i32 {
        self.y.unwrap_or(-1)
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = coordinate(y);
    }

    pub fn width(&self) -> i32 {
        self.width.unwrap_or(-1)
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = coordinate(width);
    }

    pub fn height(&self) -> i32 {
        self.height.unwrap_or(-1)
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = coordinate(height);
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn value(&self) -> &Cell {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Cell>) {
        self.value = value.into();
    }

    /// The header row is always enabled.
    pub fn enabled(&self) -> bool {
        self.kind == ControlKind::Form || self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.kind != ControlKind::Form {
            self.enabled = enabled;
        }
    }

    /// Invisible items are left out of the built table entirely.
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Position within the owning collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn to_row(&self) -> Row {
        Row::new([
            Cell::from(self.kind_code()),
            Cell::from(self.x),
            Cell::from(self.y),
            Cell::from(self.width),
            Cell::from(self.height),
            Cell::from(self.text.clone()),
            self.value.clone(),
        ])
    }

    /// Decodes a single row. `position` is only used to report errors.
    pub fn from_row(position: usize, row: &Row) -> Result<Self, DialogError> {
        let malformed = |reason: String| DialogError::MalformedRow {
            row: position,
            reason,
        };

        let kind_cell = row.get(COL_KIND);
        let (kind, enabled) = if kind_cell.is_null() {
            (ControlKind::Form, true)
        } else {
            let code = kind_cell
                .as_i32()
                .ok_or_else(|| malformed(format!("item code {kind_cell:?} is not a number")))?;
            ControlKind::from_code(code)
                .ok_or_else(|| malformed(format!("unknown item code {code}")))?
        };

        let text = match row.get(COL_TEXT) {
            Cell::Text(text) => Some(text.clone()),
            cell if cell.is_null() => None,
            cell => return Err(malformed(format!("text cell {cell:?} is not a string"))),
        };

        let mut item = Self::new(kind);
        item.enabled = enabled;
        item.x = read_coordinate(row.get(COL_X)).map_err(&malformed)?;
        item.y = read_coordinate(row.get(COL_Y)).map_err(&malformed)?;
        item.width = read_coordinate(row.get(COL_WIDTH)).map_err(&malformed)?;
        item.height = read_coordinate(row.get(COL_HEIGHT)).map_err(&malformed)?;
        item.text = text;
        item.value = row.get(COL_VALUE).clone();
        item.index = position;
        Ok(item)
    }

    /// Decodes every row of `table`, one item per row.
    pub fn decode_table(table: &DefinitionTable) -> Result<Vec<Self>, DialogError> {
        table
            .rows()
            .iter()
            .enumerate()
            .map(|(position, row)| Self::from_row(position, row))
            .collect()
    }
}

fn coordinate(value: i32) -> Option<i32> {
    (value >= 0).then_some(value)
}

fn read_coordinate(cell: &Cell) -> Result<Option<i32>, String> {
    if cell.is_null() {
        return Ok(None);
    }
    cell.as_i32()
        .map(coordinate)
        .ok_or_else(|| format!("geometry cell {cell:?} is not an integer"))
}

/// Reads a 1-based host selection. `0` and the null sentinel both mean "nothing selected".
pub(crate) fn selection_from_cell(cell: &Cell) -> Option<usize> {
    cell.as_i64()
        .filter(|&position| position >= 1)
        .and_then(|position| usize::try_from(position - 1).ok())
}

pub(crate) fn selection_to_cell(selected: Option<usize>) -> Cell {
    selected.map_or(Cell::Empty, |index| Cell::Int(index as i64 + 1))
}

/// A dialog element that can be placed in a [`ControlCollection`](crate::ControlCollection).
///
/// The geometry, text and flag accessors forward to [`DialogControl::item`] by default;
/// composite controls override them to keep their extra rows in sync.
pub trait DialogControl: fmt::Debug {
    fn item(&self) -> &ControlItem;
    fn item_mut(&mut self) -> &mut ControlItem;

    fn kind(&self) -> ControlKind {
        self.item().kind()
    }

    fn x(&self) -> i32 {
        self.item().x()
    }

    fn set_x(&mut self, x: i32) {
        self.item_mut().set_x(x);
    }

    fn y(&self) -> i32 {
        self.item().y()
    }

    fn set_y(&mut self, y: i32) {
        self.item_mut().set_y(y);
    }

    fn width(&self) -> i32 {
        self.item().width()
    }

    fn set_width(&mut self, width: i32) {
        self.item_mut().set_width(width);
    }

    fn height(&self) -> i32 {
        self.item().height()
    }

    fn set_height(&mut self, height: i32) {
        self.item_mut().set_height(height);
    }

    fn text(&self) -> &str {
        self.item().text()
    }

    fn set_text(&mut self, text: &str) {
        self.item_mut().set_text(text);
    }

    fn enabled(&self) -> bool {
        self.item().enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.item_mut().set_enabled(enabled);
    }

    fn visible(&self) -> bool {
        self.item().visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.item_mut().set_visible(visible);
    }

    fn index(&self) -> usize {
        self.item().index()
    }

    /// Number of rows [`DialogControl::to_rows`] yields.
    fn row_count(&self) -> usize {
        1
    }

    fn to_rows(&self) -> Vec<Row> {
        vec![self.item().to_row()]
    }

    /// Copies the value column of this control's result rows back into its state. `rows` holds
    /// exactly [`DialogControl::row_count`] rows.
    fn apply_result(&mut self, rows: &[Row]) {
        if let Some(row) = rows.first() {
            self.item_mut().set_value(row.value().clone());
        }
    }

    /// Runs once per build, before [`DialogControl::to_rows`].
    fn before_build(
        &mut self,
        _host: &mut dyn NamedListHost,
        _settings: &DialogSettings,
    ) -> Result<(), DialogError> {
        Ok(())
    }

    /// Releases host-side resources. Safe to call repeatedly, or without a prior build.
    fn dispose(&mut self, _host: &mut dyn NamedListHost) {}
}

impl DialogControl for ControlItem {
    fn item(&self) -> &ControlItem {
        self
    }

    fn item_mut(&mut self) -> &mut ControlItem {
        self
    }

    /// Decoded rows can carry any kind, so the checks of [`ControlItem::try_new`] are repeated
    /// here. The collection's own header is the one `Form` item allowed, at index 0.
    fn before_build(
        &mut self,
        _host: &mut dyn NamedListHost,
        _settings: &DialogSettings,
    ) -> Result<(), DialogError> {
        let header = self.kind == ControlKind::Form && self.index == 0;
        if self.kind.is_list_backed() || (self.kind == ControlKind::Form && !header) {
            return Err(DialogError::GenericKind { kind: self.kind });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_geometry_clears_to_null() {
        let mut item = ControlItem::new(ControlKind::StaticText);
        item.set_x(12);
        item.set_height(30);
        assert_eq!(item.to_row().get(COL_X), &Cell::Int(12));

        item.set_x(-5);
        item.set_height(-1);
        assert_eq!(item.x(), -1);
        assert_eq!(item.height(), -1);
        assert_eq!(item.to_row().get(COL_X), &Cell::Empty);
        assert_eq!(item.to_row().get(COL_HEIGHT), &Cell::Empty);
    }

    #[test]
    fn header_ignores_enable_toggles() {
        let mut header = ControlItem::header();
        header.set_enabled(false);
        assert!(header.enabled());
        assert_eq!(header.to_row().get(COL_KIND), &Cell::Empty);
    }

    #[test]
    fn selection_is_one_based_on_the_wire() {
        assert_eq!(selection_to_cell(Some(0)), Cell::Int(1));
        assert_eq!(selection_to_cell(None), Cell::Empty);
        assert_eq!(selection_from_cell(&Cell::Number(3.0)), Some(2));
        assert_eq!(selection_from_cell(&Cell::Int(0)), None);
        assert_eq!(selection_from_cell(&Cell::Empty), None);
    }

    #[test]
    fn generic_items_refuse_header_and_list_kinds() {
        for kind in [
            ControlKind::Form,
            ControlKind::ListBox,
            ControlKind::DropdownList,
            ControlKind::ComboBox,
        ] {
            assert_eq!(
                ControlItem::try_new(kind),
                Err(DialogError::GenericKind { kind })
            );
        }
        assert!(ControlItem::try_new(ControlKind::LinkedListBox).is_ok());
        assert!(ControlItem::try_new(ControlKind::DirectoryText).is_ok());
    }

    #[test]
    fn from_row_rejects_unknown_codes() {
        let mut row = Row::default();
        row.set(COL_KIND, 99);
        assert!(matches!(
            ControlItem::from_row(3, &row),
            Err(DialogError::MalformedRow { row: 3, .. })
        ));
    }
}
