use formula_xldialog::{
    Cell, CheckBox, ComboBox, DefinitionTable, Dialog, DialogControl, DialogError, DropdownList,
    InMemoryHost, IntegerEdit, ListControl, OkButton, ScriptedResponse, TextBox, COL_VALUE,
};
use pretty_assertions::assert_eq;

fn pick_dialog() -> (Dialog, formula_xldialog::ControlHandle<DropdownList>) {
    let mut dialog = Dialog::new();
    dialog.set_text("Pick");
    let mut colors = DropdownList::new();
    colors.extend_items(["Red", "Green", "Blue"]);
    colors.set_selected_index(Some(1));
    let colors = dialog.add(colors);
    (dialog, colors)
}

#[test]
fn dropdown_selection_survives_an_unchanged_round_trip() {
    let (mut dialog, colors) = pick_dialog();
    let mut host = InMemoryHost::new();

    assert!(dialog.show_dialog(&mut host).unwrap());

    let expected: DefinitionTable =
        serde_json::from_str(include_str!("fixtures/pick_dialog.json")).unwrap();
    assert_eq!(host.shown_tables(), [expected]);
    assert_eq!(colors.borrow().selected_index(), Some(1));
    assert_eq!(colors.borrow().value(), "Green");
}

#[test]
fn lists_are_registered_during_the_dialog_and_removed_after() {
    let (mut dialog, colors) = pick_dialog();
    let mut host = InMemoryHost::new();

    dialog.show_dialog(&mut host).unwrap();

    assert_eq!(colors.borrow().list_name(), "Gen_DropdownList_1");
    assert_eq!(host.named_lists().count(), 0);
    assert_eq!(host.cleared_names(), ["Gen_DropdownList_1"]);
}

#[test]
fn unset_checkbox_reads_false_after_confirmation() {
    let mut dialog = Dialog::new();
    let check = dialog.add(CheckBox::new("Match case"));
    let mut host = InMemoryHost::new();

    assert!(dialog.show_dialog(&mut host).unwrap());

    assert_eq!(check.borrow().item().value(), &Cell::Empty);
    assert!(!check.borrow().value());
}

#[test]
fn cancellation_leaves_values_untouched() {
    let mut dialog = Dialog::new();
    let name = dialog.add(TextBox::with_value("before"));
    let count = dialog.add({
        let mut edit = IntegerEdit::new();
        edit.set_value(4);
        edit
    });
    let mut host = InMemoryHost::new();
    host.respond_with(ScriptedResponse::Cancel);

    assert!(!dialog.show_dialog(&mut host).unwrap());

    assert_eq!(name.borrow().value(), Some("before"));
    assert_eq!(count.borrow().value(), Some(4));
    assert_eq!(dialog.result_table(), None);
}

#[test]
fn confirmed_values_are_copied_back_from_column_seven() {
    let mut dialog = Dialog::new();
    let name = dialog.add(TextBox::new());
    let count = dialog.add(IntegerEdit::new());
    let check = dialog.add(CheckBox::new("Bold"));
    dialog.add(OkButton::new());
    let mut host = InMemoryHost::new();
    host.respond_with(ScriptedResponse::Edit(Box::new(|table: &mut DefinitionTable| {
        let rows = table.rows_mut();
        rows[1].set(COL_VALUE, "typed");
        rows[2].set(COL_VALUE, 12.0);
        rows[3].set(COL_VALUE, true);
    })));

    assert!(dialog.show_dialog(&mut host).unwrap());

    assert_eq!(name.borrow().value(), Some("typed"));
    assert_eq!(count.borrow().value(), Some(12));
    assert!(check.borrow().value());
    assert_eq!(dialog.result_table().map(DefinitionTable::height), Some(5));
}

#[test]
fn combo_box_reads_back_typed_text_and_selection() {
    let mut dialog = Dialog::new();
    let combo = dialog.add({
        let mut combo = ComboBox::new();
        combo.extend_items(["Arial", "Calibri"]);
        combo.set_list_name("Fonts");
        combo
    });
    let mut host = InMemoryHost::new();
    host.respond_with(ScriptedResponse::Edit(Box::new(|table: &mut DefinitionTable| {
        let rows = table.rows_mut();
        rows[1].set(COL_VALUE, "Calibri");
        rows[2].set(COL_VALUE, 2.0);
    })));

    assert!(dialog.show_dialog(&mut host).unwrap());

    let combo = combo.borrow();
    assert_eq!(combo.text(), "Calibri");
    assert_eq!(combo.selected_index(), Some(1));
    assert_eq!(combo.selected_item(), Some("Calibri"));
}

#[test]
fn registration_failure_aborts_before_the_dialog_is_shown() {
    let mut dialog = Dialog::new();
    let mut first = DropdownList::new();
    first.set_list_name("Sizes");
    dialog.add(first);
    let mut second = DropdownList::new();
    second.set_list_name("Colors");
    dialog.add(second);

    let mut host = InMemoryHost::new();
    host.fail_registration_of("Colors");

    let err = dialog.show_dialog(&mut host).unwrap_err();

    assert!(matches!(err, DialogError::ListRegistration { ref name, .. } if name == "Colors"));
    assert!(host.shown_tables().is_empty());
    // The list registered before the failure is released by the dispose pass.
    assert_eq!(host.named_list("Sizes"), None);
}

#[test]
fn host_failure_still_disposes_lists() {
    let (mut dialog, _colors) = pick_dialog();
    let mut host = InMemoryHost::new();
    host.respond_with(ScriptedResponse::Fail("dialog crashed".to_string()));

    let err = dialog.show_dialog(&mut host).unwrap_err();

    assert!(matches!(err, DialogError::Host(_)));
    assert_eq!(host.named_lists().count(), 0);
}

#[test]
fn result_with_wrong_row_count_is_rejected_without_side_effects() {
    let (mut dialog, colors) = pick_dialog();
    let mut host = InMemoryHost::new();
    host.respond_with(ScriptedResponse::Return(DefinitionTable::new()));

    let err = dialog.show_dialog(&mut host).unwrap_err();

    assert_eq!(
        err,
        DialogError::ResultShape {
            expected: 2,
            actual: 0
        }
    );
    assert_eq!(colors.borrow().selected_index(), Some(1));
    assert_eq!(dialog.result_table(), None);
}
