use serde::{Deserialize, Serialize};

/// Added to an item code to mark the control as disabled (`DIALOG.BOX` convention).
pub const DISABLE_OFFSET: i32 = 200;

/// Control kinds understood by `DIALOG.BOX`.
///
/// `Form` is the pseudo-kind of the dialog header row, whose item cell is left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Form,
    DefaultOkButton,
    CancelButton,
    OkButton,
    DefaultCancelButton,
    StaticText,
    TextEdit,
    IntegerEdit,
    NumberEdit,
    FormulaEdit,
    ReferenceEdit,
    OptionGroup,
    OptionButton,
    CheckBox,
    GroupBox,
    ListBox,
    LinkedListBox,
    Icons,
    /// Directory text (code 20): shows the current directory of a linked directory box.
    DirectoryText,
    DropdownList,
    ComboBox,
    PictureButton,
    HelpButton,
}

impl ControlKind {
    /// Item code written to column 1, or `None` for the header.
    #[must_use]
    pub fn code(self) -> Option<i32> {
        let code = match self {
            Self::Form => return None,
            Self::DefaultOkButton => 1,
            Self::CancelButton => 2,
            Self::OkButton => 3,
            Self::DefaultCancelButton => 4,
            Self::StaticText => 5,
            Self::TextEdit => 6,
            Self::IntegerEdit => 7,
            Self::NumberEdit => 8,
            Self::FormulaEdit => 9,
            Self::ReferenceEdit => 10,
            Self::OptionGroup => 11,
            Self::OptionButton => 12,
            Self::CheckBox => 13,
            Self::GroupBox => 14,
            Self::ListBox => 15,
            Self::LinkedListBox => 16,
            Self::Icons => 17,
            Self::DirectoryText => 20,
            Self::DropdownList => 21,
            Self::ComboBox => 22,
            Self::PictureButton => 23,
            Self::HelpButton => 24,
        };
        Some(code)
    }

    /// Item code with the disable offset applied when `enabled` is false.
    #[must_use]
    pub fn encode(self, enabled: bool) -> Option<i32> {
        let code = self.code()?;
        Some(if enabled { code } else { code + DISABLE_OFFSET })
    }

    /// Inverse of [`ControlKind::encode`]: returns the kind and whether it is enabled.
    ///
    /// Codes 18 and 19 (linked file list and drive/directory boxes) are Windows-only and have no
    /// kind, so rows carrying them fail to decode.
    #[must_use]
    pub fn from_code(code: i32) -> Option<(Self, bool)> {
        let (base, enabled) = if code >= DISABLE_OFFSET {
            (code - DISABLE_OFFSET, false)
        } else {
            (code, true)
        };
        let kind = match base {
            1 => Self::DefaultOkButton,
            2 => Self::CancelButton,
            3 => Self::OkButton,
            4 => Self::DefaultCancelButton,
            5 => Self::StaticText,
            6 => Self::TextEdit,
            7 => Self::IntegerEdit,
            8 => Self::NumberEdit,
            9 => Self::FormulaEdit,
            10 => Self::ReferenceEdit,
            11 => Self::OptionGroup,
            12 => Self::OptionButton,
            13 => Self::CheckBox,
            14 => Self::GroupBox,
            15 => Self::ListBox,
            16 => Self::LinkedListBox,
            17 => Self::Icons,
            20 => Self::DirectoryText,
            21 => Self::DropdownList,
            22 => Self::ComboBox,
            23 => Self::PictureButton,
            24 => Self::HelpButton,
            _ => return None,
        };
        Some((kind, enabled))
    }

    /// Kinds whose rows name an auxiliary list registered with the host. Only the typed list
    /// controls can publish that list, so generic items refuse these kinds.
    #[must_use]
    pub fn is_list_backed(self) -> bool {
        matches!(self, Self::ListBox | Self::DropdownList | Self::ComboBox)
    }

    /// Type name used when generating auxiliary list names.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Form => "Form",
            Self::DefaultOkButton | Self::OkButton => "OkButton",
            Self::CancelButton | Self::DefaultCancelButton => "CancelButton",
            Self::StaticText => "Label",
            Self::TextEdit => "TextBox",
            Self::IntegerEdit => "IntegerEdit",
            Self::NumberEdit => "NumberEdit",
            Self::FormulaEdit => "FormulaEdit",
            Self::ReferenceEdit => "ReferenceEdit",
            Self::OptionGroup => "OptionGroup",
            Self::OptionButton => "OptionButton",
            Self::CheckBox => "CheckBox",
            Self::GroupBox => "GroupBox",
            Self::ListBox => "ListBox",
            Self::LinkedListBox => "LinkedListBox",
            Self::Icons => "Icons",
            Self::DirectoryText => "DirectoryText",
            Self::DropdownList => "DropdownList",
            Self::ComboBox => "ComboBox",
            Self::PictureButton => "PictureButton",
            Self::HelpButton => "HelpButton",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_codes_decode_to_the_same_kind() {
        assert_eq!(ControlKind::CheckBox.encode(false), Some(213));
        assert_eq!(
            ControlKind::from_code(213),
            Some((ControlKind::CheckBox, false))
        );
        assert_eq!(
            ControlKind::from_code(13),
            Some((ControlKind::CheckBox, true))
        );
    }

    #[test]
    fn directory_text_decodes_with_and_without_the_offset() {
        assert_eq!(
            ControlKind::from_code(20),
            Some((ControlKind::DirectoryText, true))
        );
        assert_eq!(
            ControlKind::from_code(220),
            Some((ControlKind::DirectoryText, false))
        );
        assert_eq!(ControlKind::DirectoryText.code(), Some(20));
    }

    #[test]
    fn header_has_no_code() {
        assert_eq!(ControlKind::Form.code(), None);
        assert_eq!(ControlKind::Form.encode(false), None);
    }

    #[test]
    fn unmodelled_codes_are_rejected() {
        for code in [0, 18, 19, 25, 218, 219] {
            assert_eq!(ControlKind::from_code(code), None, "code {code}");
        }
    }
}
