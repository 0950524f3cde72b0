//! Names under which list items are published to the host.
//!
//! The host stores each list as a workbook-level name, so a list name has to survive the same
//! checks the workbook applies to defined names. Generated names are built here too, which keeps
//! the `<prefix>_<Kind>_<Index>` shape and the rules it must satisfy in one place.

use thiserror::Error;

use crate::kind::ControlKind;

/// Maximum length of a workbook name, which is what auxiliary lists are registered as.
pub const LIST_NAME_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ListNameError {
    #[error("list name cannot be empty")]
    Empty,
    #[error("list name is too long ({len} > {max})")]
    TooLong { len: usize, max: usize },
    #[error("invalid first character '{0}' (must start with a letter, '_' or '\\\\')")]
    InvalidStartCharacter(char),
    #[error("invalid character '{ch}' at index {index}")]
    InvalidCharacter { ch: char, index: usize },
    #[error("list name cannot look like a cell reference (e.g. A1 or R1C1)")]
    LooksLikeCellReference,
}

/// Name a list control is published under when the caller did not choose one.
pub(crate) fn generated_list_name(prefix: &str, kind: ControlKind, index: usize) -> String {
    format!("{prefix}_{}_{index}", kind.type_name())
}

/// Checks that `name` can be registered with the host as a workbook-level name.
///
/// Whitespace anywhere, including at the ends, is rejected rather than trimmed: the name is
/// written verbatim into the definition table and must match the registration exactly.
pub fn validate_list_name(name: &str) -> Result<(), ListNameError> {
    let mut len = 0;
    for (index, ch) in name.chars().enumerate() {
        let allowed = if index == 0 {
            ch.is_alphabetic() || matches!(ch, '_' | '\\')
        } else {
            ch.is_alphanumeric() || matches!(ch, '_' | '.' | '\\')
        };
        if !allowed {
            return Err(if index == 0 {
                ListNameError::InvalidStartCharacter(ch)
            } else {
                ListNameError::InvalidCharacter { ch, index }
            });
        }
        len += 1;
    }

    match len {
        0 => Err(ListNameError::Empty),
        len if len > LIST_NAME_MAX_LEN => Err(ListNameError::TooLong {
            len,
            max: LIST_NAME_MAX_LEN,
        }),
        _ if is_cell_reference(name) => Err(ListNameError::LooksLikeCellReference),
        _ => Ok(()),
    }
}

/// True for `A1`-style (`XFD1048576`) and `R1C1`-style (`R`, `C`, `R2`, `C3`, `R2C3`) shapes,
/// which the host would read as a reference instead of a name. Only called on names that passed
/// the character checks, so the input is letters, digits, `_`, `.` and `\`.
fn is_cell_reference(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    let rest = &bytes[letters..];
    let all_digits = |part: &[u8]| part.iter().all(u8::is_ascii_digit);

    if (1..=3).contains(&letters) && !rest.is_empty() && all_digits(rest) {
        return true;
    }

    let (row, column) = match bytes.iter().position(|&b| b == b'C') {
        Some(split) => (&bytes[..split], Some(&bytes[split + 1..])),
        None => (bytes, None),
    };
    let row_ok = row.is_empty() || (row[0] == b'R' && all_digits(&row[1..]));
    let column_ok = column.map_or(true, all_digits);
    // At least one of the `R` and `C` markers must be present.
    (row_ok && column_ok) && !(row.is_empty() && column.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_pass_validation() {
        for (kind, index) in [
            (ControlKind::DropdownList, 1),
            (ControlKind::ComboBox, 12),
            (ControlKind::ListBox, 0),
        ] {
            let name = generated_list_name("Gen", kind, index);
            assert_eq!(validate_list_name(&name), Ok(()), "name: {name}");
        }
        assert_eq!(
            generated_list_name("Gen", ControlKind::ComboBox, 3),
            "Gen_ComboBox_3"
        );
    }

    #[test]
    fn caller_names_may_use_underscores_and_dots() {
        for name in ["_colors", "Lists.Fruit", "\\paths", "Colors", "Rows", "Cols2"] {
            assert_eq!(validate_list_name(name), Ok(()), "name: {name}");
        }
    }

    #[test]
    fn rejects_cell_like_and_malformed_names() {
        assert_eq!(validate_list_name(""), Err(ListNameError::Empty));
        for name in ["AB12", "r3c4", "R", "c", "R12", "C7", "RC"] {
            assert_eq!(
                validate_list_name(name),
                Err(ListNameError::LooksLikeCellReference),
                "name: {name}"
            );
        }
        assert_eq!(
            validate_list_name("1st"),
            Err(ListNameError::InvalidStartCharacter('1'))
        );
        assert_eq!(
            validate_list_name(" Colors"),
            Err(ListNameError::InvalidStartCharacter(' '))
        );
        assert_eq!(
            validate_list_name("my list"),
            Err(ListNameError::InvalidCharacter { ch: ' ', index: 2 })
        );
        assert!(matches!(
            validate_list_name(&"a".repeat(LIST_NAME_MAX_LEN + 1)),
            Err(ListNameError::TooLong { .. })
        ));
    }
}
