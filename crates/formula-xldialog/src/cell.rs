use serde::{Deserialize, Serialize};
use std::fmt;

/// Excel error values a host may place in a returned definition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellError {
    Null,
    Div0,
    Value,
    Ref,
    Name,
    Num,
    NA,
}

impl CellError {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "#NULL!",
            Self::Div0 => "#DIV/0!",
            Self::Value => "#VALUE!",
            Self::Ref => "#REF!",
            Self::Name => "#NAME?",
            Self::Num => "#NUM!",
            Self::NA => "#N/A",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of a dialog definition table.
///
/// The enum uses the same `{type, value}` tagged layout as workbook cell values so a table can
/// cross a JSON host boundary unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// The table's null sentinel ("use the host default" / "no value").
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    /// Hosts hand numbers back as doubles, even for integer columns.
    Number(f64),
    Text(String),
    Error(CellError),
}

impl Cell {
    /// Returns true for every value the host treats as "absent": the empty sentinel and error
    /// values.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Error(_))
    }

    /// Integer view of a numeric cell. Non-integral doubles are truncated toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Number(v) if v.is_finite() => Some(v.trunc() as i64),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_i64().and_then(|v| i32::try_from(v).ok())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(v) => Some(*v),
            Cell::Int(v) => Some(*v != 0),
            Cell::Number(v) => Some(*v != 0.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(i64::from(value))
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_and_empty_are_null() {
        assert!(Cell::Empty.is_null());
        assert!(Cell::Error(CellError::NA).is_null());
        assert!(!Cell::Int(0).is_null());
        assert!(!Cell::Text(String::new()).is_null());
        assert!(!Cell::Bool(false).is_null());
    }

    #[test]
    fn numeric_views_accept_host_doubles() {
        assert_eq!(Cell::Number(2.0).as_i32(), Some(2));
        assert_eq!(Cell::Int(7).as_f64(), Some(7.0));
        assert_eq!(Cell::Number(f64::NAN).as_i64(), None);
        assert_eq!(Cell::Text("2".to_string()).as_i64(), None);
    }

    #[test]
    fn none_maps_to_the_null_sentinel() {
        assert_eq!(Cell::from(None::<i32>), Cell::Empty);
        assert_eq!(Cell::from(Some("x")), Cell::Text("x".to_string()));
    }
}
