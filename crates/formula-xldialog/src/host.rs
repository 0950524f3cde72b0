use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use thiserror::Error;

use crate::table::DefinitionTable;

/// Failure reported by a host primitive.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("host call failed: {message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The host's workbook-name primitives used to publish list contents for list-backed controls.
///
/// Names live in a namespace shared by every open dialog; registering a name that another
/// in-flight dialog uses replaces its contents. The host offers no way to arbitrate that.
pub trait NamedListHost {
    /// Registers (or overwrites) `name` as a list of strings.
    fn set_named_list(&mut self, name: &str, items: &[String]) -> Result<(), HostError>;

    /// Removes `name`, returning whether it was registered.
    fn clear_named_list(&mut self, name: &str) -> bool;
}

/// What the modal dialog primitive returned.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalOutcome {
    /// The user confirmed; the table carries the result values in column 7.
    Confirmed(DefinitionTable),
    Cancelled,
}

/// A host able to present a definition table as a blocking modal dialog.
pub trait DialogHost: NamedListHost {
    fn show_modal_table(&mut self, table: &DefinitionTable) -> Result<ModalOutcome, HostError>;
}

/// How [`InMemoryHost`] answers the next modal call.
pub enum ScriptedResponse {
    /// Return the shown table unchanged, as if the user pressed OK without editing anything.
    Echo,
    Cancel,
    Return(DefinitionTable),
    /// Return the shown table after applying the closure, simulating user edits.
    Edit(Box<dyn FnMut(&mut DefinitionTable)>),
    Fail(String),
}

impl fmt::Debug for ScriptedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Echo => write!(f, "Echo"),
            Self::Cancel => write!(f, "Cancel"),
            Self::Return(table) => write!(f, "Return({} rows)", table.height()),
            Self::Edit(_) => write!(f, "Edit(..)"),
            Self::Fail(message) => write!(f, "Fail({message:?})"),
        }
    }
}

/// A scriptable, in-process host used for tests and headless embedding.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    lists: BTreeMap<String, Vec<String>>,
    failing_names: BTreeSet<String>,
    responses: VecDeque<ScriptedResponse>,
    shown: Vec<DefinitionTable>,
    cleared: Vec<String>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next modal call. With an empty queue the host echoes.
    pub fn respond_with(&mut self, response: ScriptedResponse) -> &mut Self {
        self.responses.push_back(response);
        self
    }

    /// Makes every registration of `name` fail.
    pub fn fail_registration_of(&mut self, name: impl Into<String>) -> &mut Self {
        self.failing_names.insert(name.into());
        self
    }

    pub fn named_list(&self, name: &str) -> Option<&[String]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    pub fn named_lists(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.lists
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Tables passed to the modal primitive, oldest first.
    pub fn shown_tables(&self) -> &[DefinitionTable] {
        &self.shown
    }

    /// Names passed to [`NamedListHost::clear_named_list`], whether or not they were registered.
    pub fn cleared_names(&self) -> &[String] {
        &self.cleared
    }
}

impl NamedListHost for InMemoryHost {
    fn set_named_list(&mut self, name: &str, items: &[String]) -> Result<(), HostError> {
        if self.failing_names.contains(name) {
            return Err(HostError::new(format!("cannot define name `{name}`")));
        }
        self.lists.insert(name.to_string(), items.to_vec());
        Ok(())
    }

    fn clear_named_list(&mut self, name: &str) -> bool {
        self.cleared.push(name.to_string());
        self.lists.remove(name).is_some()
    }
}

impl DialogHost for InMemoryHost {
    fn show_modal_table(&mut self, table: &DefinitionTable) -> Result<ModalOutcome, HostError> {
        self.shown.push(table.clone());
        let response = self.responses.pop_front().unwrap_or(ScriptedResponse::Echo);
        match response {
            ScriptedResponse::Echo => Ok(ModalOutcome::Confirmed(table.clone())),
            ScriptedResponse::Cancel => Ok(ModalOutcome::Cancelled),
            ScriptedResponse::Return(result) => Ok(ModalOutcome::Confirmed(result)),
            ScriptedResponse::Edit(mut edit) => {
                let mut result = table.clone();
                edit(&mut result);
                Ok(ModalOutcome::Confirmed(result))
            }
            ScriptedResponse::Fail(message) => Err(HostError::new(message)),
        }
    }
}
