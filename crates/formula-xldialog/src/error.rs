use thiserror::Error;

use crate::host::HostError;
use crate::kind::ControlKind;
use crate::names::ListNameError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialogError {
    #[error("failed to register list `{name}`: {reason}")]
    ListRegistration { name: String, reason: String },
    #[error("invalid list name `{name}`: {source}")]
    InvalidListName {
        name: String,
        #[source]
        source: ListNameError,
    },
    #[error("result table has {actual} rows but the last build produced {expected}")]
    ResultShape { expected: usize, actual: usize },
    #[error("result table supplied before the collection was built")]
    NotBuilt,
    #[error("controls changed between build and result: built {built} rows, now {current}")]
    CollectionChanged { built: usize, current: usize },
    #[error("the dialog header must stay at position 0")]
    HeaderPinned,
    #[error("control position {index} is out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("{kind:?} cannot be built from a generic item; use its typed control")]
    GenericKind { kind: ControlKind },
    #[error("malformed definition row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error(transparent)]
    Host(#[from] HostError),
}
