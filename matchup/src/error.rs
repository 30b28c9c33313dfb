use thiserror::Error;

use crate::types::ElementType;

/// A type name that is not one of the 18 canonical types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown type: {0}")]
pub struct UnknownTypeError(pub String);

/// An attacking type name from a relation source that could not be mapped
/// to a canonical type.
///
/// These are collected on the result rather than returned as errors, since
/// the remaining entries are still meaningful.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Unresolved attacking type '{name}' in relations of {defender}")]
pub struct UnresolvedTypeError {
    pub defender: ElementType,
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    #[error("Type combination is empty")]
    EmptyCombination,

    #[error("Type combination has {0} types, at most 2 are allowed")]
    TooManyTypes(usize),

    #[error("Type combination lists {0} twice")]
    DuplicateType(ElementType),
}
