//! Weakness queries over type combinations
//!
//! The resolver reads per-type relations through [`RelationSource`]. The
//! compiled-in [`EffectivenessTable`](crate::EffectivenessTable) is the default
//! source; [`UpstreamRelations`] carries relations fetched from elsewhere
//! through the same cancellation rules.

mod resolver;
mod result;
mod source;
mod tally;

pub use resolver::{Resolver, resolve, resolve_names};
pub use result::{EffectivenessResult, Multiplier, Weakness};
pub use source::{RelationSource, Relations, UpstreamRelations};
