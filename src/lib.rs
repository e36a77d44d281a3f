/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

mod adjacency;
pub use adjacency::NeighborLists;

mod sets;
pub use sets::VertexSets;

mod bounded;
pub use bounded::{cliques, independent_vertex_sets};

mod backtrack;
pub use backtrack::{
    clique_number, independence_number, largest_cliques, largest_independent_vertex_sets,
    maximal_cliques, maximal_independent_vertex_sets,
};

use std::collections::TryReserveError;
use thiserror::Error;

/// The errors that can abort an enumeration.
///
/// Enumerations either complete, returning their whole result set, or fail
/// with one of these errors; in the latter case no partial result is
/// returned, and all scratch space has been released.
#[derive(Error, Debug)]
pub enum Error {
    /// A result or scratch buffer could not be grown.
    #[error("out of memory")]
    OutOfMemory(#[from] TryReserveError),
    /// The stop predicate returned true at a poll point.
    #[error("the enumeration was interrupted")]
    Interrupted,
}

/// A [`Result`](std::result::Result) with a crate [`enum@Error`] as error
/// type.
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::adjacency::NeighborLists;
    pub use crate::backtrack::{
        clique_number, independence_number, largest_cliques, largest_independent_vertex_sets,
        maximal_cliques, maximal_independent_vertex_sets,
    };
    pub use crate::bounded::{cliques, independent_vertex_sets};
    pub use crate::sets::VertexSets;
    pub use crate::{Error, Result};
}
