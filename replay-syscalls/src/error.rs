/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Error handling.
//!
//! [`DeclarationError`] and [`AggregationError`] indicate a defect in the
//! syscall metadata itself and stop the registry from being built.
//! [`LookupError`] is an ordinary query miss that the caller decides how to
//! handle.

use thiserror::Error;

use crate::arch::Arch;
use crate::semantics::Category;
use crate::semantics::ReplaySemantics;

/// An invalid syscall declaration.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DeclarationError {
    /// The syscall has no number on any architecture.
    #[error("syscall `{name}` is not defined on any architecture")]
    NoArchitecture {
        /// The syscall name.
        name: &'static str,
    },

    /// The syscall has an empty name.
    #[error("syscall name must not be empty")]
    EmptyName,

    /// The semantics are not allowed for the syscall's category.
    #[error("syscall `{name}` is {category} and cannot have {semantics} semantics")]
    IllegalSemantics {
        /// The syscall name.
        name: &'static str,
        /// The declared category.
        category: Category,
        /// The rejected semantics.
        semantics: ReplaySemantics,
    },

    /// An argument shape was attached to a category that does not allow it.
    #[error("syscall `{name}` is {category} and cannot describe argument {position}")]
    ShapeNotAllowed {
        /// The syscall name.
        name: &'static str,
        /// The declared category.
        category: Category,
        /// The argument position (1-based).
        position: usize,
    },

    /// An argument position outside of `1..=6`.
    #[error("syscall `{name}` has no argument {position}")]
    BadArgPosition {
        /// The syscall name.
        name: &'static str,
        /// The rejected position.
        position: usize,
    },
}

/// A conflict between two or more otherwise valid declarations.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AggregationError {
    /// Two entries have the same name.
    #[error("syscall `{0}` is declared more than once")]
    DuplicateName(&'static str),

    /// Two entries have the same number on one architecture.
    #[error("syscalls `{first}` and `{second}` both use number {number} on {arch}")]
    DuplicateNumber {
        /// The architecture on which the numbers collide.
        arch: Arch,
        /// The shared number.
        number: u32,
        /// The entry declared first.
        first: &'static str,
        /// The entry declared second.
        second: &'static str,
    },

    /// A multiplexer names a syscall that is missing or not defined on the
    /// multiplexer's architecture.
    #[error("multiplexer `{name}` is not a syscall on {arch}")]
    UnknownMultiplexer {
        /// The multiplexer's architecture.
        arch: Arch,
        /// The multiplexer name.
        name: &'static str,
    },

    /// Multiplexers dispatch to sub-calls, which always needs custom handling.
    #[error("multiplexer `{0}` must be an irregular syscall")]
    MultiplexerNotIrregular(&'static str),

    /// A multiplexer names a sub-call that is not declared.
    #[error("multiplexer `{multiplexer}` refers to unknown sub-call `{subcall}`")]
    UnknownSubcall {
        /// The multiplexer name.
        multiplexer: &'static str,
        /// The missing sub-call.
        subcall: &'static str,
    },

    /// A multiplexer lists the same sub-operation code twice.
    #[error("multiplexer `{multiplexer}` maps sub-operation {subop} more than once")]
    DuplicateSubop {
        /// The multiplexer name.
        multiplexer: &'static str,
        /// The repeated sub-operation code.
        subop: u32,
    },
}

/// A query that found nothing.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LookupError {
    /// No syscall has this name.
    #[error("unknown syscall `{0}`")]
    UnknownName(String),

    /// No syscall has this number on the given architecture.
    #[error("unknown syscall number {number} on {arch}")]
    UnknownNumber {
        /// The queried architecture.
        arch: Arch,
        /// The queried number.
        number: u32,
    },

    /// The number is not a multiplexer, or the multiplexer has no such
    /// sub-operation.
    #[error("unknown sub-operation {subop} of syscall {number} on {arch}")]
    UnknownSubop {
        /// The queried architecture.
        arch: Arch,
        /// The multiplexer's number.
        number: u32,
        /// The queried sub-operation.
        subop: u32,
    },
}

/// A general error building the registry.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A single declaration is invalid.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// Declarations conflict with each other.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}
