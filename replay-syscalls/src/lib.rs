/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! This crate is the table of every syscall a record and replay engine needs
//! to recognize, along with how each syscall is replayed:
//! 1. The tracer looks up intercepted syscalls by architecture and number.
//! 2. The replay dispatcher uses an entry's [`ReplaySemantics`] and
//!    [`Category`] to decide between emulating and re-executing it.
//! 3. Tools use the names to print syscalls they cannot otherwise classify.
//!
//! The table is metadata only. Nothing here intercepts or executes syscalls.
//!
//! ```
//! use replay_syscalls::Arch;
//! use replay_syscalls::Registry;
//! use replay_syscalls::ReplaySemantics;
//!
//! let registry = Registry::builtin().unwrap();
//! let brk = registry.lookup_by_number(Arch::X64, 12).unwrap();
//! assert_eq!(brk.name(), "brk");
//! assert_eq!(brk.semantics(), ReplaySemantics::Executed);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

mod arch;
mod entry;
mod error;
mod multiplex;
mod registry;
mod semantics;
mod shape;
mod table;

pub use ::syscalls::Sysno;

pub use crate::arch::*;
pub use crate::entry::*;
pub use crate::error::*;
pub use crate::multiplex::*;
pub use crate::registry::*;
pub use crate::semantics::*;
pub use crate::shape::*;
pub use crate::table::DECLARATIONS;
