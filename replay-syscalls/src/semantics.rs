/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Replay semantics and the call categories that constrain them.

use derive_more::Display;
use serde::Deserialize;
use serde::Serialize;

use crate::error::DeclarationError;

/// How a syscall's effect is reproduced during replay.
#[derive(Serialize, Deserialize, Display, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplaySemantics {
    /// The syscall is never issued during replay. Its outputs are restored
    /// from the recording.
    #[display("EMU")]
    Emulated,

    /// The syscall is issued again during replay and is trusted to have the
    /// same effect as it did during recording.
    #[display("EXEC")]
    Executed,

    /// The dispatcher may choose to execute the syscall during replay. The
    /// registry only marks the syscall as eligible.
    #[display("MAY_EXEC")]
    MayExecute,
}

impl ReplaySemantics {
    /// All semantics values.
    pub const ALL: [ReplaySemantics; 3] = [
        ReplaySemantics::Emulated,
        ReplaySemantics::Executed,
        ReplaySemantics::MayExecute,
    ];
}

/// The shape of a syscall, as far as the replay engine is concerned. Each
/// category only admits some of the [`ReplaySemantics`].
#[derive(Serialize, Deserialize, Display, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A syscall whose outputs can be recorded generically from its argument
    /// shapes.
    #[display("regular")]
    Regular,

    /// A syscall that needs handling specific to that syscall, such as
    /// variable-length outputs or multiplexed sub-calls.
    #[display("irregular")]
    Irregular,

    /// A syscall the kernel implements but the engine does not. It exists so
    /// that it can be named in error messages.
    #[display("unsupported")]
    Unsupported,

    /// A syscall number with a name but no implementation in any supported
    /// kernel.
    #[display("invalid")]
    Invalid,

    /// `restart_syscall`, which resumes an interrupted syscall.
    #[display("restart")]
    Restart,
}

impl Category {
    /// All categories.
    pub const ALL: [Category; 5] = [
        Category::Regular,
        Category::Irregular,
        Category::Unsupported,
        Category::Invalid,
        Category::Restart,
    ];

    /// The semantics a syscall of this category may have.
    pub const fn legal_semantics(self) -> &'static [ReplaySemantics] {
        match self {
            Category::Regular => &[ReplaySemantics::Emulated, ReplaySemantics::Executed],
            Category::Irregular => &[ReplaySemantics::MayExecute, ReplaySemantics::Emulated],
            Category::Unsupported | Category::Invalid | Category::Restart => {
                &[ReplaySemantics::Executed]
            }
        }
    }

    /// For categories that admit exactly one semantics, returns it.
    pub fn fixed_semantics(self) -> Option<ReplaySemantics> {
        match self.legal_semantics() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Returns true if `semantics` is legal for this category.
    pub fn allows(self, semantics: ReplaySemantics) -> bool {
        self.legal_semantics().contains(&semantics)
    }

    /// Returns true if argument shape descriptors may be attached to syscalls
    /// of this category.
    pub const fn allows_shapes(self) -> bool {
        matches!(self, Category::Regular)
    }

    /// Validates `semantics` against this category for the syscall `name`.
    pub fn check(
        self,
        name: &'static str,
        semantics: ReplaySemantics,
    ) -> Result<(), DeclarationError> {
        if self.allows(semantics) {
            Ok(())
        } else {
            Err(DeclarationError::IllegalSemantics {
                name,
                category: self,
                semantics,
            })
        }
    }
}
