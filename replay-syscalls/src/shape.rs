/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Symbolic descriptions of the structures syscall arguments point to.
//!
//! These never describe a byte layout. The layout of, say, a `timeval`
//! differs between x86 and x64 and is resolved by whoever copies the memory.

use derive_more::Display;
use serde::Deserialize;
use serde::Serialize;

/// Largest number of arguments a syscall can take.
pub const MAX_ARGS: usize = 6;

/// The structure an output argument points to.
#[derive(Serialize, Deserialize, Display, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ArgShape {
    #[display("time_t")]
    TimeT,
    #[display("tms")]
    Tms,
    #[display("kernel_sigaction")]
    KernelSigaction,
    #[display("rlimit")]
    Rlimit,
    #[display("rlimit64")]
    Rlimit64,
    #[display("rusage")]
    Rusage,
    #[display("timeval")]
    Timeval,
    #[display("timezone")]
    Timezone,
    #[display("timespec")]
    Timespec,
    #[display("itimerval")]
    Itimerval,
    #[display("itimerspec")]
    Itimerspec,
    #[display("statfs")]
    Statfs,
    #[display("statfs64")]
    Statfs64,
    #[display("stat")]
    Stat,
    #[display("stat64")]
    Stat64,
    #[display("sysinfo")]
    Sysinfo,
    #[display("utsname")]
    Utsname,
    #[display("sigset_t")]
    SigsetT,
    #[display("stack_t")]
    StackT,
    #[display("__kernel_loff_t")]
    KernelLoffT,
    #[display("sched_param")]
    SchedParam,
    #[display("cpu_set_t")]
    CpuSetT,
    #[display("user_desc")]
    UserDesc,
    #[display("pid_t")]
    PidT,
    #[display("uid_t")]
    UidT,
    #[display("gid_t")]
    GidT,
    #[display("legacy_uid_t")]
    LegacyUidT,
    #[display("legacy_gid_t")]
    LegacyGidT,
    /// Two `int`s, as filled in by `pipe` and `socketpair`.
    #[display("int[2]")]
    IntPair,
}

impl ArgShape {
    /// Returns false for the few shapes that are laid out the same on every
    /// architecture.
    pub fn is_arch_dependent(self) -> bool {
        !matches!(
            self,
            ArgShape::IntPair | ArgShape::KernelLoffT | ArgShape::Rlimit64 | ArgShape::CpuSetT
        )
    }
}

/// Argument shapes of a syscall, indexed by 1-based argument position.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct ArgShapes([Option<ArgShape>; MAX_ARGS]);

impl ArgShapes {
    /// No shapes.
    pub const NONE: ArgShapes = ArgShapes([None; MAX_ARGS]);

    /// Returns true if `position` is a valid 1-based argument position.
    pub const fn is_valid_position(position: usize) -> bool {
        position >= 1 && position <= MAX_ARGS
    }

    /// Gets the shape of argument `position` (1-based). Returns `None` for
    /// undescribed arguments and out-of-range positions.
    pub fn get(&self, position: usize) -> Option<ArgShape> {
        if Self::is_valid_position(position) {
            self.0[position - 1]
        } else {
            None
        }
    }

    /// Sets the shape of argument `position`. The caller must have checked
    /// the position with [`ArgShapes::is_valid_position`].
    pub(crate) const fn with(mut self, position: usize, shape: ArgShape) -> Self {
        self.0[position - 1] = Some(shape);
        self
    }

    /// Iterates over `(position, shape)` for each described argument.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ArgShape)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, shape)| shape.map(|shape| (i + 1, shape)))
    }

    /// Returns true if no argument is described.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Number of described arguments.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}
