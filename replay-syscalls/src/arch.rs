/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Architectures (syscall ABIs) known to the registry.

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use derive_more::Display;
use serde::Deserialize;
use serde::Serialize;

/// A syscall calling convention. Each architecture has its own numbering of
/// syscalls.
#[derive(
    Serialize,
    Deserialize,
    Display,
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash
)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// The 32-bit i386 ABI (`int 0x80`/`sysenter`).
    #[display("x86")]
    X86,
    /// The x86-64 ABI (`syscall`).
    #[display("x64")]
    X64,
}

impl Arch {
    /// Every supported architecture, in index order.
    pub const ALL: [Arch; 2] = [Arch::X86, Arch::X64];

    /// Number of supported architectures.
    pub const COUNT: usize = Self::ALL.len();

    /// A dense index in `0..Arch::COUNT`, suitable for per-architecture tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Arch::X86 => 0,
            Arch::X64 => 1,
        }
    }

    /// The architecture this crate was compiled for, if the registry knows
    /// about it.
    pub const fn native() -> Option<Arch> {
        if cfg!(target_arch = "x86_64") {
            Some(Arch::X64)
        } else if cfg!(target_arch = "x86") {
            Some(Arch::X86)
        } else {
            None
        }
    }

    /// The single-bit set containing only this architecture.
    pub const fn as_set(self) -> Arches {
        match self {
            Arch::X86 => Arches::X86,
            Arch::X64 => Arches::X64,
        }
    }
}

/// Error returned when parsing an unknown architecture name.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown architecture {0:?} (expected one of x86, x64)")]
pub struct ParseArchError(String);

impl FromStr for Arch {
    type Err = ParseArchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86" | "i386" | "i686" => Ok(Arch::X86),
            "x64" | "x86_64" | "x86-64" | "amd64" => Ok(Arch::X64),
            _ => Err(ParseArchError(s.to_owned())),
        }
    }
}

bitflags! {
    /// A set of architectures.
    #[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
    pub struct Arches: u8 {
        /// See [`Arch::X86`].
        const X86 = 1 << 0;
        /// See [`Arch::X64`].
        const X64 = 1 << 1;
    }
}

impl Arches {
    /// Returns true if `arch` is in this set.
    pub fn has(&self, arch: Arch) -> bool {
        self.contains(arch.as_set())
    }

    /// Iterates over the architectures in this set in index order.
    pub fn arches(&self) -> impl Iterator<Item = Arch> + '_ {
        Arch::ALL.into_iter().filter(move |arch| self.has(*arch))
    }
}

impl From<Arch> for Arches {
    fn from(arch: Arch) -> Self {
        arch.as_set()
    }
}

impl fmt::Display for Arches {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for arch in self.arches() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{}", arch)?;
        }

        if first { f.write_str("none") } else { Ok(()) }
    }
}
