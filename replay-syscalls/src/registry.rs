/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The registry of all syscall entries.
//!
//! A [`Registry`] is built once by a [`RegistryBuilder`], which checks that the
//! entries do not conflict with each other, and is immutable afterwards. It can
//! be shared freely between threads.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::slice;

use tracing::debug;
use tracing::trace;

use crate::arch::Arch;
use crate::entry::Declaration;
use crate::entry::SyscallEntry;
use crate::error::AggregationError;
use crate::error::DeclarationError;
use crate::error::Error;
use crate::error::LookupError;
use crate::multiplex::MULTIPLEXERS;
use crate::multiplex::Multiplexer;
use crate::semantics::Category;
use crate::table::DECLARATIONS;

/// Collects syscall entries and multiplexers and assembles them into a
/// [`Registry`].
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
    entries: Vec<SyscallEntry>,
    multiplexers: Vec<Multiplexer>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn entry(mut self, entry: SyscallEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Validates and adds a declaration.
    pub fn declare(self, decl: &Declaration) -> Result<Self, DeclarationError> {
        Ok(self.entry(decl.build()?))
    }

    /// Validates and adds several declarations, stopping at the first invalid
    /// one.
    pub fn declare_all<'a, I>(mut self, decls: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        for decl in decls {
            self = self.declare(decl)?;
        }
        Ok(self)
    }

    /// Adds a multiplexer. Its sub-calls may share the multiplexer's number on
    /// the multiplexer's architecture.
    pub fn multiplexer(mut self, multiplexer: Multiplexer) -> Self {
        self.multiplexers.push(multiplexer);
        self
    }

    /// Adds several multiplexers.
    pub fn multiplexers<I>(mut self, multiplexers: I) -> Self
    where
        I: IntoIterator<Item = Multiplexer>,
    {
        self.multiplexers.extend(multiplexers);
        self
    }

    /// Checks that the entries are consistent with each other and builds the
    /// lookup indices.
    pub fn build(self) -> Result<Registry, AggregationError> {
        let Self {
            entries,
            multiplexers,
        } = self;

        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name(), index).is_some() {
                return Err(AggregationError::DuplicateName(entry.name()));
            }
        }

        // Each multiplexer owns its number before any other entry is indexed,
        // so the outcome does not depend on declaration order.
        let mut by_number: [HashMap<u32, usize>; Arch::COUNT] = Default::default();
        let mut subcalls = HashMap::new();
        for mux in &multiplexers {
            let mux_index = by_name
                .get(mux.name)
                .copied()
                .filter(|&index| entries[index].is_defined_on(mux.arch))
                .ok_or(AggregationError::UnknownMultiplexer {
                    arch: mux.arch,
                    name: mux.name,
                })?;
            let mux_entry = &entries[mux_index];

            if mux_entry.category() != Category::Irregular {
                return Err(AggregationError::MultiplexerNotIrregular(mux.name));
            }

            // Checked by the filter above.
            let Some(mux_number) = mux_entry.number(mux.arch) else {
                continue;
            };

            match by_number[mux.arch.index()].entry(mux_number) {
                Entry::Vacant(slot) => {
                    slot.insert(mux_index);
                }
                Entry::Occupied(slot) if *slot.get() != mux_index => {
                    return Err(AggregationError::DuplicateNumber {
                        arch: mux.arch,
                        number: mux_number,
                        first: entries[*slot.get()].name(),
                        second: mux.name,
                    });
                }
                Entry::Occupied(_) => {}
            }

            for &(subop, subcall) in mux.subcalls {
                let index = by_name.get(subcall).copied().ok_or(
                    AggregationError::UnknownSubcall {
                        multiplexer: mux.name,
                        subcall,
                    },
                )?;

                if subcalls
                    .insert((mux.arch, mux_number, subop), index)
                    .is_some()
                {
                    return Err(AggregationError::DuplicateSubop {
                        multiplexer: mux.name,
                        subop,
                    });
                }
            }

            trace!(
                arch = %mux.arch,
                name = mux.name,
                subcalls = mux.subcalls.len(),
                "registered multiplexer"
            );
        }

        for arch in Arch::ALL {
            let index_map = &mut by_number[arch.index()];
            for (index, entry) in entries.iter().enumerate() {
                let Some(number) = entry.number(arch) else {
                    continue;
                };

                match index_map.entry(number) {
                    Entry::Vacant(slot) => {
                        slot.insert(index);
                    }
                    Entry::Occupied(slot) => {
                        let occupant = *slot.get();
                        if occupant == index {
                            continue;
                        }

                        let first = entries[occupant].name();
                        let second = entry.name();

                        // The number keeps resolving to the multiplexer;
                        // sub-calls are reached through `demultiplex`.
                        if shared_multiplexer(&multiplexers, arch, first, second).is_none() {
                            return Err(AggregationError::DuplicateNumber {
                                arch,
                                number,
                                first,
                                second,
                            });
                        }
                    }
                }
            }
        }

        let mut counts = [0; Arch::COUNT];
        for arch in Arch::ALL {
            counts[arch.index()] = entries
                .iter()
                .filter(|entry| entry.is_defined_on(arch))
                .count();
        }

        let registry = Registry {
            entries,
            by_name,
            by_number,
            counts,
            subcalls,
            multiplexers,
        };

        debug!(
            entries = registry.len(),
            x86 = registry.for_architecture(Arch::X86).len(),
            x64 = registry.for_architecture(Arch::X64).len(),
            "built syscall registry"
        );

        Ok(registry)
    }
}

/// If one of `a` and `b` is a multiplexer on `arch` and the other is one of its
/// sub-calls, returns the multiplexer's name.
fn shared_multiplexer(
    multiplexers: &[Multiplexer],
    arch: Arch,
    a: &'static str,
    b: &'static str,
) -> Option<&'static str> {
    multiplexers
        .iter()
        .filter(|mux| mux.arch == arch)
        .find(|mux| {
            (mux.name == a && mux.has_subcall(b)) || (mux.name == b && mux.has_subcall(a))
        })
        .map(|mux| mux.name)
}

/// An immutable, indexed collection of syscall entries.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Entries in declaration order.
    entries: Vec<SyscallEntry>,
    by_name: HashMap<&'static str, usize>,
    by_number: [HashMap<u32, usize>; Arch::COUNT],
    /// Number of entries defined on each architecture.
    counts: [usize; Arch::COUNT],
    /// `(arch, multiplexer number, sub-operation)` to entry.
    subcalls: HashMap<(Arch, u32, u32), usize>,
    multiplexers: Vec<Multiplexer>,
}

impl Registry {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Builds the registry of every syscall known to the replay engine. This
    /// should be called once during start up; an error means the built-in
    /// table itself is broken.
    pub fn builtin() -> Result<Self, Error> {
        let registry = RegistryBuilder::new()
            .declare_all(DECLARATIONS)?
            .multiplexers(MULTIPLEXERS.iter().copied())
            .build()?;
        Ok(registry)
    }

    /// Iterates over all `(name, entry)` pairs. Callers should not rely on the
    /// order, which is only meaningful for display.
    pub fn all(&self) -> Entries<'_> {
        Entries {
            iter: self.entries.iter(),
        }
    }

    /// The entries that exist on `arch`. The returned view can be iterated
    /// any number of times.
    pub fn for_architecture(&self, arch: Arch) -> ArchEntries<'_> {
        ArchEntries {
            entries: &self.entries,
            arch,
            len: self.counts[arch.index()],
        }
    }

    /// Finds the entry named `name`.
    pub fn lookup_by_name(&self, name: &str) -> Result<&SyscallEntry, LookupError> {
        self.by_name
            .get(name)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| LookupError::UnknownName(name.to_owned()))
    }

    /// Finds the entry with `number` on `arch`. This is what the tracer calls
    /// for every intercepted syscall.
    #[inline]
    pub fn lookup_by_number(&self, arch: Arch, number: u32) -> Result<&SyscallEntry, LookupError> {
        self.by_number[arch.index()]
            .get(&number)
            .map(|&index| &self.entries[index])
            .ok_or(LookupError::UnknownNumber { arch, number })
    }

    /// Finds the entry for a syscall number of the architecture this crate was
    /// built for.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub fn lookup_sysno(&self, sysno: syscalls::Sysno) -> Result<&SyscallEntry, LookupError> {
        // Always `Some` on the targets this method is compiled for.
        let arch = Arch::native().unwrap_or(Arch::X64);
        self.lookup_by_number(arch, sysno.id() as u32)
    }

    /// Resolves the sub-call reached by calling the multiplexer with `number`
    /// on `arch` with sub-operation `subop`.
    pub fn demultiplex(
        &self,
        arch: Arch,
        number: u32,
        subop: u32,
    ) -> Result<&SyscallEntry, LookupError> {
        self.subcalls
            .get(&(arch, number, subop))
            .map(|&index| &self.entries[index])
            .ok_or(LookupError::UnknownSubop {
                arch,
                number,
                subop,
            })
    }

    /// The multiplexers this registry was built with.
    pub fn multiplexers(&self) -> &[Multiplexer] {
        &self.multiplexers
    }

    /// Returns the multiplexer through which `name` is reached on `arch`, if
    /// any.
    pub fn multiplexer_of(&self, arch: Arch, name: &str) -> Option<&Multiplexer> {
        self.multiplexers
            .iter()
            .find(|mux| mux.arch == arch && mux.has_subcall(name))
    }

    /// Returns true if a syscall named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over all `(name, entry)` pairs of a [`Registry`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    iter: slice::Iter<'a, SyscallEntry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'static str, &'a SyscallEntry);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|entry| (entry.name(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// The entries of a [`Registry`] that exist on one architecture. Every call to
/// [`ArchEntries::iter`] starts a new, independent pass.
#[derive(Debug, Copy, Clone)]
pub struct ArchEntries<'a> {
    entries: &'a [SyscallEntry],
    arch: Arch,
    len: usize,
}

impl<'a> ArchEntries<'a> {
    /// The architecture of this view.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Iterates over `(name, entry)` pairs from the start.
    pub fn iter(&self) -> ArchIter<'a> {
        ArchIter {
            iter: self.entries.iter(),
            arch: self.arch,
        }
    }

    /// Number of entries that exist on the architecture. Counted once when
    /// the registry is built.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entry exists on the architecture.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> IntoIterator for ArchEntries<'a> {
    type Item = (&'static str, &'a SyscallEntry);
    type IntoIter = ArchIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &ArchEntries<'a> {
    type Item = (&'static str, &'a SyscallEntry);
    type IntoIter = ArchIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator produced by [`ArchEntries::iter`].
#[derive(Debug, Clone)]
pub struct ArchIter<'a> {
    iter: slice::Iter<'a, SyscallEntry>,
    arch: Arch,
}

impl<'a> Iterator for ArchIter<'a> {
    type Item = (&'static str, &'a SyscallEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let arch = self.arch;
        self.iter
            .find(|entry| entry.is_defined_on(arch))
            .map(|entry| (entry.name(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
