/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use core::fmt;

use replay_syscalls::Arch;
use replay_syscalls::Category;
use replay_syscalls::Multiplexer;
use replay_syscalls::ReplaySemantics;
use replay_syscalls::SyscallEntry;
use serde::Serialize;

/// One line of the plain text listing.
pub struct TextLine<'a> {
    /// Print only this architecture's number. All numbers are printed when
    /// `None`.
    pub arch: Option<Arch>,
    pub entry: &'a SyscallEntry,
}

impl<'a> fmt::Display for TextLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entry = self.entry;

        match self.arch.and_then(|arch| entry.number(arch)) {
            Some(nr) => write!(f, "{:>3} => {}", nr, entry.name())?,
            None => write!(f, "{} ({})", entry.name(), entry.numbers())?,
        }

        write!(f, " [{}/{}]", entry.category(), entry.semantics())?;

        for (position, shape) in entry.shapes().iter() {
            write!(f, " arg{}: {}", position, shape)?;
        }

        Ok(())
    }
}

/// The JSON dump of one architecture, or of the whole table.
#[derive(Serialize)]
pub struct Dump<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<Arch>,
    pub syscalls: Vec<&'a SyscallEntry>,
    pub multiplexers: Vec<&'a Multiplexer>,
}

/// Rust source for the dispatch tables of one architecture. Entries must be
/// sorted by their number on `arch`.
pub struct RustTables<'a> {
    pub arch: Arch,
    pub entries: &'a [&'a SyscallEntry],
}

impl<'a> RustTables<'a> {
    fn numbered(&self) -> impl Iterator<Item = (u32, &'a SyscallEntry)> + '_ {
        let arch = self.arch;
        self.entries
            .iter()
            .filter_map(move |entry| entry.number(arch).map(|nr| (nr, *entry)))
    }
}

impl<'a> fmt::Display for RustTables<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "// Generated by syscall-table. Do not edit.\n")?;
        writeln!(f, "use replay_syscalls::ArgShape;")?;
        writeln!(f, "use replay_syscalls::Category;")?;
        writeln!(f, "use replay_syscalls::ReplaySemantics;\n")?;

        writeln!(
            f,
            "/// Category and replay semantics of {} syscall `nr`.",
            self.arch
        )?;
        writeln!(
            f,
            "pub fn classify(nr: u32) -> Option<(&'static str, Category, ReplaySemantics)> {{"
        )?;
        writeln!(f, "    match nr {{")?;
        for (nr, entry) in self.numbered() {
            writeln!(
                f,
                "        {} => Some((\"{}\", Category::{:?}, ReplaySemantics::{:?})),",
                nr,
                entry.name(),
                entry.category(),
                entry.semantics()
            )?;
        }
        writeln!(f, "        _ => None,")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}\n")?;

        writeln!(
            f,
            "/// Output argument shapes of regular {} syscall `nr`, for generic\n\
             /// argument copying.",
            self.arch
        )?;
        writeln!(
            f,
            "pub fn arg_shapes(nr: u32) -> &'static [(usize, ArgShape)] {{"
        )?;
        writeln!(f, "    match nr {{")?;
        for (nr, entry) in self.numbered() {
            if entry.shapes().is_empty() {
                continue;
            }
            let shapes = entry
                .shapes()
                .iter()
                .map(|(position, shape)| format!("({}, ArgShape::{:?})", position, shape))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "        // {}", entry.name())?;
            writeln!(f, "        {} => &[{}],", nr, shapes)?;
        }
        writeln!(f, "        _ => &[],")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

/// Counts of entries per category and per semantics.
pub struct Summary<'a> {
    pub label: String,
    pub entries: &'a [&'a SyscallEntry],
}

impl<'a> fmt::Display for Summary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}: {} syscalls", self.label, self.entries.len())?;

        for category in Category::ALL {
            let count = self
                .entries
                .iter()
                .filter(|entry| entry.category() == category)
                .count();
            writeln!(f, "  {:<12} {:>4}", category.to_string(), count)?;
        }

        for semantics in ReplaySemantics::ALL {
            let count = self
                .entries
                .iter()
                .filter(|entry| entry.semantics() == semantics)
                .count();
            writeln!(f, "  {:<12} {:>4}", semantics.to_string(), count)?;
        }

        let shaped = self
            .entries
            .iter()
            .filter(|entry| !entry.shapes().is_empty())
            .count();
        write!(f, "  {:<12} {:>4}", "with shapes", shaped)
    }
}
