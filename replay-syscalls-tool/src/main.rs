/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Prints the replay engine's syscall table: as a listing, as JSON, or as Rust
//! dispatch tables for one architecture.

mod listing;
mod logging;

use std::io;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::bail;
use clap::Parser;
use clap::ValueEnum;
use replay_syscalls::Arch;
use replay_syscalls::Registry;
use replay_syscalls::SyscallEntry;
use tracing::debug;
use tracing::info;

use self::listing::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Format {
    /// One syscall per line.
    Text,
    /// The entries as JSON.
    Json,
    /// Rust source for a dispatch table (requires a single architecture).
    Rust,
}

#[derive(Debug, Parser)]
struct Opts {
    /// Architecture whose numbers to use. By default, the architecture this
    /// tool was built for, or x64 if that is not supported.
    #[clap(long, value_name = "ARCH", env = "SYSCALL_TABLE_ARCH")]
    arch: Option<Arch>,

    /// List the syscalls of every architecture instead of just one.
    #[clap(long, conflicts_with_all = ["arch", "name", "number"])]
    all: bool,

    /// Output format.
    #[clap(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Only print the syscall with this name.
    #[clap(long, conflicts_with = "number")]
    name: Option<String>,

    /// Only print the syscall with this number.
    #[clap(long)]
    number: Option<u32>,

    /// With --number, resolve this sub-operation of a multiplexing syscall
    /// such as x86 socketcall.
    #[clap(long, requires = "number")]
    subop: Option<u32>,

    /// Print the number of syscalls in each category instead of listing them.
    #[clap(long)]
    summary: bool,

    /// Direct logging to a file. This can also be set with the RUST_LOG_FILE
    /// environment variable, but the CLI flag takes precedence.
    #[clap(long = "log-file", value_name = "PATH", env = "RUST_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let _guard = logging::init_tracing(opts.log_file.as_deref())?;

    let registry = Registry::builtin().context("the syscall table is inconsistent")?;

    let arch = opts.arch.or_else(Arch::native).unwrap_or(Arch::X64);
    debug!(%arch, syscalls = registry.len(), "loaded syscall table");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(name) = &opts.name {
        let entry = registry.lookup_by_name(name)?;
        return print_one(&mut out, opts.format, Some(arch), entry);
    }

    if let Some(number) = opts.number {
        let entry = match opts.subop {
            Some(subop) => registry.demultiplex(arch, number, subop)?,
            None => registry.lookup_by_number(arch, number)?,
        };
        return print_one(&mut out, opts.format, Some(arch), entry);
    }

    let (arch, entries): (Option<Arch>, Vec<&SyscallEntry>) = if opts.all {
        (None, registry.all().map(|(_, entry)| entry).collect())
    } else {
        (Some(arch), sorted_entries(&registry, arch))
    };

    info!(count = entries.len(), "listing syscalls");

    if opts.summary {
        let label = arch.map_or_else(|| "all".to_owned(), |arch| arch.to_string());
        writeln!(
            out,
            "{}",
            Summary {
                label,
                entries: &entries,
            }
        )?;
        return Ok(());
    }

    match opts.format {
        Format::Text => {
            for entry in &entries {
                writeln!(out, "{}", TextLine { arch, entry })?;
            }
        }
        Format::Json => {
            let multiplexers = registry
                .multiplexers()
                .iter()
                .filter(|mux| arch.is_none_or(|arch| mux.arch == arch))
                .collect();
            let dump = Dump {
                arch,
                syscalls: entries,
                multiplexers,
            };
            serde_json::to_writer_pretty(&mut out, &dump)?;
            writeln!(out)?;
        }
        Format::Rust => {
            let Some(arch) = arch else {
                bail!("--format rust needs a single architecture; drop --all");
            };
            write!(
                out,
                "{}",
                RustTables {
                    arch,
                    entries: &entries,
                }
            )?;
        }
    }

    Ok(())
}

/// The entries defined on `arch`, sorted by their number there.
fn sorted_entries(registry: &Registry, arch: Arch) -> Vec<&SyscallEntry> {
    let mut entries: Vec<_> = registry
        .for_architecture(arch)
        .iter()
        .map(|(_, entry)| entry)
        .collect();
    entries.sort_by_key(|entry| entry.number(arch));
    entries
}

fn print_one<W: Write>(
    out: &mut W,
    format: Format,
    arch: Option<Arch>,
    entry: &SyscallEntry,
) -> anyhow::Result<()> {
    match format {
        Format::Text => writeln!(out, "{}", TextLine { arch, entry })?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, entry)?;
            writeln!(out)?;
        }
        Format::Rust => bail!("--format rust is only supported for whole tables"),
    }
    Ok(())
}
