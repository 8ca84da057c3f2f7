/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Checks the invariants of the built-in syscall table.

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use replay_syscalls::Arch;
use replay_syscalls::Category;
use replay_syscalls::LookupError;
use replay_syscalls::Registry;
use replay_syscalls::ReplaySemantics;

fn registry() -> Registry {
    Registry::builtin().expect("the built-in table is consistent")
}

#[test]
fn every_entry_has_an_architecture() {
    for (name, entry) in registry().all() {
        assert!(!entry.numbers().is_empty(), "{}", name);
        assert!(!entry.numbers().arches().is_empty(), "{}", name);
    }
}

#[test]
fn semantics_are_legal() {
    for (name, entry) in registry().all() {
        assert!(
            entry.category().allows(entry.semantics()),
            "{} is {} with {}",
            name,
            entry.category(),
            entry.semantics()
        );
        if entry.category() != Category::Regular {
            assert!(entry.shapes().is_empty(), "{}", name);
        }
    }
}

#[test]
fn names_are_unique() {
    let registry = registry();
    let names: HashSet<_> = registry.all().map(|(name, _)| name).collect();
    assert_eq!(names.len(), registry.len());
}

#[test]
fn numbers_are_unique_per_arch() {
    let registry = registry();
    for arch in Arch::ALL {
        let mut seen = HashMap::new();
        for (name, entry) in registry.for_architecture(arch) {
            let number = entry.number(arch).unwrap();
            if let Some(other) = seen.insert(number, name) {
                panic!("{} and {} share {} on {}", other, name, number, arch);
            }
        }
    }
}

#[test]
fn lookups_round_trip() {
    let registry = registry();
    for (name, entry) in registry.all() {
        assert_eq!(registry.lookup_by_name(name), Ok(entry));
        assert_eq!(entry.name(), name);

        for (arch, number) in entry.numbers().iter() {
            assert_eq!(registry.lookup_by_number(arch, number), Ok(entry));
        }
    }
}

#[test]
fn for_architecture_is_the_matching_subset() {
    let registry = registry();
    for arch in Arch::ALL {
        let expected: Vec<_> = registry
            .all()
            .filter(|(_, entry)| entry.is_defined_on(arch))
            .map(|(name, _)| name)
            .collect();

        let view = registry.for_architecture(arch);
        let first: Vec<_> = view.iter().map(|(name, _)| name).collect();
        let second: Vec<_> = view.iter().map(|(name, _)| name).collect();

        assert_eq!(first, expected);
        assert_eq!(second, expected);
        assert_eq!(view.len(), expected.len());
    }
}

#[test]
fn well_known_numbers() {
    let registry = registry();
    let expected = [
        (Arch::X86, 1, "exit"),
        (Arch::X86, 3, "read"),
        (Arch::X86, 0, "restart_syscall"),
        (Arch::X86, 102, "socketcall"),
        (Arch::X86, 117, "ipc"),
        (Arch::X86, 192, "mmap2"),
        (Arch::X86, 240, "futex"),
        (Arch::X64, 0, "read"),
        (Arch::X64, 9, "mmap"),
        (Arch::X64, 56, "clone"),
        (Arch::X64, 158, "arch_prctl"),
        (Arch::X64, 219, "restart_syscall"),
        (Arch::X64, 231, "exit_group"),
        (Arch::X64, 318, "getrandom"),
    ];

    for (arch, number, name) in expected {
        assert_eq!(
            registry.lookup_by_number(arch, number).map(|e| e.name()),
            Ok(name),
            "{} on {}",
            number,
            arch
        );
    }
}

#[test]
fn unknown_numbers_are_misses() {
    let registry = registry();
    assert_eq!(
        registry.lookup_by_number(Arch::X64, 100_000),
        Err(LookupError::UnknownNumber {
            arch: Arch::X64,
            number: 100_000
        })
    );
    // x64 gap between the engine's private calls and the kernel's.
    assert!(registry.lookup_by_number(Arch::X64, 400).is_err());
    assert!(registry.lookup_by_name("not_a_syscall").is_err());
}

#[test]
fn engine_private_calls() {
    let registry = registry();
    for (name, number) in [
        ("rrcall_init_preload", 442),
        ("rrcall_init_buffers", 443),
        ("rrcall_notify_syscall_hook_exit", 444),
    ] {
        for arch in Arch::ALL {
            let entry = registry.lookup_by_number(arch, number).unwrap();
            assert_eq!(entry.name(), name);
            assert_eq!(entry.category(), Category::Irregular);
            assert_eq!(entry.semantics(), ReplaySemantics::Emulated);
        }
    }
}

#[test]
fn unsupported_calls_fail_fast() {
    let registry = registry();
    for name in ["mount", "setuid", "io_setup", "seccomp"] {
        let entry = registry.lookup_by_name(name).unwrap();
        assert_eq!(entry.category(), Category::Unsupported, "{}", name);
        assert!(entry.must_fail_fast());
        assert_eq!(entry.semantics(), ReplaySemantics::Executed);
    }

    let invalid: Vec<_> = registry
        .all()
        .filter(|(_, entry)| entry.category() == Category::Invalid)
        .map(|(name, _)| name)
        .collect();
    assert!(invalid.contains(&"_break"));
    assert!(invalid.contains(&"tuxcall"));
    assert!(invalid.contains(&"afs_syscall"));
}

#[test]
fn socketcall_sub_calls() {
    let registry = registry();
    let socketcall = registry.lookup_by_name("socketcall").unwrap();
    let number = socketcall.number(Arch::X86).unwrap();
    assert!(socketcall.is_irregular());

    for (subop, name) in [(1, "socket"), (5, "accept"), (15, "getsockopt"), (18, "accept4")] {
        let entry = registry.demultiplex(Arch::X86, number, subop).unwrap();
        assert_eq!(entry.name(), name);
        // Only reachable through socketcall on x86.
        assert_eq!(entry.number(Arch::X86), None);
        assert!(entry.number(Arch::X64).is_some());
    }

    // recvmmsg and sendmmsg also got their own x86 numbers later on.
    assert_eq!(
        registry.demultiplex(Arch::X86, number, 19).unwrap().number(Arch::X86),
        Some(337)
    );

    // SYS_SEND
    assert!(registry.demultiplex(Arch::X86, number, 9).is_err());
}

#[test]
fn ipc_sub_calls() {
    let registry = registry();
    let number = registry
        .lookup_by_name("ipc")
        .unwrap()
        .number(Arch::X86)
        .unwrap();

    for (subop, name) in [(1, "semop"), (12, "msgrcv"), (21, "shmat"), (24, "shmctl")] {
        assert_eq!(
            registry.demultiplex(Arch::X86, number, subop).unwrap().name(),
            name
        );
    }
    assert_eq!(registry.multiplexers().len(), 2);
}

#[test]
fn every_multiplexed_call_is_reachable() {
    let registry = registry();
    for mux in registry.multiplexers() {
        let number = registry
            .lookup_by_name(mux.name)
            .unwrap()
            .number(mux.arch)
            .unwrap();
        for &(subop, name) in mux.subcalls {
            assert_eq!(
                registry.demultiplex(mux.arch, number, subop).unwrap().name(),
                name
            );
        }
    }
}

#[test]
fn shared_between_threads() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .for_architecture(Arch::X64)
                    .iter()
                    .filter(|(_, entry)| entry.may_execute())
                    .count()
            })
        })
        .collect();

    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.iter().all(|&count| count == counts[0]));
    assert!(counts[0] > 0);
}

#[test]
fn serializes_to_json() {
    let registry = registry();
    let entry = registry.lookup_by_name("gettimeofday").unwrap();
    let json = serde_json::to_value(entry).unwrap();

    assert_eq!(json["name"], "gettimeofday");
    assert_eq!(json["numbers"]["x86"], 78);
    assert_eq!(json["numbers"]["x64"], 96);
    assert_eq!(json["category"], "regular");
    assert_eq!(json["semantics"], "EMULATED");
    assert_eq!(json["shapes"][0], "timeval");
    assert_eq!(json["shapes"][1], "timezone");
    assert!(json["shapes"][2].is_null());

    let waitpid = serde_json::to_value(registry.lookup_by_name("waitpid").unwrap()).unwrap();
    assert!(waitpid["numbers"].get("x64").is_none());
    assert!(waitpid.get("shapes").is_none());
}

#[cfg(target_arch = "x86_64")]
#[test]
fn native_sysno_agrees() {
    use replay_syscalls::Sysno;

    let registry = registry();
    for sysno in [
        Sysno::read,
        Sysno::write,
        Sysno::openat,
        Sysno::mmap,
        Sysno::clone,
        Sysno::execve,
        Sysno::exit_group,
        Sysno::futex,
        Sysno::getrandom,
        Sysno::arch_prctl,
        Sysno::restart_syscall,
        Sysno::socket,
        Sysno::shmget,
    ] {
        assert_eq!(registry.lookup_sysno(sysno).unwrap().name(), sysno.name());
    }

    // Every x64 number the kernel also knows about should have the same name,
    // except where the table keeps an older spelling. The engine's private
    // calls deliberately use numbers that newer kernels have since assigned.
    let renamed: HashMap<&str, &str> = [("fstatat64", "newfstatat")].into_iter().collect();
    for (name, entry) in registry.for_architecture(Arch::X64) {
        if name.starts_with("rrcall_") {
            continue;
        }
        let number = entry.number(Arch::X64).unwrap();
        if let Some(sysno) = Sysno::new(number as usize) {
            let expected = renamed.get(name).copied().unwrap_or(name);
            assert_eq!(sysno.name(), expected, "x64 syscall {}", number);
        }
    }
}
