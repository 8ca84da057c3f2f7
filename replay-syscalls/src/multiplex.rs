/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Syscalls that multiplex several logical syscalls behind one number.
//!
//! On x86, the socket and SysV IPC syscalls were historically only reachable
//! through `socketcall(2)` and `ipc(2)`, whose first argument selects the
//! operation. Each sub-call is declared in the table as its own entry (keyed
//! by name), and the multiplexer records which sub-operation code reaches it.

use serde::Serialize;

use crate::arch::Arch;

/// A multiplexing syscall on one architecture.
#[derive(Serialize, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Multiplexer {
    /// The architecture on which the multiplexing happens.
    pub arch: Arch,
    /// Name of the multiplexing syscall entry.
    pub name: &'static str,
    /// `(sub-operation, sub-call name)` pairs.
    pub subcalls: &'static [(u32, &'static str)],
}

impl Multiplexer {
    /// Finds the name of the sub-call reached with `subop`.
    pub fn subcall(&self, subop: u32) -> Option<&'static str> {
        self.subcalls
            .iter()
            .find(|(op, _)| *op == subop)
            .map(|(_, name)| *name)
    }

    /// Finds the sub-operation code that reaches `name`.
    pub fn subop(&self, name: &str) -> Option<u32> {
        self.subcalls
            .iter()
            .find(|(_, sub)| *sub == name)
            .map(|(op, _)| *op)
    }

    /// Returns true if `name` is one of this multiplexer's sub-calls.
    pub fn has_subcall(&self, name: &str) -> bool {
        self.subop(name).is_some()
    }
}

/// `socketcall(2)` on x86. The codes are the `SYS_*` constants from
/// `<linux/net.h>`. `SYS_SEND` and `SYS_RECV` are absent because the table has
/// no `send`/`recv` entries.
pub const SOCKETCALL: Multiplexer = Multiplexer {
    arch: Arch::X86,
    name: "socketcall",
    subcalls: &[
        (1, "socket"),
        (2, "bind"),
        (3, "connect"),
        (4, "listen"),
        (5, "accept"),
        (6, "getsockname"),
        (7, "getpeername"),
        (8, "socketpair"),
        (11, "sendto"),
        (12, "recvfrom"),
        (13, "shutdown"),
        (14, "setsockopt"),
        (15, "getsockopt"),
        (16, "sendmsg"),
        (17, "recvmsg"),
        (18, "accept4"),
        (19, "recvmmsg"),
        (20, "sendmmsg"),
    ],
};

/// `ipc(2)` on x86. The codes are from `<linux/ipc.h>`.
pub const IPC: Multiplexer = Multiplexer {
    arch: Arch::X86,
    name: "ipc",
    subcalls: &[
        (1, "semop"),
        (2, "semget"),
        (3, "semctl"),
        (4, "semtimedop"),
        (11, "msgsnd"),
        (12, "msgrcv"),
        (13, "msgget"),
        (14, "msgctl"),
        (21, "shmat"),
        (22, "shmdt"),
        (23, "shmget"),
        (24, "shmctl"),
    ],
};

/// All built-in multiplexers.
pub const MULTIPLEXERS: &[Multiplexer] = &[SOCKETCALL, IPC];
