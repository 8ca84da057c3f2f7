/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Syscall entries and the declarations they are built from.

use core::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::arch::Arch;
use crate::arch::Arches;
use crate::error::DeclarationError;
use crate::semantics::Category;
use crate::semantics::ReplaySemantics;
use crate::shape::ArgShape;
use crate::shape::ArgShapes;
use crate::shape::MAX_ARGS;

/// Per-architecture syscall numbers. An architecture without a number does
/// not have the syscall at all.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Numbers {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    x86: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    x64: Option<u32>,
}

impl Numbers {
    /// No numbers on any architecture.
    pub const fn new() -> Self {
        Self {
            x86: None,
            x64: None,
        }
    }

    /// Sets the x86 number.
    pub const fn with_x86(mut self, number: u32) -> Self {
        self.x86 = Some(number);
        self
    }

    /// Sets the x64 number.
    pub const fn with_x64(mut self, number: u32) -> Self {
        self.x64 = Some(number);
        self
    }

    /// Sets the number for `arch`.
    pub const fn with(self, arch: Arch, number: u32) -> Self {
        match arch {
            Arch::X86 => self.with_x86(number),
            Arch::X64 => self.with_x64(number),
        }
    }

    /// Gets the number on `arch`, if the syscall exists there.
    #[inline]
    pub const fn get(&self, arch: Arch) -> Option<u32> {
        match arch {
            Arch::X86 => self.x86,
            Arch::X64 => self.x64,
        }
    }

    /// The set of architectures that have a number.
    pub fn arches(&self) -> Arches {
        Arch::ALL
            .into_iter()
            .filter(|arch| self.get(*arch).is_some())
            .fold(Arches::empty(), |set, arch| set | arch.as_set())
    }

    /// Iterates over `(arch, number)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Arch, u32)> + '_ {
        Arch::ALL
            .into_iter()
            .filter_map(|arch| self.get(arch).map(|nr| (arch, nr)))
    }

    /// Returns true if no architecture has a number.
    pub const fn is_empty(&self) -> bool {
        self.x86.is_none() && self.x64.is_none()
    }
}

impl fmt::Display for Numbers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (arch, nr) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}={}", arch, nr)?;
        }
        Ok(())
    }
}

/// Everything the replay engine needs to know about one syscall. Entries can
/// only be created through constructors that check the category's rules, so
/// an existing entry is always internally consistent.
#[derive(Serialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SyscallEntry {
    name: &'static str,
    numbers: Numbers,
    category: Category,
    semantics: ReplaySemantics,
    #[serde(skip_serializing_if = "ArgShapes::is_empty")]
    shapes: ArgShapes,
}

impl SyscallEntry {
    /// Creates an entry of any category. Fails if `semantics` is not legal for
    /// `category`; in particular a [`Category::Restart`] entry only accepts
    /// [`ReplaySemantics::Executed`].
    pub fn new(
        name: &'static str,
        numbers: Numbers,
        category: Category,
        semantics: ReplaySemantics,
    ) -> Result<Self, DeclarationError> {
        if name.is_empty() {
            return Err(DeclarationError::EmptyName);
        }

        if numbers.is_empty() {
            return Err(DeclarationError::NoArchitecture { name });
        }

        category.check(name, semantics)?;

        Ok(Self {
            name,
            numbers,
            category,
            semantics,
            shapes: ArgShapes::NONE,
        })
    }

    /// A regular syscall. `semantics` must be `Emulated` or `Executed`.
    pub fn regular(
        name: &'static str,
        numbers: Numbers,
        semantics: ReplaySemantics,
    ) -> Result<Self, DeclarationError> {
        Self::new(name, numbers, Category::Regular, semantics)
    }

    /// An irregular syscall. `semantics` must be `MayExecute` or `Emulated`.
    pub fn irregular(
        name: &'static str,
        numbers: Numbers,
        semantics: ReplaySemantics,
    ) -> Result<Self, DeclarationError> {
        Self::new(name, numbers, Category::Irregular, semantics)
    }

    /// A syscall the engine knows by name but cannot handle.
    pub fn unsupported(name: &'static str, numbers: Numbers) -> Result<Self, DeclarationError> {
        Self::new(
            name,
            numbers,
            Category::Unsupported,
            ReplaySemantics::Executed,
        )
    }

    /// A syscall number no supported kernel implements.
    pub fn invalid(name: &'static str, numbers: Numbers) -> Result<Self, DeclarationError> {
        Self::new(name, numbers, Category::Invalid, ReplaySemantics::Executed)
    }

    /// The `restart_syscall` entry. Always executed.
    pub fn restart(name: &'static str, numbers: Numbers) -> Result<Self, DeclarationError> {
        Self::new(name, numbers, Category::Restart, ReplaySemantics::Executed)
    }

    /// Describes the structure argument `position` (1-based) points to. Only
    /// regular syscalls can describe their arguments.
    pub fn with_arg(mut self, position: usize, shape: ArgShape) -> Result<Self, DeclarationError> {
        if !self.category.allows_shapes() {
            return Err(DeclarationError::ShapeNotAllowed {
                name: self.name,
                category: self.category,
                position,
            });
        }

        if !ArgShapes::is_valid_position(position) {
            return Err(DeclarationError::BadArgPosition {
                name: self.name,
                position,
            });
        }

        self.shapes = self.shapes.with(position, shape);
        Ok(self)
    }

    /// The syscall name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All of the syscall's numbers.
    #[inline]
    pub fn numbers(&self) -> &Numbers {
        &self.numbers
    }

    /// The syscall number on `arch`, or `None` if the syscall does not exist
    /// there.
    #[inline]
    pub fn number(&self, arch: Arch) -> Option<u32> {
        self.numbers.get(arch)
    }

    /// Returns true if the syscall exists on `arch`.
    #[inline]
    pub fn is_defined_on(&self, arch: Arch) -> bool {
        self.numbers.get(arch).is_some()
    }

    /// The syscall's category.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// How the syscall is replayed.
    #[inline]
    pub fn semantics(&self) -> ReplaySemantics {
        self.semantics
    }

    /// The argument shapes. Always empty unless the syscall is regular.
    #[inline]
    pub fn shapes(&self) -> &ArgShapes {
        &self.shapes
    }

    /// Returns true if the dispatcher has to hand this syscall to code
    /// specific to it.
    pub fn is_irregular(&self) -> bool {
        self.category == Category::Irregular
    }

    /// Returns true if the dispatcher is allowed to execute this syscall
    /// during replay.
    pub fn may_execute(&self) -> bool {
        self.semantics == ReplaySemantics::MayExecute
    }

    /// Returns true if encountering this syscall in a traced program must
    /// stop the recording.
    pub fn must_fail_fast(&self) -> bool {
        matches!(self.category, Category::Unsupported | Category::Invalid)
    }
}

impl fmt::Display for SyscallEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}/{}]",
            self.name, self.numbers, self.category, self.semantics
        )
    }
}

/// The shorthand used to declare a syscall. Each kind pins down both the
/// category and the semantics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    /// Regular, emulated.
    Emulated,
    /// Regular, executed.
    Executed,
    /// Irregular, emulated.
    IrregularEmulated,
    /// Irregular, possibly executed.
    IrregularMayExecute,
    /// Known but unsupported.
    Unsupported,
    /// Not implemented by any supported kernel.
    Invalid,
    /// `restart_syscall`.
    Restart,
}

impl Kind {
    /// The category this kind declares.
    pub const fn category(self) -> Category {
        match self {
            Kind::Emulated | Kind::Executed => Category::Regular,
            Kind::IrregularEmulated | Kind::IrregularMayExecute => Category::Irregular,
            Kind::Unsupported => Category::Unsupported,
            Kind::Invalid => Category::Invalid,
            Kind::Restart => Category::Restart,
        }
    }

    /// The semantics this kind declares.
    pub const fn semantics(self) -> ReplaySemantics {
        match self {
            Kind::Emulated | Kind::IrregularEmulated => ReplaySemantics::Emulated,
            Kind::IrregularMayExecute => ReplaySemantics::MayExecute,
            Kind::Executed | Kind::Unsupported | Kind::Invalid | Kind::Restart => {
                ReplaySemantics::Executed
            }
        }
    }
}

/// An unchecked, `const`-constructible description of a syscall. This is what
/// the syscall table is written in; [`Declaration::build`] turns it into a
/// [`SyscallEntry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Declaration {
    name: &'static str,
    kind: Kind,
    numbers: Numbers,
    args: [Option<ArgShape>; MAX_ARGS],
}

impl Declaration {
    /// Starts a declaration with no numbers and no argument shapes.
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            numbers: Numbers::new(),
            args: [None; MAX_ARGS],
        }
    }

    /// Sets the x86 number.
    pub const fn x86(mut self, number: u32) -> Self {
        self.numbers = self.numbers.with_x86(number);
        self
    }

    /// Sets the x64 number.
    pub const fn x64(mut self, number: u32) -> Self {
        self.numbers = self.numbers.with_x64(number);
        self
    }

    const fn arg(mut self, position: usize, shape: ArgShape) -> Self {
        self.args[position - 1] = Some(shape);
        self
    }

    /// Describes the first argument.
    pub const fn arg1(self, shape: ArgShape) -> Self {
        self.arg(1, shape)
    }

    /// Describes the second argument.
    pub const fn arg2(self, shape: ArgShape) -> Self {
        self.arg(2, shape)
    }

    /// Describes the third argument.
    pub const fn arg3(self, shape: ArgShape) -> Self {
        self.arg(3, shape)
    }

    /// Describes the fourth argument.
    pub const fn arg4(self, shape: ArgShape) -> Self {
        self.arg(4, shape)
    }

    /// Describes the fifth argument.
    pub const fn arg5(self, shape: ArgShape) -> Self {
        self.arg(5, shape)
    }

    /// Describes the sixth argument.
    pub const fn arg6(self, shape: ArgShape) -> Self {
        self.arg(6, shape)
    }

    /// The declared name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared kind.
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Validates the declaration.
    pub fn build(&self) -> Result<SyscallEntry, DeclarationError> {
        let mut entry = SyscallEntry::new(
            self.name,
            self.numbers,
            self.kind.category(),
            self.kind.semantics(),
        )?;

        for (i, shape) in self.args.iter().enumerate() {
            if let Some(shape) = shape {
                entry = entry.with_arg(i + 1, *shape)?;
            }
        }

        Ok(entry)
    }
}

impl TryFrom<Declaration> for SyscallEntry {
    type Error = DeclarationError;

    fn try_from(decl: Declaration) -> Result<Self, Self::Error> {
        decl.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn regular_rejects_may_execute() {
        let numbers = Numbers::new().with_x86(1).with_x64(60);
        assert_eq!(
            SyscallEntry::regular("exit", numbers, ReplaySemantics::MayExecute),
            Err(DeclarationError::IllegalSemantics {
                name: "exit",
                category: Category::Regular,
                semantics: ReplaySemantics::MayExecute,
            })
        );
        assert!(SyscallEntry::regular("exit", numbers, ReplaySemantics::Emulated).is_ok());
        assert!(SyscallEntry::regular("exit", numbers, ReplaySemantics::Executed).is_ok());
    }

    #[test]
    fn irregular_rejects_executed() {
        let numbers = Numbers::new().with_x64(0);
        assert!(SyscallEntry::irregular("read", numbers, ReplaySemantics::Executed).is_err());
        assert!(SyscallEntry::irregular("read", numbers, ReplaySemantics::Emulated).is_ok());
        assert!(SyscallEntry::irregular("read", numbers, ReplaySemantics::MayExecute).is_ok());
    }

    #[test]
    fn no_architecture() {
        assert_eq!(
            SyscallEntry::regular("nothing", Numbers::new(), ReplaySemantics::Emulated),
            Err(DeclarationError::NoArchitecture { name: "nothing" })
        );
        assert!(SyscallEntry::unsupported("nothing", Numbers::new()).is_err());
        assert!(SyscallEntry::restart("nothing", Numbers::new()).is_err());
    }

    #[test]
    fn empty_name() {
        assert_eq!(
            SyscallEntry::invalid("", Numbers::new().with_x86(17)),
            Err(DeclarationError::EmptyName)
        );
    }

    #[test]
    fn restart_is_always_executed() {
        let numbers = Numbers::new().with_x86(0).with_x64(219);
        let entry = SyscallEntry::restart("restart_syscall", numbers).unwrap();
        assert_eq!(entry.semantics(), ReplaySemantics::Executed);
        assert_eq!(entry.category(), Category::Restart);

        // Anything other than `Executed` is rejected rather than ignored.
        for semantics in [ReplaySemantics::Emulated, ReplaySemantics::MayExecute] {
            assert!(
                SyscallEntry::new("restart_syscall", numbers, Category::Restart, semantics)
                    .is_err()
            );
        }
        assert_eq!(
            SyscallEntry::new(
                "restart_syscall",
                numbers,
                Category::Restart,
                ReplaySemantics::Executed
            ),
            Ok(entry)
        );
    }

    #[test]
    fn zero_is_a_number() {
        let entry = SyscallEntry::restart("restart_syscall", Numbers::new().with_x86(0)).unwrap();
        assert_eq!(entry.number(Arch::X86), Some(0));
        assert_eq!(entry.number(Arch::X64), None);
        assert!(entry.is_defined_on(Arch::X86));
        assert!(!entry.is_defined_on(Arch::X64));
        assert_eq!(entry.numbers().arches(), Arches::X86);
    }

    #[test]
    fn shapes_only_on_regular() {
        let numbers = Numbers::new().with_x86(78).with_x64(96);

        let entry = SyscallEntry::regular("gettimeofday", numbers, ReplaySemantics::Emulated)
            .and_then(|e| e.with_arg(1, ArgShape::Timeval))
            .and_then(|e| e.with_arg(2, ArgShape::Timezone))
            .unwrap();
        assert_eq!(entry.shapes().get(1), Some(ArgShape::Timeval));
        assert_eq!(entry.shapes().get(2), Some(ArgShape::Timezone));

        let irregular =
            SyscallEntry::irregular("gettimeofday", numbers, ReplaySemantics::Emulated).unwrap();
        assert_eq!(
            irregular.with_arg(1, ArgShape::Timeval),
            Err(DeclarationError::ShapeNotAllowed {
                name: "gettimeofday",
                category: Category::Irregular,
                position: 1,
            })
        );

        let unsupported = SyscallEntry::unsupported("gettimeofday", numbers).unwrap();
        assert!(unsupported.with_arg(1, ArgShape::Timeval).is_err());
    }

    #[test]
    fn bad_positions() {
        let entry =
            SyscallEntry::regular("pipe", Numbers::new().with_x64(22), ReplaySemantics::Emulated)
                .unwrap();
        assert_eq!(
            entry.with_arg(0, ArgShape::IntPair),
            Err(DeclarationError::BadArgPosition {
                name: "pipe",
                position: 0
            })
        );
        assert!(entry.with_arg(7, ArgShape::IntPair).is_err());
        assert!(entry.with_arg(6, ArgShape::IntPair).is_ok());
    }

    #[test]
    fn kinds_are_legal() {
        for kind in [
            Kind::Emulated,
            Kind::Executed,
            Kind::IrregularEmulated,
            Kind::IrregularMayExecute,
            Kind::Unsupported,
            Kind::Invalid,
            Kind::Restart,
        ] {
            assert!(kind.category().allows(kind.semantics()), "{:?}", kind);
        }
    }

    #[test]
    fn declarations() {
        const TIME: Declaration = Declaration::new("time", Kind::Emulated)
            .x86(13)
            .x64(201)
            .arg1(ArgShape::TimeT);

        let entry = TIME.build().unwrap();
        assert_eq!(entry.name(), "time");
        assert_eq!(entry.number(Arch::X86), Some(13));
        assert_eq!(entry.number(Arch::X64), Some(201));
        assert_eq!(entry.category(), Category::Regular);
        assert_eq!(entry.semantics(), ReplaySemantics::Emulated);
        assert_eq!(entry.shapes().get(1), Some(ArgShape::TimeT));
        assert_eq!(SyscallEntry::try_from(TIME), Ok(entry));

        let bad = Declaration::new("read", Kind::IrregularEmulated)
            .x64(0)
            .arg2(ArgShape::Stat);
        assert!(matches!(
            bad.build(),
            Err(DeclarationError::ShapeNotAllowed { position: 2, .. })
        ));

        assert!(
            Declaration::new("nowhere", Kind::Emulated)
                .build()
                .is_err()
        );
    }

    #[test]
    fn predicates() {
        let exit = Declaration::new("exit", Kind::IrregularMayExecute)
            .x86(1)
            .x64(60)
            .build()
            .unwrap();
        assert!(exit.is_irregular());
        assert!(exit.may_execute());
        assert!(!exit.must_fail_fast());

        let mount = Declaration::new("mount", Kind::Unsupported)
            .x86(21)
            .x64(165)
            .build()
            .unwrap();
        assert!(mount.must_fail_fast());
        assert!(!mount.may_execute());
        assert_eq!(mount.to_string(), "mount (x86=21, x64=165) [unsupported/EXEC]");
    }
}
