/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

/// Declares a static list of syscall [`Declaration`](crate::Declaration)s, one
/// line per syscall:
///
/// ```ignore
/// syscall_table! {
///     pub static TABLE = [
///         exit => IrregularMayExecute { x86: 1, x64: 60 },
///         time => Emulated { x86: 13, x64: 201, arg1: TimeT },
///     ];
/// }
/// ```
///
/// The kind is a [`Kind`](crate::Kind) variant. The keys inside the braces are
/// the `const` builder methods of `Declaration` (`x86`, `x64`, `arg1` through
/// `arg6`), so a misspelled key is a compile error. Nothing is validated here;
/// that happens when the registry is built.
macro_rules! syscall_table {
    (
        $(#[$outer:meta])*
        $vis:vis static $table:ident = [
            $(
                $name:ident => $kind:ident { $($key:ident: $val:expr),* $(,)? },
            )*
        ];
    ) => {
        $(#[$outer])*
        $vis static $table: &[$crate::Declaration] = &[
            $(
                $crate::Declaration::new(stringify!($name), $crate::Kind::$kind)
                    $(.$key($val))*,
            )*
        ];
    };
}
