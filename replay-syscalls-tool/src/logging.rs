/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::io;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// How many timestamped names to try before giving up on a log file.
const MAX_NAME_ATTEMPTS: usize = 100;

fn set_subscriber_with_writer<T>(writer: T) -> anyhow::Result<()>
where
    T: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("unable to set the global tracing subscriber")
}

/// Picks a log file path that does not exist yet. This is `requested` itself
/// when it is free, otherwise `requested` with a timestamp appended to its
/// file name.
fn unused_log_path(requested: &Path) -> Option<PathBuf> {
    if !requested.exists() {
        return Some(requested.to_path_buf());
    }

    let name = requested.file_name()?;
    (0..MAX_NAME_ATTEMPTS)
        .map(|_| {
            let mut stamped = name.to_os_string();
            stamped.push(Local::now().format(".%Y%m%d.%H%M%S.%f").to_string());
            requested.with_file_name(stamped)
        })
        .find(|path| !path.exists())
}

/// Installs the global tracing subscriber. Output goes to a fresh file next to
/// `log_file` if given, otherwise to stderr, so that it never mixes with the
/// listing on stdout.
///
/// The returned guard must be kept alive until the program exits, or
/// buffered log lines are lost.
pub fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(requested) = log_file else {
        set_subscriber_with_writer(io::stderr)?;
        return Ok(None);
    };

    let path = unused_log_path(requested)
        .with_context(|| format!("no unused log file name for {}", requested.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("{} is not a file", path.display()))?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    set_subscriber_with_writer(writer)?;
    info!(path = %path.display(), "syscall-table logging to file");

    Ok(Some(guard))
}
