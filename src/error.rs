// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors from one build-and-rename run. All of these are terminal;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum BuildError {
    /// `cargo build` exited with a non-zero status.
    #[error("failed to build:\n{stderr}")]
    BuildFailed { stderr: String },

    /// `cargo build` could not be launched at all.
    #[error("failed to run cargo")]
    Spawn(#[from] command_run::Error),

    /// The `target` root is missing after a reportedly successful build.
    #[error("unable to get output directory {path}")]
    NoOutputDirectory { path: Utf8PathBuf },

    /// The mode-specific output directory is missing after a reportedly
    /// successful build.
    #[error("{path} does not exist, the build probably failed")]
    OutputMissing { path: Utf8PathBuf },

    /// Neither `--debug` nor `--release` was passed.
    #[error("a build mode must be selected, pass --debug and/or --release")]
    NoModeSelected,

    /// Filesystem access to the output directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
