// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::build_mode::BuildMode;
use camino::{Utf8Path, Utf8PathBuf};

/// Base name of the renamed shared library. Downstream consumers load
/// the artifact by this name regardless of what cargo called it.
const LIB_BASE_NAME: &str = "libvpuppr";

/// Shared-library file extension used to identify build artifacts.
///
/// Note that this is technically the wrong way to name shared libs on
/// Windows, but it matches what the engine side expects. macOS is not
/// covered; those builds are renamed manually.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LibSuffix {
    Dll,
    So,
}

impl LibSuffix {
    /// Suffix for the current host OS.
    pub fn host() -> LibSuffix {
        if cfg!(windows) {
            LibSuffix::Dll
        } else {
            LibSuffix::So
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LibSuffix::Dll => "dll",
            LibSuffix::So => "so",
        }
    }
}

#[derive(Debug)]
pub struct Config {
    /// Absolute path of the repo root. The cargo invocation runs here
    /// and the `target` directory is resolved against it, so the
    /// caller's working directory never matters.
    repo: Utf8PathBuf,

    lib_suffix: LibSuffix,
}

impl Config {
    pub fn new(repo: Utf8PathBuf, lib_suffix: LibSuffix) -> Config {
        Config { repo, lib_suffix }
    }

    pub fn repo_path(&self) -> &Utf8Path {
        &self.repo
    }

    pub fn lib_suffix(&self) -> LibSuffix {
        self.lib_suffix
    }

    /// Get the build output root.
    pub fn target_path(&self) -> Utf8PathBuf {
        self.repo.join("target")
    }

    /// Get the output directory for one build mode, e.g.
    /// `<repo>/target/release`.
    pub fn output_path(&self, mode: BuildMode) -> Utf8PathBuf {
        self.target_path().join(mode.dir_name())
    }

    /// Canonical artifact file name, e.g. `libvpuppr.so`.
    pub fn lib_file_name(&self) -> String {
        format!("{}.{}", LIB_BASE_NAME, self.lib_suffix.as_str())
    }
}
