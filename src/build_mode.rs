// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Name of the subdirectory under `target` that cargo writes this
    /// mode's artifacts to.
    pub fn dir_name(self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }

    /// Extra arguments for `cargo build`. Debug is cargo's default, so
    /// it needs none.
    pub fn cargo_args(self) -> &'static [&'static str] {
        match self {
            BuildMode::Debug => &[],
            BuildMode::Release => &["--release"],
        }
    }
}

impl Display for BuildMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_args() {
        assert!(BuildMode::Debug.cargo_args().is_empty());
        assert_eq!(BuildMode::Release.cargo_args(), ["--release"]);
    }

    #[test]
    fn test_dir_name() {
        assert_eq!(BuildMode::Debug.dir_name(), "debug");
        assert_eq!(BuildMode::Release.dir_name(), "release");
    }
}
