// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

mod build_mode;
mod config;
mod driver;
mod error;

use anyhow::{anyhow, Result};
use argh::FromArgs;
use build_mode::BuildMode;
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, LibSuffix};
use error::BuildError;
use std::env;

/// Build the vpuppr shared library and rename the output to
/// libvpuppr.<ext>.
#[derive(FromArgs, PartialEq, Debug)]
struct Opt {
    /// build the lib in debug mode
    #[argh(switch)]
    debug: bool,

    /// build the lib in release mode
    #[argh(switch)]
    release: bool,
}

impl Opt {
    /// Modes to build, in build order. Debug always runs before
    /// release when both are requested.
    fn modes(&self) -> Vec<BuildMode> {
        let mut modes = Vec::new();
        if self.debug {
            modes.push(BuildMode::Debug);
        }
        if self.release {
            modes.push(BuildMode::Release);
        }
        modes
    }
}

/// Get the repo root path. This assumes this executable is located at
/// <repo>/target/<buildmode>/<exe>.
fn get_repo_path() -> Result<Utf8PathBuf> {
    let exe_path = env::current_exe()?;
    let repo_path = exe_path
        .parent()
        .and_then(|path| path.parent())
        .and_then(|path| path.parent())
        .ok_or_else(|| anyhow!("repo path: not enough parents"))?;
    Ok(Utf8Path::from_path(repo_path)
        .ok_or_else(|| anyhow!("repo path: not utf-8"))?
        .to_path_buf())
}

fn main() -> Result<()> {
    let opt: Opt = argh::from_env();

    let modes = opt.modes();
    if modes.is_empty() {
        return Err(BuildError::NoModeSelected.into());
    }

    let repo_root = get_repo_path()?;
    let conf = Config::new(repo_root, LibSuffix::host());

    for mode in modes {
        println!("building libvpuppr in {mode} mode");
        driver::run(&conf, mode)?;
    }

    Ok(())
}
