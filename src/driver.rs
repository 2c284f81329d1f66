// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::build_mode::BuildMode;
use crate::config::{Config, LibSuffix};
use crate::error::BuildError;
use camino::Utf8Path;
use command_run::Command;
use fs_err as fs;

/// Build the library in the given mode, then rename the resulting
/// shared library to its canonical name.
///
/// Renaming anything other than exactly one file prints a warning but
/// is not an error, so that stale artifacts from earlier builds don't
/// break local iteration.
pub fn run(conf: &Config, mode: BuildMode) -> Result<(), BuildError> {
    build(conf, mode)?;

    let rename_count = finalize_artifacts(conf, mode)?;
    if rename_count != 1 {
        println!("renamed an unexpected number of files: {rename_count}");
    }

    Ok(())
}

/// Run `cargo build` for the given mode in the repo root, blocking
/// until it exits.
fn build(conf: &Config, mode: BuildMode) -> Result<(), BuildError> {
    let mut cmd = Command::with_args("cargo", ["build"]);
    cmd.add_args(mode.cargo_args());
    cmd.dir = Some(conf.repo_path().as_std_path().to_path_buf());
    cmd.capture = true;
    cmd.check = false;

    let output = cmd.run()?;
    if !output.status.success() {
        return Err(BuildError::BuildFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

/// Locate the mode's output directory and give the shared library its
/// canonical name. Returns the number of entries renamed.
fn finalize_artifacts(conf: &Config, mode: BuildMode) -> Result<u32, BuildError> {
    let target = conf.target_path();
    if !target.is_dir() {
        return Err(BuildError::NoOutputDirectory { path: target });
    }

    let output_dir = conf.output_path(mode);
    if !output_dir.is_dir() {
        return Err(BuildError::OutputMissing { path: output_dir });
    }

    rename_artifacts(&output_dir, &conf.lib_file_name(), conf.lib_suffix())
}

/// Rename every entry of `dir` whose name ends with the lib suffix
/// (compared case-insensitively) to `lib_file_name`, in place.
///
/// Entries are not filtered to regular files, and a later match
/// overwrites an earlier one. Both are intentional: the count check in
/// the caller is the only guard, and it only warns.
fn rename_artifacts(
    dir: &Utf8Path,
    lib_file_name: &str,
    suffix: LibSuffix,
) -> Result<u32, BuildError> {
    let canonical_path = dir.join(lib_file_name);
    let mut rename_count = 0;

    // Snapshot the listing up front. Renaming while lazily iterating
    // could yield the freshly created canonical file within the same
    // loop and count it a second time.
    let entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;

    for entry in entries {
        let file_name = entry.file_name();

        if file_name
            .to_string_lossy()
            .to_lowercase()
            .ends_with(suffix.as_str())
        {
            // Rename via the entry's own path so names that aren't
            // valid UTF-8 still round-trip.
            let src = entry.path();
            println!("rename {} to {canonical_path}", src.display());
            fs::rename(&src, &canonical_path)?;
            rename_count += 1;
        }
    }

    Ok(rename_count)
}
