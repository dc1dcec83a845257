use std::path::Path;

use assert_cmd::Command;

/// `fa-gen --no-color -C <dir> <args>`
///
pub fn fa_gen(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("fa-gen").unwrap();
    cmd.arg("--no-color").arg("-C").arg(dir).args(args);
    cmd
}
