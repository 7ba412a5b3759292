use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cronwrap::task::TaskDescriptor;

/// Build a descriptor running `/bin/sh` on a script written into `dir`,
/// logging under `dir/logs/`.
pub fn sh_descriptor(
    dir: &Path,
    name: &str,
    label: &str,
    body: &str,
) -> io::Result<TaskDescriptor> {
    let script = dir.join(format!("{name}.sh"));
    fs::write(&script, body)?;

    Ok(TaskDescriptor {
        name: name.to_string(),
        label: label.to_string(),
        interpreter: PathBuf::from("/bin/sh"),
        script,
        log_path: dir.join("logs").join(format!("{name}.log")),
        journal_path: dir.join("logs").join("runs.jsonl"),
        search_path: "/usr/bin:/bin".to_string(),
        work_dir: dir.to_path_buf(),
    })
}
