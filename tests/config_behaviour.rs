use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use cronwrap::config::loader::{CONFIG_FILE_NAME, load_for_root};
use cronwrap::config::model::{ConfigFile, DEFAULT_SEARCH_PATH};
use cronwrap::errors::CronwrapError;
use cronwrap::resolve_descriptor;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn config_file_drives_task_table() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[default]
search_path = "/usr/bin:/bin"
log_dir = "var/log"

[task.monitor]
label = "Monitor"
interpreter = "venv/bin/python3"
script = "monitor.py"

[task.reporter]
label = "Reporter"
interpreter = "venv/bin/python3"
script = "reporter.py"
log = "var/log/custom-reporter.log"
"#,
    )?;

    let cfg = load_for_root(dir.path())?;
    assert_eq!(cfg.default.search_path, "/usr/bin:/bin");
    assert_eq!(cfg.task.len(), 2);

    let monitor = resolve_descriptor(dir.path(), &cfg, "monitor")?;
    assert_eq!(monitor.label, "Monitor");
    assert_eq!(monitor.log_path, dir.path().join("var/log/monitor.log"));
    assert_eq!(monitor.search_path, "/usr/bin:/bin");

    let reporter = resolve_descriptor(dir.path(), &cfg, "reporter")?;
    assert_eq!(
        reporter.log_path,
        dir.path().join("var/log/custom-reporter.log")
    );

    Ok(())
}

#[test]
fn absent_config_file_falls_back_to_builtin_tasks() -> TestResult {
    let dir = TempDir::new()?;
    let cfg = load_for_root(dir.path())?;

    assert_eq!(cfg.default.search_path, DEFAULT_SEARCH_PATH);
    assert!(cfg.task.contains_key("monitor"));
    assert!(cfg.task.contains_key("reporter"));
    assert_eq!(cfg.task["monitor"].label, "Monitor");
    assert_eq!(cfg.task["monitor"].script, PathBuf::from("monitor.py"));
    assert_eq!(cfg.task["reporter"].label, "Reporter");

    Ok(())
}

#[test]
fn empty_task_table_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[default]\n")?;

    let err = load_for_root(dir.path()).unwrap_err();
    assert!(matches!(err, CronwrapError::Config(_)));

    Ok(())
}

#[test]
fn empty_label_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[task.monitor]\nlabel = \"\"\ninterpreter = \"venv/bin/python3\"\nscript = \"monitor.py\"\n",
    )?;

    let err = load_for_root(dir.path()).unwrap_err();
    assert!(matches!(err, CronwrapError::Config(_)));

    Ok(())
}

#[test]
fn malformed_toml_is_a_parse_error() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(CONFIG_FILE_NAME), "not = [toml\n")?;

    let err = load_for_root(dir.path()).unwrap_err();
    assert!(matches!(err, CronwrapError::Toml(_)));

    Ok(())
}

#[test]
fn unknown_task_lookup_fails() -> TestResult {
    let cfg = ConfigFile::builtin();
    let err = resolve_descriptor(Path::new("/opt/cronwrap"), &cfg, "backup").unwrap_err();
    assert!(matches!(err, CronwrapError::TaskNotFound(_)));

    Ok(())
}

#[test]
fn resolution_is_rooted_not_cwd_relative() -> TestResult {
    let cfg = ConfigFile::builtin();
    let root = Path::new("/opt/cronwrap");

    let desc = resolve_descriptor(root, &cfg, "monitor")?;
    assert!(desc.interpreter.is_absolute());
    assert!(desc.script.is_absolute());
    assert!(desc.log_path.is_absolute());
    assert_eq!(
        desc.interpreter,
        PathBuf::from("/opt/cronwrap/venv/bin/python3")
    );
    assert_eq!(desc.script, PathBuf::from("/opt/cronwrap/monitor.py"));
    assert_eq!(desc.log_path, PathBuf::from("/opt/cronwrap/logs/monitor.log"));
    assert_eq!(
        desc.journal_path,
        PathBuf::from("/opt/cronwrap/logs/runs.jsonl")
    );
    assert_eq!(desc.work_dir, root);

    Ok(())
}

#[test]
fn absolute_config_paths_are_kept_as_is() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[task.monitor]
label = "Monitor"
interpreter = "/usr/bin/python3"
script = "/srv/jobs/monitor.py"
log = "/var/log/monitor.log"
"#,
    )?;

    let cfg = load_for_root(dir.path())?;
    let desc = resolve_descriptor(dir.path(), &cfg, "monitor")?;
    assert_eq!(desc.interpreter, PathBuf::from("/usr/bin/python3"));
    assert_eq!(desc.script, PathBuf::from("/srv/jobs/monitor.py"));
    assert_eq!(desc.log_path, PathBuf::from("/var/log/monitor.log"));

    Ok(())
}
