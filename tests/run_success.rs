mod common;

use std::error::Error;
use std::fs;

use cronwrap::exec::run_task;
use cronwrap::task::TaskOutcome;
use tempfile::TempDir;

use common::sh_descriptor;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn successful_run_brackets_output_with_markers() -> TestResult {
    let dir = TempDir::new()?;
    let desc = sh_descriptor(dir.path(), "monitor", "Monitor", "echo OK\n")?;

    let outcome = run_task(&desc).await?;
    assert_eq!(outcome, TaskOutcome::Success);
    assert_eq!(outcome.exit_code(), 0);

    let log = fs::read_to_string(&desc.log_path)?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("--- Monitor job started: "));
    assert!(lines[0].ends_with(" ---"));
    assert_eq!(lines[1], "OK");
    assert!(lines[2].starts_with("--- Monitor job finished: "));
    assert!(lines[2].ends_with(" ---"));

    Ok(())
}

#[tokio::test]
async fn stdout_and_stderr_are_combined_in_order() -> TestResult {
    let dir = TempDir::new()?;
    let desc = sh_descriptor(
        dir.path(),
        "monitor",
        "Monitor",
        "echo out1\necho err1 >&2\necho out2\n",
    )?;

    run_task(&desc).await?;

    let log = fs::read_to_string(&desc.log_path)?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(&lines[1..4], &["out1", "err1", "out2"]);

    Ok(())
}

#[tokio::test]
async fn appends_after_existing_contents() -> TestResult {
    let dir = TempDir::new()?;
    let desc = sh_descriptor(dir.path(), "monitor", "Monitor", "echo OK\n")?;

    fs::create_dir_all(desc.log_path.parent().unwrap())?;
    fs::write(&desc.log_path, "earlier entry\n")?;

    run_task(&desc).await?;

    let log = fs::read_to_string(&desc.log_path)?;
    assert!(log.starts_with("earlier entry\n"));
    assert!(log.contains("--- Monitor job started: "));
    assert!(log.contains("--- Monitor job finished: "));

    Ok(())
}

#[tokio::test]
async fn repeated_runs_append_marker_pairs() -> TestResult {
    let dir = TempDir::new()?;
    let desc = sh_descriptor(dir.path(), "monitor", "Monitor", "echo OK\n")?;

    run_task(&desc).await?;
    run_task(&desc).await?;
    run_task(&desc).await?;

    let log = fs::read_to_string(&desc.log_path)?;
    assert_eq!(log.matches("--- Monitor job started: ").count(), 3);
    assert_eq!(log.matches("--- Monitor job finished: ").count(), 3);

    Ok(())
}
