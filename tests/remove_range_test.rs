use cssmend::config::ConfigData;
use cssmend::repair::{remove_line_range, LineRange};
use cssmend::Mender;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn numbered_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!(".rule-{} {{ order: {}; }}\n", i, i)).collect()
}

fn write_lines(dir: &Path, lines: &[String]) -> PathBuf {
    let path = dir.join("site.css");
    fs::write(&path, lines.concat()).unwrap();
    path
}

#[test]
fn test_default_range_on_large_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let lines = numbered_lines(7200);
    let site = write_lines(temp_dir.path(), &lines);

    let report = Mender::default().remove_range(&site)?;

    assert_eq!(report.original_lines, 7200);
    assert_eq!(report.new_lines, 7200 - 34);
    assert_eq!(report.removed_lines, 34);

    let expected = [&lines[..7120], &lines[7154..]].concat().concat();
    assert_eq!(fs::read_to_string(&site)?, expected);
    Ok(())
}

#[test]
fn test_second_run_removes_a_different_block() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let lines = numbered_lines(7250);
    let site = write_lines(temp_dir.path(), &lines);
    let mender = Mender::default();

    mender.remove_range(&site)?;
    let once = fs::read_to_string(&site)?;

    let report = mender.remove_range(&site)?;
    let twice = fs::read_to_string(&site)?;

    assert_ne!(once, twice);
    assert_eq!(report.original_lines, 7250 - 34);
    assert_eq!(report.new_lines, 7250 - 68);
    // The second pass eats lines that survived the first
    assert!(once.contains(".rule-7154 "));
    assert!(!twice.contains(".rule-7154 "));
    Ok(())
}

#[test]
fn test_surrounding_bytes_preserved() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let site = temp_dir.path().join("site.css");
    fs::write(&site, "keep \r\n\tremove\nremove\r\n  keep\t\r\nlast")?;

    let report = remove_line_range(&site, LineRange::new(1, 3)?)?;

    assert_eq!(report.original_lines, 5);
    assert_eq!(report.new_lines, 3);
    assert_eq!(fs::read(&site)?, b"keep \r\n  keep\t\r\nlast".to_vec());
    Ok(())
}

#[test]
fn test_short_file_clamps_range() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let lines = numbered_lines(10);
    let site = write_lines(temp_dir.path(), &lines);

    // Default range lies entirely past the end
    let report = Mender::default().remove_range(&site)?;
    assert_eq!(report.original_lines, 10);
    assert_eq!(report.new_lines, 10);
    assert_eq!(fs::read_to_string(&site)?, lines.concat());

    // Range straddling the end drops the tail
    let report = remove_line_range(&site, LineRange::new(8, 20)?)?;
    assert_eq!(report.new_lines, 8);
    assert_eq!(fs::read_to_string(&site)?, lines[..8].concat());
    Ok(())
}

#[test]
fn test_configured_range() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let lines = numbered_lines(6);
    let site = write_lines(temp_dir.path(), &lines);

    let config = ConfigData::default().with_range(Some(0), Some(2));
    let report = Mender::new(config)?.remove_range(&site)?;

    assert_eq!(report.removed_lines, 2);
    assert_eq!(fs::read_to_string(&site)?, lines[2..].concat());
    Ok(())
}

#[test]
fn test_missing_target_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Mender::default()
        .remove_range(&temp_dir.path().join("missing.css"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_cr_only_lines_are_counted() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let site = temp_dir.path().join("site.css");
    fs::write(&site, "a\rb\rc\rd\r")?;

    let report = remove_line_range(&site, LineRange::new(1, 3)?)?;

    assert_eq!(report.original_lines, 4);
    assert_eq!(report.new_lines, 2);
    assert_eq!(fs::read(&site)?, b"a\rd\r".to_vec());
    Ok(())
}
