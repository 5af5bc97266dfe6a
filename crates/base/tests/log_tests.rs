use {
    base::{FileLogger, Level, Logger, UtcTime},
    std::fs,
};

#[test]
fn test_level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn test_level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!(" Warn ".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    assert!("verbose".parse::<Level>().is_err());
}

#[test]
fn test_utc_time_epoch() {
    let time = UtcTime::from_unix(0);
    assert_eq!(time.date(), "1970-01-01");
    assert_eq!(time.timestamp(), "1970-01-01T00:00:00");
}

#[test]
fn test_utc_time_leap_day() {
    // 11016 days after the epoch
    let time = UtcTime::from_unix(951_782_400 + 3_723);
    assert_eq!((time.year, time.month, time.day), (2000, 2, 29));
    assert_eq!(time.timestamp(), "2000-02-29T01:02:03");
}

#[test]
fn test_utc_time_year_end() {
    assert_eq!(UtcTime::from_unix(1_704_067_199).timestamp(), "2023-12-31T23:59:59");
    assert_eq!(UtcTime::from_unix(1_704_067_200).date(), "2024-01-01");
}

#[test]
fn test_file_logger_creates_directory() {
    let test_dir = std::env::temp_dir().join(format!("stroke-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let _logger = FileLogger::new(&test_dir, Level::Debug).expect("Failed to create FileLogger");
    assert!(test_dir.is_dir());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_filters_and_writes_lines() {
    let test_dir = std::env::temp_dir().join(format!("stroke-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir, Level::Warn).expect("Failed to create FileLogger");
    logger.log(Level::Info, "phases.rs", 10, "dropped message");
    logger.log(Level::Warn, "phases.rs", 42, "frame 3 scored 0.0");
    logger.log(Level::Error, "main.rs", 7, "second line");

    let entries: Vec<_> = fs::read_dir(&test_dir)
        .expect("Failed to read test directory")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "Should have exactly one log file");

    let content = fs::read_to_string(entries[0].path()).expect("Failed to read log file");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("phases.rs:42"));
    assert!(lines[0].ends_with("frame 3 scored 0.0"));
    assert!(lines[1].contains("ERROR"));
    assert!(!content.contains("dropped message"));

    fs::remove_dir_all(&test_dir).ok();
}
