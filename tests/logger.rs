use estatelist::logger::Logger;

#[test]
fn test_logs_come_back_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].contains("third"));
    assert!(logs[2].contains("first"));
}

#[test]
fn test_entries_carry_a_timestamp_prefix() {
    let logger = Logger::new();
    logger.log("Data: Loaded 3 leads".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    // "[HH:MM:SS.mmm] message"
    assert!(logs[0].starts_with('['));
    assert!(logs[0].ends_with("Data: Loaded 3 leads"));
}

#[test]
fn test_clones_share_the_same_buffer() {
    let logger = Logger::new();
    let handle = logger.clone();

    handle.log("logged through the clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(handle.get_logs().is_empty());
}

#[test]
fn test_buffer_is_bounded() {
    let logger = Logger::new();
    for i in 0..600 {
        logger.log(format!("entry {i}"));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 500);
    // Oldest entries were dropped
    assert!(logs.last().unwrap().contains("entry 100"));
    assert!(logs.first().unwrap().contains("entry 599"));
}
