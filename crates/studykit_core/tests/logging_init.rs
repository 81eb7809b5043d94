use studykit_core::{default_log_level, init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("INFO", &log_dir_str).unwrap();

    let level_error = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let (active_level, active_dir) = logging_status().unwrap();
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());

    log::logger().flush();
    let written = std::fs::read_dir(log_dir.path())
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect::<String>();
    assert!(written.contains("event=core_init module=core status=ok app=studykit level=info"));
    assert!(written.contains("panels=schedule,grades,attendance,planner,quiz,shell"));
}

#[test]
fn default_level_matches_build_mode() {
    let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
    assert_eq!(default_log_level(), expected);
}
