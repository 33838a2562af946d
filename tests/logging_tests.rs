//! 日志配置功能测试

use tl::infrastructure::config::Logging;

#[test]
fn test_log_level_parsing() {
    // 测试日志级别解析
    let levels = vec!["DEBUG", "INFO", "WARN", "ERROR"];

    for level in levels {
        let parsed = match level {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        };

        assert!(!parsed.is_empty());
        assert_eq!(parsed.to_lowercase(), parsed);
    }
}

#[test]
fn test_logging_defaults() {
    let logging = Logging::default();

    assert!(logging.enable);
    assert_eq!(logging.level, "WARN");
    assert!(logging.path.is_none());
}

#[test]
fn test_logging_toml_override() {
    let logging: Logging = toml::from_str(
        r#"
enable = false
path = "/tmp/test_tl.log"
level = "DEBUG"
"#,
    )
    .unwrap();

    assert!(!logging.enable);
    assert_eq!(logging.level, "DEBUG");
    assert!(logging.path.as_deref().unwrap().contains("test_tl"));
}
