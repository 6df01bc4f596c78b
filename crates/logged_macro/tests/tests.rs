#[cfg(test)]
mod tests {
    use std::fs;

    use logged_macro::logged;
    use rotating_logger::{get_instance, LoggerConfig};
    use tempfile::tempdir;

    #[logged(trace)]
    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[logged(debug)]
    fn greet(name: &str) -> String {
        format!("hello {}", name)
    }

    #[logged]
    fn no_args() {}

    #[test]
    fn test_logged_functions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("macro.log");
        let logger = get_instance(Some(LoggerConfig::default().log_file(&path)));

        assert_eq!(add(2, 3), 5);
        assert_eq!(greet("bob"), "hello bob");
        no_args();
        logger.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("TRACE: Entering"));
        assert!(lines[0].ends_with("::add(a: 2, b: 3)"));
        assert!(lines[1].ends_with("::add returned: 5"));
        assert!(lines[2].contains("DEBUG: Entering"));
        assert!(lines[2].contains("::greet(name: &"));
        assert!(lines[2].ends_with("str)"));
        assert!(lines[3].contains("DEBUG: Leaving"));
        assert!(lines[3].ends_with("::greet"));
        assert!(lines[4].ends_with("::no_args()"));
        assert!(lines[5].ends_with("::no_args"));

        logger.shutdown();
    }
}
