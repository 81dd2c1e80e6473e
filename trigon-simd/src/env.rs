//! Runtime configuration through environment variables.

/// Keep every dispatch slot on its fallback kernel, even if the CPU supports
/// accelerated ones. Capabilities are still detected and reported.
pub const FORCE_FALLBACK_VAR: &str = "TRIGON_FORCE_FALLBACK";

/// Interpret a string value such as "1" or "no" as a boolean.
///
/// Returns `None` for unrecognized values.
pub fn str_as_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Return whether a feature flag controlled by an environment variable is
/// enabled.
pub fn env_flag(name: &str, default: bool) -> bool {
    let Ok(value) = std::env::var(name) else {
        return default;
    };
    str_as_bool(&value).unwrap_or_else(|| {
        log::warn!(
            "Unrecognized boolean value \"{}\" for {}, using {}",
            value,
            name,
            default
        );
        default
    })
}

#[cfg(test)]
mod tests {
    use trigon_testing::TestCases;

    use super::{env_flag, str_as_bool};

    #[test]
    fn test_str_as_bool() {
        #[derive(Debug)]
        struct Case {
            value: &'static str,
            expected: Option<bool>,
        }

        let cases = [
            Case {
                value: "1",
                expected: Some(true),
            },
            Case {
                value: "Yes",
                expected: Some(true),
            },
            Case {
                value: " off ",
                expected: Some(false),
            },
            Case {
                value: "0",
                expected: Some(false),
            },
            Case {
                value: "maybe",
                expected: None,
            },
        ];

        cases.test_each(|case| assert_eq!(str_as_bool(case.value), case.expected))
    }

    #[test_log::test]
    fn test_env_flag_default() {
        assert!(env_flag("TRIGON_TEST_UNSET_FLAG", true));
        assert!(!env_flag("TRIGON_TEST_UNSET_FLAG", false));
    }
}
