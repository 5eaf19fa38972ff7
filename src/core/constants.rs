/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - URLs on stdout, colored summary on stderr
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - URLs only, nothing else
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Extension filter defaults
pub mod extensions {
    /// Static resource extensions removed when nothing else is configured
    pub const DEFAULT: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".css", ".js"];
}

/// Similarity grouping defaults
pub mod grouping {
    /// Number of URLs kept per similarity group
    pub const DEFAULT_GROUP_CAP: usize = 3;
    /// Token substituted for variable path segments in a signature
    pub const PLACEHOLDER: &str = "{}";
    /// Minimum length of a segment treated as an opaque identifier
    pub const DEFAULT_MIN_TOKEN_LEN: usize = 32;
    /// Minimum length of a segment treated as a hex hash
    pub const DEFAULT_MIN_HEX_LEN: usize = 16;
}

/// Named segment rules accepted in config files and on the command line
pub mod segment_rules {
    pub const NUMERIC: &str = "numeric";
    pub const LONG_TOKEN: &str = "long-token";
    pub const HEX: &str = "hex";

    /// Rules applied when none are configured
    pub const DEFAULT: [&str; 2] = [NUMERIC, LONG_TOKEN];

    /// All valid rule names
    pub const ALL: [&str; 3] = [NUMERIC, LONG_TOKEN, HEX];
}

/// Query parameters that never distinguish one page from another
pub mod query {
    pub const NOISE_PARAMS: [&str; 18] = [
        "timestamp",
        "time",
        "t",
        "random",
        "rand",
        "v",
        "version",
        "_",
        "_t",
        "cache",
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "ga",
        "_ga",
        "fbclid",
        "ref",
        "source",
    ];
}

/// Input processing constants
pub mod files {
    /// Lines handled per pipeline batch between progress updates
    pub const PROCESS_BATCH_SIZE: usize = 1000;
    /// Name of the config file searched for in the working directory
    pub const CONFIG_FILE_NAME: &str = ".urlsift.toml";
    /// Parent directories searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Input path that means "read standard input"
    pub const STDIN_MARKER: &str = "-";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
        assert!(output_formats::ALL.contains(&output_formats::MINIMAL));
    }

    #[test]
    fn test_default_extensions_are_normalized() {
        for ext in extensions::DEFAULT {
            assert!(ext.starts_with('.'));
            assert_eq!(ext, ext.to_lowercase());
        }
    }

    #[test]
    fn test_grouping_constants() {
        assert_eq!(grouping::DEFAULT_GROUP_CAP, 3);
        assert_eq!(grouping::DEFAULT_MIN_TOKEN_LEN, 32);
        assert_eq!(grouping::PLACEHOLDER, "{}");
    }

    #[test]
    fn test_default_segment_rules_are_known() {
        for rule in segment_rules::DEFAULT {
            assert!(segment_rules::ALL.contains(&rule));
        }
    }
}
