use crate::*;
use confique::Config as _;
use std::path::Path;

/// Largest accepted `indent_offset`.
pub const MAX_INDENT_OFFSET: usize = 64;

/// Indentation settings passed explicitly to every entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Columns per nesting level.
    pub indent_offset: usize,
    /// Column width of a tab when measuring existing indentation.
    pub tab_width: usize,
    /// Emit a `debug!` record for every indented line.
    pub debug_logging: bool,
    pub recognized_keywords: KeywordSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_offset: 4,
            tab_width: 8,
            debug_logging: false,
            recognized_keywords: KeywordSet::default(),
        }
    }
}

impl Config {
    pub fn with_indent_offset(mut self, indent_offset: usize) -> Self {
        self.indent_offset = indent_offset;
        self
    }

    pub fn with_debug_logging(mut self, debug_logging: bool) -> Self {
        self.debug_logging = debug_logging;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.recognized_keywords = keywords;
        self
    }

    /// Reject values the indenter cannot work with.
    pub fn validate(self) -> Result<Self> {
        if self.indent_offset == 0 {
            return Err(Error::Config("indent_offset must be positive".into()));
        }
        if self.indent_offset > MAX_INDENT_OFFSET {
            return Err(Error::Config(format!(
                "indent_offset must be at most {MAX_INDENT_OFFSET}, got {}",
                self.indent_offset
            )));
        }
        if self.tab_width == 0 {
            return Err(Error::Config("tab_width must be positive".into()));
        }
        if self.recognized_keywords.is_empty() {
            return Err(Error::Config("recognized_keywords must not be empty".into()));
        }
        Ok(self)
    }
}

/// Layered settings: optional TOML file, then `SQLINDENT_*` environment
/// variables, then defaults.
#[derive(Debug, confique::Config)]
pub struct Settings {
    #[config(env = "SQLINDENT_OFFSET", default = 4)]
    pub indent_offset: usize,
    #[config(env = "SQLINDENT_TAB_WIDTH", default = 8)]
    pub tab_width: usize,
    #[config(env = "SQLINDENT_DEBUG", default = false)]
    pub debug_logging: bool,
    /// Replaces the built-in keyword list when present.
    #[config(env = "SQLINDENT_KEYWORDS", parse_env = confique::env::parse::list_by_comma)]
    pub recognized_keywords: Option<Vec<String>>,
}

impl Settings {
    /// Load settings from the environment and, when given, a TOML file.
    ///
    /// An explicitly named file must exist; values in the environment take
    /// precedence over the file.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Settings::builder().env();
        if let Some(path) = file {
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "settings file {} does not exist",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}

impl TryFrom<Settings> for Config {
    type Error = Error;

    fn try_from(settings: Settings) -> Result<Self> {
        let recognized_keywords: KeywordSet = settings
            .recognized_keywords
            .map(|words| words.into_iter().collect())
            .unwrap_or_default();
        Config {
            indent_offset: settings.indent_offset,
            tab_width: settings.tab_width,
            debug_logging: settings.debug_logging,
            recognized_keywords,
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write settings");
        file
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.indent_offset, 4);
        assert_eq!(config.tab_width, 8);
        assert!(!config.debug_logging);
        assert_eq!(config.recognized_keywords, KeywordSet::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = settings_file(
            "indent_offset = 2\ndebug_logging = true\nrecognized_keywords = [\"SELECT\", \"from\"]\n",
        );
        let settings = Settings::builder().file(file.path()).load().expect("load");
        let config = Config::try_from(settings).expect("valid");
        assert_eq!(config.indent_offset, 2);
        assert_eq!(config.tab_width, 8);
        assert!(config.debug_logging);
        assert_eq!(config.recognized_keywords.len(), 2);
        assert!(config.recognized_keywords.contains("select"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(Error::Config(_))), "{result:?}");
    }

    #[test]
    fn zero_offset_is_rejected() {
        let file = settings_file("indent_offset = 0\n");
        let settings = Settings::builder().file(file.path()).load().expect("load");
        assert!(matches!(Config::try_from(settings), Err(Error::Config(_))));
    }

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Run `f` with the given `SQLINDENT_*` variables set, removing them after.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
        }
        let out = f();
        unsafe {
            for (key, _) in vars {
                std::env::remove_var(key);
            }
        }
        out
    }

    #[test]
    fn environment_takes_precedence_over_file() {
        let file = settings_file("indent_offset = 2\ntab_width = 4\n");
        let settings = with_env(&[("SQLINDENT_OFFSET", "3")], || {
            Settings::load(Some(file.path())).expect("load")
        });
        assert_eq!(settings.indent_offset, 3);
        assert_eq!(settings.tab_width, 4);
    }

    #[test]
    fn keywords_from_environment_are_comma_separated() {
        let settings = with_env(&[("SQLINDENT_KEYWORDS", "Select, from,where")], || {
            Settings::load(None).expect("load")
        });
        let config = Config::try_from(settings).expect("valid");
        assert_eq!(config.recognized_keywords.len(), 3);
        assert!(config.recognized_keywords.contains("from"));
        assert!(config.recognized_keywords.contains("SELECT"));
        assert!(!config.recognized_keywords.contains("group"));
    }

    #[rstest::rstest]
    #[case(1, true)]
    #[case(MAX_INDENT_OFFSET, true)]
    #[case(MAX_INDENT_OFFSET + 1, false)]
    #[case(usize::MAX, false)]
    fn indent_offset_is_bounded(#[case] offset: usize, #[case] accepted: bool) {
        let result = Config::default().with_indent_offset(offset).validate();
        assert_eq!(result.is_ok(), accepted, "{result:?}");
    }

    #[test]
    fn empty_keyword_list_is_rejected() {
        let config = Config::default().with_keywords(KeywordSet::from_iter(["", "  "]));
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
