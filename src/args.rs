use clap::Parser;
use site_spellcheck::config::{CheckerConfig, DictionarySource};
use site_spellcheck::error::ConfigError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-spellcheck")]
#[command(about = "Spell-checks a website's homepage and the pages it links to")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Homepage to check; only links starting with it are followed
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Number of homepage links to check
    #[arg(short = 'n', long)]
    pub max_links: Option<usize>,

    /// WebDriver server URL
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Run the browser without a window
    #[arg(long)]
    pub headless: bool,

    /// Misspellings printed per page
    #[arg(short, long)]
    pub report_limit: Option<usize>,

    /// Hunspell affix and dictionary files
    #[arg(long, num_args = 2, value_names = ["AFF", "DIC"], conflicts_with = "word_list")]
    pub hunspell: Option<Vec<PathBuf>>,

    /// Plain word list, one word per line
    #[arg(long)]
    pub word_list: Option<PathBuf>,

    /// Word that is never reported (repeatable)
    #[arg(short, long = "ignore")]
    pub ignore: Vec<String>,
}

impl Args {
    /// Builds the run configuration: file, then `WEBDRIVER_URL`, then flags
    pub fn into_config(self) -> Result<CheckerConfig, ConfigError> {
        let webdriver_env = std::env::var("WEBDRIVER_URL").ok();
        self.into_config_with_env(webdriver_env)
    }

    fn into_config_with_env(
        self,
        webdriver_env: Option<String>,
    ) -> Result<CheckerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CheckerConfig::from_file(path)?,
            None => CheckerConfig::default(),
        };
        config.override_webdriver_url(webdriver_env);

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(max_links) = self.max_links {
            config.max_links = max_links;
        }
        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        }
        if self.headless {
            config.headless = true;
        }
        if let Some(report_limit) = self.report_limit {
            config.report_limit = report_limit;
        }
        if let Some(files) = self.hunspell {
            if let [aff, dic] = files.as_slice() {
                config.dictionary = DictionarySource::Hunspell {
                    aff: aff.clone(),
                    dic: dic.clone(),
                };
            }
        }
        if let Some(path) = self.word_list {
            config.dictionary = DictionarySource::WordList { path };
        }
        config.ignore_words.extend(self.ignore);

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["site-spellcheck"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.base_url, "https://nexign.com/ru");
        assert_eq!(config.max_links, 20);
        assert_eq!(config.report_limit, 5);
        assert_eq!(config.dictionary, DictionarySource::default());
    }

    #[test]
    fn test_webdriver_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"webdriver_url": "http://from-file:4444"}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from(["site-spellcheck", "--config", path]).unwrap();
        let config = args
            .into_config_with_env(Some("http://from-env:4444".to_string()))
            .unwrap();
        assert_eq!(config.webdriver_url, "http://from-env:4444");

        let args = Args::try_parse_from(["site-spellcheck", "--config", path]).unwrap();
        let config = args.into_config_with_env(Some(String::new())).unwrap();
        assert_eq!(config.webdriver_url, "http://from-file:4444");
    }

    #[test]
    fn test_webdriver_flag_beats_env() {
        let args = Args::try_parse_from([
            "site-spellcheck",
            "--webdriver-url",
            "http://from-flag:9515",
        ])
        .unwrap();
        let config = args
            .into_config_with_env(Some("http://from-env:4444".to_string()))
            .unwrap();
        assert_eq!(config.webdriver_url, "http://from-flag:9515");
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "site-spellcheck",
            "--base-url",
            "https://example.com/docs",
            "-n",
            "3",
            "--webdriver-url",
            "http://localhost:9515",
            "--headless",
            "--word-list",
            "/tmp/words.txt",
            "-i",
            "Nexign",
            "-i",
            "bss",
        ])
        .unwrap();
        let config = args.into_config().unwrap();

        assert_eq!(config.base_url, "https://example.com/docs");
        assert_eq!(config.max_links, 3);
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert!(config.headless);
        assert_eq!(
            config.dictionary,
            DictionarySource::WordList {
                path: PathBuf::from("/tmp/words.txt")
            }
        );
        assert_eq!(config.ignore_words, vec!["Nexign", "bss"]);
    }

    #[test]
    fn test_hunspell_takes_two_files() {
        let args = Args::try_parse_from([
            "site-spellcheck",
            "--hunspell",
            "/dicts/en_US.aff",
            "/dicts/en_US.dic",
        ])
        .unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(
            config.dictionary,
            DictionarySource::Hunspell {
                aff: PathBuf::from("/dicts/en_US.aff"),
                dic: PathBuf::from("/dicts/en_US.dic"),
            }
        );

        assert!(Args::try_parse_from(["site-spellcheck", "--hunspell", "only.aff"]).is_err());
    }

    #[test]
    fn test_dictionary_flags_conflict() {
        let result = Args::try_parse_from([
            "site-spellcheck",
            "--hunspell",
            "a.aff",
            "a.dic",
            "--word-list",
            "words.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args::try_parse_from(["site-spellcheck", "--report-limit", "0"]).unwrap();
        assert!(matches!(
            args.into_config(),
            Err(ConfigError::Invalid { field: "report_limit", .. })
        ));
    }
}
