use crate::config::SourcePaths;
use crate::utils::error::{ConsolidationError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

/// A batch of consolidations, typically one per language vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub base_dir: Option<PathBuf>,
    pub monitor: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub primary: PathBuf,
    pub additional: PathBuf,
    pub output: PathBuf,
    pub enabled: Option<bool>,
}

impl JobConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths::new(&self.primary, &self.additional, &self.output)
    }
}

impl JobsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConsolidationError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${VOCAB_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn base_dir(&self) -> &Path {
        self.settings.base_dir.as_deref().unwrap_or(Path::new(""))
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.settings.monitor.unwrap_or(false)
    }

    pub fn enabled_jobs(&self) -> impl Iterator<Item = &JobConfig> {
        self.jobs.iter().filter(|job| job.is_enabled())
    }

    pub fn job(&self, name: &str) -> Option<&JobConfig> {
        self.jobs.iter().find(|job| job.name == name)
    }
}

impl Validate for JobsConfig {
    fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(ConsolidationError::MissingConfigError {
                field: "jobs".to_string(),
            });
        }

        validation::validate_unique_names("jobs.name", self.jobs.iter().map(|j| j.name.as_str()))?;

        for job in &self.jobs {
            validation::validate_non_empty_string("jobs.name", &job.name)?;
            job.source_paths()
                .validate()
                .map_err(|e| ConsolidationError::ConfigValidationError {
                    field: format!("jobs.{}", job.name),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[settings]
base_dir = "./vocab"

[[jobs]]
name = "en-us"
primary = "en-us.txt"
additional = "en-us-common.txt"
output = "en-us-final.txt"

[[jobs]]
name = "pt-br"
primary = "pt-br.txt"
additional = "pt-br-extra.txt"
output = "pt-br-final.txt"
enabled = false
"#;

    #[test]
    fn test_parse_basic_jobs_config() {
        let config = JobsConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.jobs.len(), 2);
        assert_eq!(config.base_dir(), Path::new("./vocab"));
        assert!(!config.monitoring_enabled());
        let enabled: Vec<_> = config.enabled_jobs().map(|j| j.name.as_str()).collect();
        assert_eq!(enabled, vec!["en-us"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VOCAB_CONSOLIDATOR_TEST_DIR", "/srv/vocab");

        let config = JobsConfig::from_toml_str(
            r#"
[settings]
base_dir = "${VOCAB_CONSOLIDATOR_TEST_DIR}"

[[jobs]]
name = "en-us"
primary = "a.txt"
additional = "b.txt"
output = "${VOCAB_CONSOLIDATOR_UNSET_VAR}.txt"
"#,
        )
        .unwrap();

        assert_eq!(config.base_dir(), Path::new("/srv/vocab"));
        assert_eq!(
            config.jobs[0].output,
            PathBuf::from("${VOCAB_CONSOLIDATOR_UNSET_VAR}.txt")
        );

        std::env::remove_var("VOCAB_CONSOLIDATOR_TEST_DIR");
    }

    #[test]
    fn test_duplicate_job_names_rejected() {
        let config = JobsConfig::from_toml_str(
            r#"
[[jobs]]
name = "en-us"
primary = "a.txt"
additional = "b.txt"
output = "c.txt"

[[jobs]]
name = "en-us"
primary = "d.txt"
additional = "e.txt"
output = "f.txt"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_config_rejected() {
        let config = JobsConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConsolidationError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            JobsConfig::from_toml_str("[[jobs]\nname = "),
            Err(ConsolidationError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = JobsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job("pt-br").unwrap().output, PathBuf::from("pt-br-final.txt"));
    }
}
