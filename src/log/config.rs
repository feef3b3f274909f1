use crate::log::appender::ConsoleAppenderConfig;
use crate::log::environment::{Environment, ENVIRONMENT_VAR};
use crate::log::error::{LogError, Result};
use crate::log::level::LogLevel;
use crate::log::state::validate_date_format;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::path::Path;

/// 覆盖默认级别的环境变量
pub const LEVEL_VAR: &str = "MODLOG_LEVEL";
/// 覆盖默认时间格式的环境变量
pub const DATE_FORMAT_VAR: &str = "MODLOG_DATE_FORMAT";

/// LoggerFactory 配置
///
/// 支持 JSON5 / YAML / TOML：
///
/// ```
/// use modlog::log::LoggerFactoryConfig;
///
/// let config = LoggerFactoryConfig::from_json(r#"
///     {
///         level: "info",
///         general_file: "logs/out.log",
///         error_file: "logs/error.log",
///         environment: "production",
///     }
/// "#).unwrap();
/// assert_eq!(config.level, "info");
/// ```
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerFactoryConfig {
    /// 初始最低级别
    #[default = "debug"]
    pub level: String,

    /// 自定义时间格式（chrono strftime），None 表示默认格式
    #[default(None)]
    pub date_format: Option<String>,

    /// 通用日志文件
    #[default = "out.log"]
    pub general_file: String,

    /// 错误日志文件，只接收 error 级别
    #[default = "error.log"]
    pub error_file: String,

    /// 运行环境，None 时读取 `MODLOG_ENV`
    #[default(None)]
    pub environment: Option<Environment>,

    /// 终端输出配置
    pub console: ConsoleAppenderConfig,
}

impl LoggerFactoryConfig {
    /// 从 JSON 字符串创建（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> anyhow::Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建
    pub fn from_yaml(yaml_str: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 从配置文件创建，按扩展名选择格式
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "json" | "json5" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            "toml" => Self::from_toml(&content),
            other => Err(anyhow::anyhow!(
                "unsupported config file extension '{}': {}",
                other,
                path.display()
            )),
        }
    }

    /// 默认配置叠加环境变量 `MODLOG_ENV` / `MODLOG_LEVEL` / `MODLOG_DATE_FORMAT`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(env) = std::env::var(ENVIRONMENT_VAR) {
            config.environment = Some(Environment::from_name(&env));
        }
        if let Ok(level) = std::env::var(LEVEL_VAR) {
            config.level = level;
        }
        if let Ok(format) = std::env::var(DATE_FORMAT_VAR) {
            config.date_format = Some(format);
        }
        config
    }

    /// 解析后的级别
    pub fn parsed_level(&self) -> Result<LogLevel> {
        self.level.parse()
    }

    /// 实际生效的运行环境
    pub fn resolved_environment(&self) -> Environment {
        self.environment.unwrap_or_else(Environment::from_env)
    }

    /// 校验级别与时间格式
    pub fn validate(&self) -> Result<()> {
        self.parsed_level()?;
        if let Some(format) = &self.date_format {
            validate_date_format(format)?;
        }
        if self.general_file.trim().is_empty() || self.error_file.trim().is_empty() {
            return Err(LogError::Config("log file paths must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::appender::Target;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = LoggerFactoryConfig::default();
        assert_eq!(config.level, "debug");
        assert_eq!(config.general_file, "out.log");
        assert_eq!(config.error_file, "error.log");
        assert!(config.date_format.is_none());
        assert!(config.environment.is_none());
        assert!(config.console.colored);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config = LoggerFactoryConfig::from_json(
            r#"
            {
                level: "warn",
                date_format: "%H:%M:%S",
                environment: "test",
                console: { colored: false, target: "stderr" },
            }
            "#,
        )
        .unwrap();

        assert_eq!(config.parsed_level().unwrap(), LogLevel::Warn);
        assert_eq!(config.date_format.as_deref(), Some("%H:%M:%S"));
        assert_eq!(config.environment, Some(Environment::Test));
        assert_eq!(config.console.target, Target::Stderr);
        assert!(!config.console.colored);
        // 未指定的字段使用默认值
        assert_eq!(config.general_file, "out.log");
    }

    #[test]
    fn test_config_from_yaml() {
        let config = LoggerFactoryConfig::from_yaml(
            r#"
level: trace
general_file: logs/general.log
error_file: logs/errors.log
"#,
        )
        .unwrap();

        assert_eq!(config.parsed_level().unwrap(), LogLevel::Trace);
        assert_eq!(config.general_file, "logs/general.log");
        assert_eq!(config.error_file, "logs/errors.log");
    }

    #[test]
    fn test_config_from_toml() {
        let config = LoggerFactoryConfig::from_toml(
            r#"
level = "info"
environment = "production"

[console]
colored = false
"#,
        )
        .unwrap();

        assert_eq!(config.parsed_level().unwrap(), LogLevel::Info);
        assert_eq!(config.resolved_environment(), Environment::Production);
        assert!(!config.console.colored);
    }

    #[test]
    fn test_config_from_file() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("log.yaml");
        std::fs::write(&path, "level: error\n")?;

        let config = LoggerFactoryConfig::from_file(&path)?;
        assert_eq!(config.parsed_level()?, LogLevel::Error);

        let bad = temp_dir.path().join("log.ini");
        std::fs::write(&bad, "level=error")?;
        assert!(LoggerFactoryConfig::from_file(&bad).is_err());

        Ok(())
    }

    #[test]
    fn test_config_validate() {
        let config = LoggerFactoryConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LogError::InvalidLevel(_))));

        let config = LoggerFactoryConfig {
            date_format: Some("%Q".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LogError::InvalidDateFormat(_))));

        let config = LoggerFactoryConfig {
            error_file: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LogError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var(ENVIRONMENT_VAR, "test");
        std::env::set_var(LEVEL_VAR, "info");
        std::env::set_var(DATE_FORMAT_VAR, "%Y");

        let config = LoggerFactoryConfig::from_env();
        assert_eq!(config.environment, Some(Environment::Test));
        assert_eq!(config.level, "info");
        assert_eq!(config.date_format.as_deref(), Some("%Y"));

        std::env::remove_var(ENVIRONMENT_VAR);
        std::env::remove_var(LEVEL_VAR);
        std::env::remove_var(DATE_FORMAT_VAR);

        let config = LoggerFactoryConfig::from_env();
        assert_eq!(config, LoggerFactoryConfig::default());
    }

    #[test]
    fn test_config_environment_alias() {
        let config = LoggerFactoryConfig::from_json(r#"{ environment: "prod" }"#).unwrap();
        assert_eq!(config.environment, Some(Environment::Production));

        let config = LoggerFactoryConfig::from_yaml("environment: staging").unwrap();
        assert_eq!(config.environment, Some(Environment::Development));
    }
}
