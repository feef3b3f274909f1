use serde::Deserialize;
use std::str::FromStr;

/// 读取运行环境的环境变量名
pub const ENVIRONMENT_VAR: &str = "MODLOG_ENV";

/// 运行环境
///
/// 仅用于决定是否挂载终端输出：
/// - Production: 不挂载终端输出
/// - Test: 挂载终端输出，但初始为静音
/// - Development: 正常输出到终端
///
/// 配置文件与环境变量使用同一套名称解析规则，见 [`Environment::from_name`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(from = "String")]
pub enum Environment {
    Production,
    Test,
    #[default]
    Development,
}

impl Environment {
    /// 从环境变量 `MODLOG_ENV` 读取，未设置时为 Development
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .map(|value| Self::from_name(&value))
            .unwrap_or_default()
    }

    /// 按名称解析，无法识别的名称视为 Development
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "test" => Environment::Test,
            _ => Environment::Development,
        }
    }

    /// 是否挂载终端输出
    pub fn attaches_console(&self) -> bool {
        !matches!(self, Environment::Production)
    }

    /// 终端输出初始是否静音
    pub fn starts_muted(&self) -> bool {
        matches!(self, Environment::Test)
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}
