//! coredo 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// coredo 错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O 错误（配置文件读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 远程请求错误（网络或非 2xx 响应，不再细分）
    #[error("request failed: {0}")]
    Request(String),

    /// 配置文件 TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// 配置文件 TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// coredo Result 类型别名
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// 创建远程请求错误
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}

impl From<ureq::Error> for CoreError {
    fn from(err: ureq::Error) -> Self {
        // 超时、连接失败、非 2xx 状态统一折叠成一类错误
        Self::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::request("connection refused");
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not { valid").unwrap_err();
        let core_err: CoreError = toml_err.into();
        assert!(matches!(core_err, CoreError::TomlParse(_)));
    }
}
