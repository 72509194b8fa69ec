use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortenerError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    DuplicateMapping(String),
    CodeSpaceExhausted(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::DatabaseConfig(_) => "E001",
            ShortenerError::DatabaseConnection(_) => "E002",
            ShortenerError::DatabaseOperation(_) => "E003",
            ShortenerError::DuplicateMapping(_) => "E004",
            ShortenerError::CodeSpaceExhausted(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::DatabaseConfig(_) => "Database Configuration Error",
            ShortenerError::DatabaseConnection(_) => "Database Connection Error",
            ShortenerError::DatabaseOperation(_) => "Database Operation Error",
            ShortenerError::DuplicateMapping(_) => "Duplicate Mapping",
            ShortenerError::CodeSpaceExhausted(_) => "Short Code Retries Exhausted",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::DatabaseConfig(msg)
            | ShortenerError::DatabaseConnection(msg)
            | ShortenerError::DatabaseOperation(msg)
            | ShortenerError::DuplicateMapping(msg)
            | ShortenerError::CodeSpaceExhausted(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式的启动失败提示）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseOperation(msg.into())
    }

    pub fn duplicate_mapping<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DuplicateMapping(msg.into())
    }

    pub fn code_space_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortenerError::CodeSpaceExhausted(msg.into())
    }
}

impl From<sea_orm::DbErr> for ShortenerError {
    fn from(err: sea_orm::DbErr) -> Self {
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return ShortenerError::DuplicateMapping(detail);
        }
        ShortenerError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            ShortenerError::database_config(""),
            ShortenerError::database_connection(""),
            ShortenerError::database_operation(""),
            ShortenerError::duplicate_mapping(""),
            ShortenerError::code_space_exhausted(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = ShortenerError::database_operation("query failed");
        assert_eq!(err.to_string(), "Database Operation Error: query failed");
        assert_eq!(err.message(), "query failed");
    }

    #[test]
    fn test_from_plain_db_error() {
        let err: ShortenerError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, ShortenerError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }
}
