use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsultaError {
    #[error("Error de red: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Respuesta inválida")]
    InvalidResponse,

    /// 遠端回傳的錯誤訊息（`error` 欄位或 `HTTP {status}`）
    #[error("{message}")]
    Remote { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConsultaError {
    pub fn remote_status(status: u16) -> Self {
        Self::Remote {
            message: format!("HTTP {}", status),
        }
    }
}

/// 表單欄位驗證錯誤，Display 即為顯示給使用者的訊息
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Ingresa un correo válido.")]
    InvalidCorreo,

    #[error("Ingresa el número de planilla.")]
    MissingPlanilla,
}

pub type Result<T> = std::result::Result<T, ConsultaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ConsultaError::InvalidResponse.to_string(), "Respuesta inválida");
        assert_eq!(ConsultaError::remote_status(502).to_string(), "HTTP 502");
        assert_eq!(
            ConsultaError::Remote {
                message: "not found".to_string()
            }
            .to_string(),
            "not found"
        );
        assert_eq!(FieldError::InvalidCorreo.to_string(), "Ingresa un correo válido.");
        assert_eq!(
            FieldError::MissingPlanilla.to_string(),
            "Ingresa el número de planilla."
        );
    }

    #[test]
    fn test_invalid_config_value_display() {
        let err = ConsultaError::InvalidConfigValueError {
            field: "query.endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'ftp://x' for 'query.endpoint': Unsupported URL scheme: ftp"
        );
    }
}
