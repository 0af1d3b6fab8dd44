// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::repositories::order_repository::RepositoryError;
use crate::utils::signature::SignatureError;

/// Webhook 处理错误
///
/// 只有调用方错误和持久化失败会映射为非 2xx 状态；上游补充查询的
/// 失败在更早的层被降级，不会到达这里。
#[derive(Debug, Error)]
pub enum WebhookError {
    /// 请求体缺失
    #[error("Eventbrite webhook missing body.")]
    MissingBody,
    /// 载荷不是可解析的 JSON 对象
    #[error("Invalid Eventbrite payload.")]
    InvalidPayload,
    /// 已配置密钥但请求未携带签名头
    #[error("Eventbrite signature header is missing.")]
    MissingSignature,
    /// 签名头不是 sha256=<hex> 形式
    #[error("Eventbrite signature header is malformed.")]
    InvalidSignatureFormat,
    /// 签名校验失败
    #[error("Eventbrite signature does not match.")]
    SignatureMismatch,
    /// 持久化失败，返回 500 让 Eventbrite 重投
    #[error("Unable to store webhook data.")]
    Persistence(#[from] RepositoryError),
}

impl From<SignatureError> for WebhookError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::Missing => WebhookError::MissingSignature,
            SignatureError::InvalidFormat => WebhookError::InvalidSignatureFormat,
            SignatureError::Mismatch => WebhookError::SignatureMismatch,
        }
    }
}

impl WebhookError {
    fn status(&self) -> StatusCode {
        match self {
            WebhookError::MissingBody | WebhookError::InvalidPayload => StatusCode::BAD_REQUEST,
            WebhookError::MissingSignature
            | WebhookError::InvalidSignatureFormat
            | WebhookError::SignatureMismatch => StatusCode::UNAUTHORIZED,
            WebhookError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WebhookError::MissingBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebhookError::InvalidPayload.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::SignatureMismatch.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            WebhookError::Persistence(RepositoryError::NotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_signature_error_mapping() {
        assert!(matches!(
            WebhookError::from(SignatureError::Missing),
            WebhookError::MissingSignature
        ));
        assert!(matches!(
            WebhookError::from(SignatureError::InvalidFormat),
            WebhookError::InvalidSignatureFormat
        ));
        assert!(matches!(
            WebhookError::from(SignatureError::Mismatch),
            WebhookError::SignatureMismatch
        ));
    }
}
