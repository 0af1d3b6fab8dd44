// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// 签名校验错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignatureError {
    /// 缺少签名头
    #[error("Missing Eventbrite signature.")]
    Missing,
    /// 签名头格式无效
    #[error("Invalid Eventbrite signature format.")]
    InvalidFormat,
    /// 签名不匹配
    #[error("Eventbrite signature mismatch.")]
    Mismatch,
}

/// 校验 Eventbrite Webhook 签名
///
/// 对原始请求体字节计算 HMAC-SHA256 并与 `sha256=<hex>` 头做恒定时间
/// 比较。签名必须基于原始字节校验，重新序列化后的 JSON 不可用。
///
/// 未配置密钥时校验被显式禁用，直接放行。
pub fn verify_signature(
    raw_body: &[u8],
    signature_header: Option<&str>,
    secret: Option<&str>,
) -> Result<(), SignatureError> {
    let secret = match secret {
        Some(s) if !s.is_empty() => s,
        // Signature validation disabled until a secret is configured.
        _ => return Ok(()),
    };

    let header = signature_header.ok_or(SignatureError::Missing)?;

    let (scheme, signature) = header.split_once('=').ok_or(SignatureError::InvalidFormat)?;
    if scheme != "sha256" || signature.is_empty() {
        return Err(SignatureError::InvalidFormat);
    }

    let provided = hex::decode(signature).map_err(|_| SignatureError::InvalidFormat)?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(raw_body);

    // verify_slice is constant-time and rejects length differences.
    mac.verify_slice(&provided)
        .map_err(|_| SignatureError::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_no_secret_disables_verification() {
        assert_eq!(verify_signature(b"{}", None, None), Ok(()));
        assert_eq!(verify_signature(b"{}", Some("sha256=junk"), Some("")), Ok(()));
    }

    #[test]
    fn test_missing_header_rejected() {
        assert_eq!(
            verify_signature(b"{}", None, Some("secret")),
            Err(SignatureError::Missing)
        );
    }

    #[test]
    fn test_malformed_header_rejected() {
        let cases = ["sha256", "sha256=", "sha1=abcd", "sha256=not-hex"];
        for header in cases {
            assert_eq!(
                verify_signature(b"{}", Some(header), Some("secret")),
                Err(SignatureError::InvalidFormat),
                "header {header:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_mismatched_signature_rejected() {
        let header = format!("sha256={}", sign("other-secret", b"{\"a\":1}"));
        assert_eq!(
            verify_signature(b"{\"a\":1}", Some(header.as_str()), Some("secret")),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn test_truncated_signature_rejected() {
        let mut sig = sign("secret", b"{}");
        sig.truncate(32);
        let header = format!("sha256={sig}");
        assert_eq!(
            verify_signature(b"{}", Some(header.as_str()), Some("secret")),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn test_valid_signature_accepted() {
        let body = br#"{"action":"order.placed"}"#;
        let header = format!("sha256={}", sign("secret", body));
        assert_eq!(
            verify_signature(body, Some(header.as_str()), Some("secret")),
            Ok(())
        );
    }
}
