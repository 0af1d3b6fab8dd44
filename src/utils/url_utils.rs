// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 从资源 URL 中提取末段 ID
///
/// Eventbrite 的 `api_url` 形如 `https://.../v3/orders/123456789/`，
/// 取查询串之前的最后一个非空路径段作为资源 ID。
pub fn extract_id_from_url(url: Option<&str>) -> Option<String> {
    let url = url?;
    let sanitized = url.split('?').next().unwrap_or(url);
    sanitized
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}

/// 确保 URL 以斜杠结尾，便于拼接子资源路径
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
