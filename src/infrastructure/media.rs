// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::repositories::storage_repository::StorageRepository;
use reqwest::Client;
use tracing::error;

/// 根据 Content-Type 推断文件扩展名，未知类型回退为 jpg
pub fn extension_for(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "jpg",
    }
}

/// 将活动图片镜像到对象存储
///
/// 下载原图并以 `events/<slug>.<ext>` 为键覆盖写入，返回公开访问
/// 地址。下载或写入失败只记录日志并返回 None，活动记录照常落库，
/// 仅缺少图片列。
pub async fn mirror_crawl_image<S: StorageRepository>(
    client: &Client,
    storage: &S,
    source_url: &str,
    slug: &str,
) -> Option<String> {
    let response = match client.get(source_url).send().await {
        Ok(resp) => match resp.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                error!("Image download returned an error status: {}", e);
                return None;
            }
        },
        Err(e) => {
            error!("Unable to download event image: {}", e);
            return None;
        }
    };

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_string();

    let data = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Unable to read event image body: {}", e);
            return None;
        }
    };

    let key = format!("events/{}.{}", slug, extension_for(&content_type));
    if let Err(e) = storage.save(&key, &data, &content_type).await {
        error!("Unable to store mirrored event image: {}", e);
        return None;
    }

    Some(storage.public_url(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_known_types() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/webp"), "webp");
        assert_eq!(extension_for("image/gif"), "gif");
        assert_eq!(extension_for("image/jpeg"), "jpg");
    }

    #[test]
    fn test_extension_for_with_parameters() {
        assert_eq!(extension_for("image/png; charset=binary"), "png");
        assert_eq!(extension_for("IMAGE/GIF"), "gif");
    }

    #[test]
    fn test_extension_for_unknown_defaults_to_jpg() {
        assert_eq!(extension_for("application/octet-stream"), "jpg");
        assert_eq!(extension_for(""), "jpg");
    }
}
