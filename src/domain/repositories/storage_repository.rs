// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 其他存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 存储仓库特质
///
/// 定义对象存储的抽象接口。同键写入覆盖已有对象。
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 以指定内容类型保存对象，覆盖同键已有对象
    async fn save(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;
    /// 读取对象内容，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    /// 返回对象的公开访问 URL
    fn public_url(&self, key: &str) -> String;
}
