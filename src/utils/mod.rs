// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 货币金额格式化
pub mod money;
/// Webhook 签名校验
pub mod signature;
/// Slug 生成
pub mod slug;
/// 日志初始化
pub mod telemetry;
/// URL 工具函数
pub mod url_utils;
