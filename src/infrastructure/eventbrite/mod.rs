// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Eventbrite API 客户端模块
///
/// 对上游 API 的补充查询全部是尽力而为：凭据缺失、网络失败或
/// 响应形状异常都只记录日志并返回 None，绝不把上游故障透传给
/// webhook 调用方。
pub mod client;

pub use client::EventbriteClient;
