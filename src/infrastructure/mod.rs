// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供外部服务集成：
/// - 数据库（database）：sea-orm 连接与实体
/// - 仓库实现（repositories）：领域仓库接口的数据库实现
/// - Eventbrite 客户端（eventbrite）：上游 API 补充查询
/// - 对象存储（storage）：S3 / 本地 / 内存实现
/// - 图片镜像（media）：远端图片转存到对象存储
/// - 指标（metrics）：Prometheus 指标导出
pub mod database;
pub mod eventbrite;
pub mod media;
pub mod metrics;
pub mod repositories;
pub mod storage;
