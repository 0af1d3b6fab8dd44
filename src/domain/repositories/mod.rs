// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 活动条目仓库（crawl_repository）：管理活动条目的持久化
/// - 订单仓库（order_repository）：管理票务订单的持久化
/// - 存储仓库（storage_repository）：管理镜像图片等对象的存储
pub mod crawl_repository;
pub mod order_repository;
pub mod storage_repository;
