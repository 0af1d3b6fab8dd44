// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 该模块实现具体的业务操作和流程：
/// - 订单入库（ingest_order）：派生并持久化票务订单
/// - 活动发布（publish_crawl）：派生并持久化活动条目
pub mod ingest_order;
pub mod publish_crawl;

/// 按顺序取第一个非空候选值
///
/// 字段来源的优先级链显式写成有序数组，最富信息的来源在前：
/// 档案嵌套字段 → 扁平字段 → 载荷字段 → URL 派生值。
pub fn coalesce<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesce_prefers_first_present() {
        assert_eq!(coalesce([None, Some(2), Some(3)]), Some(2));
        assert_eq!(coalesce([Some(1), Some(2)]), Some(1));
        assert_eq!(coalesce::<i32, 2>([None, None]), None);
    }
}
