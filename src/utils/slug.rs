// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// 根据名称和可选的本地开始时间生成 Slug
///
/// 名称转小写后剔除字母、数字、下划线、空白和连字符以外的字符，空白
/// 折叠为单个连字符，连续连字符合并，并去掉首尾连字符。可解析的开始
/// 日期追加 `-MM-DD-YY` 后缀；无法解析的日期仅记录日志并省略后缀。
///
/// 不做唯一性检查，冲突由下游的唯一键 upsert 解决。
pub fn slugify(name: &str, start_local: Option<&str>) -> String {
    let lowered = name.to_lowercase();
    let stripped = INVALID_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    let base = collapsed.trim_matches('-').to_string();

    let date = match start_local {
        Some(raw) => {
            let parsed = parse_local_date(raw);
            if parsed.is_none() {
                warn!("Unparseable event start date {:?}, omitting slug date suffix", raw);
            }
            parsed
        }
        None => None,
    };

    match date {
        Some(date) => format!("{}-{}", base, date.format("%m-%d-%y")),
        None => base,
    }
}

/// 解析 Eventbrite 的本地时间字符串
///
/// 接受 `YYYY-MM-DDTHH:MM:SS`、纯日期以及 RFC 3339 三种写法。
fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}
