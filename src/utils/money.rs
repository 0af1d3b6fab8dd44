// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

/// 将 Eventbrite 的最小货币单位金额格式化为两位小数字符串
///
/// Eventbrite 以最小货币单位（如美分）返回金额。`12345` 格式化为
/// `"123.45"`；空值或非数字输入返回 `None`，绝不报错。
pub fn format_minor_units(value: Option<&Value>) -> Option<String> {
    let amount = value?.as_f64()?;
    Some(format!("{:.2}", amount / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_formats_minor_units_as_two_decimals() {
        assert_eq!(
            format_minor_units(Some(&json!(12345))),
            Some("123.45".to_string())
        );
    }

    #[test]
    fn test_small_amounts_keep_leading_zero() {
        assert_eq!(format_minor_units(Some(&json!(5))), Some("0.05".to_string()));
        assert_eq!(format_minor_units(Some(&json!(0))), Some("0.00".to_string()));
    }

    #[test]
    fn test_refund_amounts_stay_negative() {
        assert_eq!(
            format_minor_units(Some(&json!(-2500))),
            Some("-25.00".to_string())
        );
    }

    #[test]
    fn test_null_and_non_numeric_yield_none() {
        assert_eq!(format_minor_units(None), None);
        assert_eq!(format_minor_units(Some(&Value::Null)), None);
        assert_eq!(format_minor_units(Some(&json!("12345"))), None);
        assert_eq!(format_minor_units(Some(&json!({"value": 1}))), None);
    }
}
