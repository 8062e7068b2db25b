//! 客户字段的取值约定

/// 激活状态的显示文本（真）
pub const ACTIVE_TRUE: &str = "True";
/// 激活状态的显示文本（假）
pub const ACTIVE_FALSE: &str = "False";

/// 激活选择器的循环顺序，空串表示“未选择”
pub const ACTIVE_OPTIONS: [&str; 3] = ["", ACTIVE_TRUE, ACTIVE_FALSE];

/// 性别选择器的循环顺序，取自服务端的枚举
pub const GENDER_OPTIONS: [&str; 4] = ["", "MALE", "FEMALE", "UNKNOWN"];

/// 布尔值 → 显示文本
pub fn active_literal(active: bool) -> &'static str {
    if active { ACTIVE_TRUE } else { ACTIVE_FALSE }
}

/// 显示文本 → 布尔值
///
/// 只有精确等于 `"True"` 才为真。
pub fn parse_active_literal(text: &str) -> bool {
    text == ACTIVE_TRUE
}
