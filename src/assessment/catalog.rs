//! Fixed question catalog
//!
//! The questions describe a child's everyday behavior. Option positions map
//! to categories identically across all questions (see `Category::from_position`).

use crate::assessment::types::{Question, OPTIONS_PER_QUESTION};

const QUESTION_TABLE: [(u32, &str, [&str; OPTIONS_PER_QUESTION]); 5] = [
    (
        1,
        "遇到新事物时，孩子更常见的反应是：",
        ["立刻尝试", "先观察思考", "邀请伙伴一起", "查看规则再做"],
    ),
    (
        2,
        "课余时间更偏好：",
        ["户外探索", "安静阅读/拼图", "与同伴活动", "完成清单任务"],
    ),
    (
        3,
        "遇到挑战时更依赖：",
        ["直觉与实践", "分析与计划", "求助与协作", "自律与坚持"],
    ),
    (
        4,
        "最能激励TA的是：",
        ["新奇与冒险", "问题被解决", "伙伴的认可", "数据化进步"],
    ),
    (
        5,
        "在运动上更喜欢：",
        ["攀岩/球类", "瑜伽/慢跑", "足球/接力", "跳绳/游泳计时"],
    ),
];

/// The ordered question list
pub fn questions() -> Vec<Question> {
    QUESTION_TABLE
        .iter()
        .map(|(id, title, options)| Question {
            id: *id,
            title: title.to_string(),
            options: (*options).map(|o| o.to_string()),
        })
        .collect()
}
