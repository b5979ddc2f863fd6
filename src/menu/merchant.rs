use once_cell::sync::Lazy;

use super::MenuNode;

/// Navigation tree for merchant-tenant operators.
pub static MENU: Lazy<Vec<MenuNode>> = Lazy::new(|| {
    vec![
        MenuNode::item("Dashboard", "/dashboard", None),
        MenuNode::header("Store"),
        MenuNode::item("Members", "/members", Some("member")),
        MenuNode::item("Content", "/content", Some("content")),
        MenuNode::header("Finance"),
        MenuNode::group(
            "Settlement",
            vec![
                MenuNode::sub("Daily Settlement", "/settlement/daily", "settlement"),
                MenuNode::sub("Monthly Settlement", "/settlement/monthly", "settlement"),
            ],
        ),
        MenuNode::item("Reports", "/reports", Some("report")),
    ]
});
