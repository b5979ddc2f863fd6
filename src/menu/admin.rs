use once_cell::sync::Lazy;

use super::MenuNode;

/// Navigation tree for administrator-tenant operators.
pub static MENU: Lazy<Vec<MenuNode>> = Lazy::new(|| {
    vec![
        MenuNode::item("Dashboard", "/dashboard", None),
        MenuNode::header("Operations"),
        MenuNode::item("Member Management", "/member-management", Some("member")),
        MenuNode::item("Role Management", "/role-management", Some("role")),
        MenuNode::item("Merchant Management", "/merchant-management", Some("merchant")),
        MenuNode::header("Finance"),
        MenuNode::item("Bank Management", "/bank-management", Some("bank")),
        MenuNode::group(
            "Settlement",
            vec![
                MenuNode::sub("Daily Settlement", "/settlement/daily", "settlement"),
                MenuNode::sub("Monthly Settlement", "/settlement/monthly", "settlement"),
            ],
        ),
        MenuNode::item("Reports", "/reports", Some("report")),
        MenuNode::header("Content"),
        MenuNode::item("Content Management", "/content-management", Some("content")),
        MenuNode::item("Announcements", "/announcements", Some("announcement")),
    ]
});
