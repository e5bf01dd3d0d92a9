//! 页码栏渲染
//!
//! 将快照渲染为一行页码导航，例如 `‹ 1 2 … 9 [10] 11 … 19 20 ›`。

use colored::*;

use crate::core::pagination::{Page, Snapshot};

const ELLIPSIS: &str = "…";
const PAST_ARROW: &str = "‹";
const FUTURE_ARROW: &str = "›";

/// 页码在栏中的角色，决定显示颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Margin,
    Neighbor,
    Current,
    Ellipsis,
    Arrow { enabled: bool },
}

fn paint(text: &str, role: Role, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    match role {
        Role::Margin => text.bright_white().to_string(),
        Role::Neighbor => text.white().to_string(),
        Role::Current => {
            text.on_bright_cyan().black().bold().to_string()
        }
        Role::Ellipsis => text.bright_black().to_string(),
        Role::Arrow { enabled: true } => text.bright_green().to_string(),
        Role::Arrow { enabled: false } => {
            text.bright_black().to_string()
        }
    }
}

/// 渲染页码栏
pub fn render_page_bar(snapshot: &Snapshot, use_color: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut push = |text: &str, role: Role| {
        parts.push(paint(text, role, use_color));
    };
    let numbers = |pages: &[Page]| -> Vec<String> {
        pages.iter().map(|p| p.number.to_string()).collect()
    };

    push(
        PAST_ARROW,
        Role::Arrow {
            enabled: snapshot.has_past_page,
        },
    );

    if snapshot.page_count == 0 {
        push(ELLIPSIS, Role::Ellipsis);
    } else {
        for number in numbers(&snapshot.before_start_margin_pages) {
            push(&number, Role::Margin);
        }
        if snapshot.has_more_past_pages {
            push(ELLIPSIS, Role::Ellipsis);
        }
        for number in numbers(&snapshot.before_current_page_pages) {
            push(&number, Role::Neighbor);
        }

        push(
            &format!("[{}]", snapshot.current_page_number),
            Role::Current,
        );

        for number in numbers(&snapshot.after_current_page_pages) {
            push(&number, Role::Neighbor);
        }
        if snapshot.has_more_future_pages {
            push(ELLIPSIS, Role::Ellipsis);
        }
        for number in numbers(&snapshot.after_end_margin_pages) {
            push(&number, Role::Margin);
        }
    }

    push(
        FUTURE_ARROW,
        Role::Arrow {
            enabled: snapshot.has_future_page,
        },
    );

    parts.join(" ")
}

/// 渲染状态行：当前页与条目区间
pub fn render_status(snapshot: &Snapshot) -> String {
    if snapshot.is_empty() {
        return format!(
            "没有条目 (每页 {} 条)",
            snapshot.items_per_page
        );
    }

    let mut status = format!(
        "第 {} 页 / 共 {} 页 | 条目 {}-{} / 共 {} 条 | 每页 {} 条",
        snapshot.current_page_number,
        snapshot.page_count,
        snapshot.item_start + 1,
        snapshot.item_end + 1,
        snapshot.item_count,
        snapshot.items_per_page,
    );
    if let Some(old) = snapshot.old_page_number {
        status.push_str(&format!(" | 上一次: 第 {old} 页"));
    }
    status
}
