//! Human-readable dump of a subtree, for debugging and test failure output.

use std::fmt::Display;

use crate::forest::Forest;

/// Renders `children` as branches below a line, indenting nested output with
/// `tab`. Absent children are skipped; the last present one gets `└─`.
fn print_children<C, F>(tab: &str, children: &[Option<C>], mut render: F) -> String
where
    F: FnMut(&str, &C) -> String,
{
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };
        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let line = render(&child_tab, child);
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─" } else { "├─" });
        out.push(' ');
        out.push_str(&line);
    }
    out
}

fn print_node<T: Display>(forest: &Forest<T>, idx: u32, tab: &str) -> String {
    let node = forest.get(idx);
    let mut out = format!("BNode {}", node.value);
    let children = [node.l.map(|l| (l, "←")), node.r.map(|r| (r, "→"))];
    out.push_str(&print_children(tab, &children, |child_tab, (c, arrow)| {
        format!("{arrow} {}", print_node(forest, *c, child_tab))
    }));
    out
}

/// Multi-line rendering of the subtree under `root`; `∅` for an empty one.
///
/// Recurses once per level, so it is meant for trees of moderate height.
pub fn print_subtree<T: Display>(forest: &Forest<T>, root: Option<u32>, tab: &str) -> String {
    match root {
        Some(idx) => print_node(forest, idx, tab),
        None => "∅".to_string(),
    }
}
