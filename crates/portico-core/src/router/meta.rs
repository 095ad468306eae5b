use std::fmt;

use serde::{Deserialize, Serialize};

/// Decorative marker shown next to a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Dot,
    Normal,
}

impl fmt::Display for BadgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeType::Dot => write!(f, "dot"),
            BadgeType::Normal => write!(f, "normal"),
        }
    }
}

/// Display metadata attached to a route node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteMeta {
    /// Icon identifier, e.g. `mdi:github`
    pub icon: Option<String>,
    /// Translation key or literal display title
    pub title: Option<String>,
    /// Menu placement weight, ascending
    pub order: Option<i32>,
    /// Rendered state survives navigating away and back
    pub keep_alive: bool,
    /// Pin as a permanently open tab
    pub affix_tab: bool,
    pub affix_tab_order: Option<i32>,
    pub badge_type: Option<BadgeType>,
    /// External URL rendered by the embedded view
    pub link: Option<String>,
    pub hide_in_menu: bool,
}

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Pin the node as a tab at position `order`
    pub fn affix_tab(mut self, order: i32) -> Self {
        self.affix_tab = true;
        self.affix_tab_order = Some(order);
        self
    }

    pub fn badge(mut self, badge: BadgeType) -> Self {
        self.badge_type = Some(badge);
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn hide_in_menu(mut self, hide: bool) -> Self {
        self.hide_in_menu = hide;
        self
    }
}
