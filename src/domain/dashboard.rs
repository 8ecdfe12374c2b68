//! Dashboard configuration consumed by the platform frontend.
//!
//! Static navigation entries, sample records for UI prototyping, and the
//! loading-skeleton helper. All of it is declarative; the frontend renders
//! these as provided.

use serde::{Deserialize, Serialize};

/// One entry of the sidebar navigation menu.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub disabled: bool,
}

/// Ordered sidebar menu. Order is part of the contract; renderers must not
/// sort it.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        href: "/dashboard",
        icon: "dashboard",
        label: None,
        disabled: false,
    },
    NavItem {
        title: "My Courses",
        href: "/dashboard/courses",
        icon: "book-open",
        label: None,
        disabled: false,
    },
    NavItem {
        title: "Take Test",
        href: "/dashboard/tests",
        icon: "clipboard-list",
        label: Some("test"),
        disabled: false,
    },
    NavItem {
        title: "Leaderboard",
        href: "/dashboard/leaderboard",
        icon: "trophy",
        label: None,
        disabled: false,
    },
    NavItem {
        title: "Materials",
        href: "/dashboard/materials",
        icon: "folder",
        label: None,
        disabled: false,
    },
    NavItem {
        title: "Updates",
        href: "/dashboard/updates",
        icon: "bell",
        label: Some("new"),
        disabled: false,
    },
    NavItem {
        title: "Profile",
        href: "/dashboard/profile",
        icon: "user",
        label: None,
        disabled: false,
    },
    NavItem {
        title: "Settings",
        href: "/dashboard/settings",
        icon: "settings",
        label: None,
        disabled: false,
    },
];

/// Ordered navigation entries for the sidebar renderer.
pub fn nav_items() -> &'static [NavItem] {
    NAV_ITEMS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Sample user row for table prototyping. Not real account data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub role: String,
    pub verified: bool,
    pub status: UserStatus,
}

/// Demo rows for the admin users table.
pub fn sample_users() -> Vec<UserRecord> {
    let rows: &[(&str, &str, &str, bool, UserStatus)] = &[
        ("Candice Schiner", "Dell", "Frontend Developer", false, UserStatus::Active),
        ("John Doe", "TechCorp", "Backend Developer", true, UserStatus::Active),
        ("Alice Johnson", "WebTech", "UI Designer", true, UserStatus::Active),
        ("David Smith", "Innovate Inc.", "Fullstack Developer", false, UserStatus::Inactive),
        ("Emma Wilson", "TechGuru", "Product Manager", true, UserStatus::Active),
        ("James Brown", "CodeGenius", "QA Engineer", false, UserStatus::Active),
        ("Laura White", "SoftWorks", "UX Designer", true, UserStatus::Active),
        ("Michael Lee", "DevCraft", "DevOps Engineer", false, UserStatus::Active),
        ("Olivia Green", "WebSolutions", "Frontend Developer", true, UserStatus::Active),
        ("Robert Taylor", "DataTech", "Data Analyst", false, UserStatus::Inactive),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, company, role, verified, status))| UserRecord {
            id: i as u32 + 1,
            name: (*name).to_string(),
            company: (*company).to_string(),
            role: (*role).to_string(),
            verified: *verified,
            status: *status,
        })
        .collect()
}

/// Summary card shown on the dashboard overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCard {
    pub date: String,
    pub total: u32,
    pub role: String,
    pub color: String,
}

/// Demo overview cards.
pub fn summary_cards() -> Vec<DashboardCard> {
    let rows: &[(&str, u32, &str, &str)] = &[
        ("Today", 36, "Tests taken", "bg-[#EC4D61] bg-opacity-40"),
        ("This week", 218, "Tests taken", "bg-[#F9D963] bg-opacity-40"),
        ("This month", 764, "Tests taken", "bg-[#6DD6B1] bg-opacity-40"),
        ("All time", 4_312, "Tests taken", "bg-[#5B93FF] bg-opacity-40"),
    ];
    rows.iter()
        .map(|(date, total, role, color)| DashboardCard {
            date: (*date).to_string(),
            total: *total,
            role: (*role).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

/// Default classes of the loading skeleton.
pub const SKELETON_CLASSES: &str = "animate-pulse rounded-md bg-gray-100";

/// Merge two space-separated class lists, keeping first-seen order and
/// dropping duplicates.
pub fn merge_classes(base: &str, extra: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in base.split_whitespace().chain(extra.split_whitespace()) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// Loading placeholder. Renders a pulsing rectangle the frontend shows while
/// real content loads; callers size it via extra classes or attributes.
#[derive(Debug, Default, Clone)]
pub struct Skeleton {
    class: Option<String>,
    attrs: Vec<(String, String)>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra classes merged with the defaults.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Arbitrary pass-through attribute. Emitted verbatim, insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Final class list: defaults merged with the caller override.
    pub fn class_names(&self) -> String {
        match &self.class {
            Some(extra) => merge_classes(SKELETON_CLASSES, extra),
            None => SKELETON_CLASSES.to_string(),
        }
    }

    /// Render the placeholder element.
    pub fn render(&self) -> String {
        let mut out = format!("<div class=\"{}\"", self.class_names());
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, value));
        }
        out.push_str("></div>");
        out
    }
}
