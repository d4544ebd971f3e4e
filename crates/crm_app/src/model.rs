//! In-memory entities and the mock records the pages render.

use crm_ui::{ButtonColor, IconName, TextTone};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The signed-in user as shown in the app bar and on the profile page.
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Uploaded avatar image. `None` renders the default person glyph.
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Mock user used throughout the authenticated shell.
    pub fn mock() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: "Admin".to_string(),
            avatar_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Palette role a KPI tile is tinted with.
pub enum ColorToken {
    Primary,
    Success,
    Warning,
}

impl ColorToken {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// Text tone used for the tile icon.
    pub const fn tone(self) -> TextTone {
        match self {
            Self::Primary => TextTone::Accent,
            Self::Success => TextTone::Success,
            Self::Warning => TextTone::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon shown on a KPI tile.
pub enum KpiIcon {
    Customers,
    Leads,
    Deals,
}

impl KpiIcon {
    pub const fn icon_name(self) -> IconName {
        match self {
            Self::Customers => IconName::People,
            Self::Leads => IconName::TrendingUp,
            Self::Deals => IconName::Handshake,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One dashboard metric card.
pub struct KpiRecord {
    pub id: u32,
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub icon: KpiIcon,
    pub color: ColorToken,
}

/// Dashboard metrics in display order.
pub const KPI_RECORDS: [KpiRecord; 3] = [
    KpiRecord {
        id: 1,
        title: "Total Customers",
        value: "1,234",
        subtitle: "Active customers in the system",
        icon: KpiIcon::Customers,
        color: ColorToken::Primary,
    },
    KpiRecord {
        id: 2,
        title: "Total Leads",
        value: "567",
        subtitle: "Leads in the pipeline",
        icon: KpiIcon::Leads,
        color: ColorToken::Success,
    },
    KpiRecord {
        id: 3,
        title: "Total Deals",
        value: "89",
        subtitle: "Closed deals this month",
        icon: KpiIcon::Deals,
        color: ColorToken::Warning,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Read-only account facts listed under the profile form.
pub struct AccountStatus {
    pub status_label: &'static str,
    pub status_color: ButtonColor,
    pub member_since: &'static str,
    pub last_login: &'static str,
}

impl AccountStatus {
    pub const fn mock() -> Self {
        Self {
            status_label: "Active",
            status_color: ButtonColor::Success,
            member_since: "January 2024",
            last_login: "Today, 5:30 PM",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kpi_records_keep_display_order_and_unique_ids() {
        let ids: Vec<u32> = KPI_RECORDS.iter().map(|kpi| kpi.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let titles: Vec<&str> = KPI_RECORDS.iter().map(|kpi| kpi.title).collect();
        assert_eq!(titles, vec!["Total Customers", "Total Leads", "Total Deals"]);
    }

    #[test]
    fn kpi_tiles_use_distinct_colors_and_icons() {
        let colors: Vec<&str> = KPI_RECORDS.iter().map(|kpi| kpi.color.token()).collect();
        assert_eq!(colors, vec!["primary", "success", "warning"]);
        assert_eq!(KPI_RECORDS[2].icon.icon_name(), IconName::Handshake);
    }

    #[test]
    fn mock_user_has_no_uploaded_avatar() {
        let user = UserProfile::mock();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.avatar_url, None);
    }
}
