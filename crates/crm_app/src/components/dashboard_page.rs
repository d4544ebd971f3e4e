use crm_ui::{
    Cluster, Elevation, Grid, Heading, Icon, IconSize, LayoutGap, Notice, Stack, Text, TextRole,
    TextTone,
};
use leptos::*;

use crate::model::{KpiRecord, KPI_RECORDS};

use super::ContentCard;

#[component]
/// KPI overview. Stateless; renders the mock records.
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg ui_slot="dashboard-page">
            <header data-ui-slot="page-header">
                <Heading>"Dashboard"</Heading>
                <Text tone=TextTone::Secondary>
                    "Welcome back! Here's an overview of your CRM metrics."
                </Text>
            </header>
            <Grid columns=3 gap=LayoutGap::Lg ui_slot="kpi-grid">
                {KPI_RECORDS
                    .into_iter()
                    .map(|kpi| view! { <KpiTile kpi /> })
                    .collect_view()}
            </Grid>
            <Notice tone=TextTone::Info>
                <Text tone=TextTone::Info>
                    <strong>"Note:"</strong>
                    " This is a UI-only demo with mock data. No backend integration is implemented yet."
                </Text>
            </Notice>
        </Stack>
    }
}

#[component]
fn KpiTile(kpi: KpiRecord) -> impl IntoView {
    view! {
        <ContentCard elevation=Elevation::Raised ui_slot="kpi-tile">
            <Cluster gap=LayoutGap::Md>
                <span data-ui-slot="kpi-icon" data-ui-color=kpi.color.token()>
                    <Text tone=kpi.color.tone()>
                        <Icon icon=kpi.icon.icon_name() size=IconSize::Lg />
                    </Text>
                </span>
                <Stack gap=LayoutGap::Sm>
                    <Text tone=TextTone::Secondary>{kpi.title}</Text>
                    <Text role=TextRole::Metric strong=true>{kpi.value}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{kpi.subtitle}</Text>
                </Stack>
            </Cluster>
        </ContentCard>
    }
}
