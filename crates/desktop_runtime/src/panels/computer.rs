use leptos::*;
use system_ui::{Button, FieldRow, InsetPanel, Tab, TabList};

const TABS: [&str; 4] = ["General", "Device Manager", "Hardware Profiles", "performance"];

#[component]
pub(super) fn ComputerPanel() -> impl IntoView {
    view! {
        <div class="panel-computer">
            <TabList aria_label="System properties">
                {TABS
                    .iter()
                    .enumerate()
                    .map(|(index, label)| view! { <Tab selected=(index == 0)>{*label}</Tab> })
                    .collect_view()}
            </TabList>
            <InsetPanel>
                <div class="panel-computer-summary">
                    <img src="/images/icons/pc.png" alt="" />
                    <div>
                        <strong>"System:"</strong>
                        <FieldRow label="User:">"Sajad Ali Zada"</FieldRow>
                        <FieldRow label="Location:">"Montreal, QC"</FieldRow>
                        <FieldRow label="Education:">"Concordia University, Computer Science"</FieldRow>
                        <FieldRow label="OS:">"Human_Interface_v2.0"</FieldRow>
                        <FieldRow label="Uptime:">"23 Years"</FieldRow>
                    </div>
                </div>
            </InsetPanel>
            <div class="panel-actions">
                <Button>"OK"</Button>
            </div>
        </div>
    }
}
