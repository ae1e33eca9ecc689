use std::time::Duration;

use super::*;
use platform_host::ClockTime;
use system_ui::{
    Button, IconSize, ImageIcon, Taskbar, TaskbarButton, TaskbarSection, TrayClock, TrayList,
};

use crate::taskbar::taskbar_items;

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let items = create_memo(move |_| runtime.state.with(|desktop| taskbar_items(&desktop.windows)));

    let clock_label = create_rw_signal(ClockTime::now().format_12h());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_label.set(ClockTime::now().format_12h()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <Button
                    ui_slot="start-button"
                    aria_label="Start"
                    on_click=Callback::new(move |_: web_sys::MouseEvent| {
                        logging::log!("start menu clicked");
                    })
                >
                    <ImageIcon src="/images/icons/windows.png" size=IconSize::Sm alt="Start" />
                    <span>"Start"</span>
                </Button>
            </TaskbarSection>
            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For each=move || items.get() key=|item| (item.id.clone(), item.is_active) let:item>
                    {
                        let window_id = item.id.clone();
                        view! {
                            <TaskbarButton
                                aria_label=item.title.clone()
                                title=item.title.clone()
                                pressed=item.is_active
                                on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarItem {
                                        window_id: window_id.clone(),
                                    });
                                })
                            >
                                <ImageIcon src=item.icon.clone() size=IconSize::Sm />
                                <span>{item.title.clone()}</span>
                            </TaskbarButton>
                        }
                    }
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray">
                <TrayList>
                    <ImageIcon src="/images/icons/network.png" size=IconSize::Sm alt="Network" />
                    <TrayClock label=Signal::derive(move || clock_label.get()) />
                </TrayList>
            </TaskbarSection>
        </Taskbar>
    }
}
