use super::*;
use system_ui::{DesktopIconButton, DesktopIconGrid, IconSize, ImageIcon};

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icons = runtime.state.with_untracked(|desktop| desktop.icons.clone());

    let activate = move |icon_id: String| {
        runtime.dispatch_action(DesktopAction::ActivateIcon { icon_id });
    };

    view! {
        <DesktopIconGrid>
            {icons
                .into_iter()
                .map(|icon| {
                    let on_dblclick = {
                        let icon_id = icon.id.clone();
                        Callback::new(move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            activate(icon_id.clone());
                        })
                    };
                    let on_touchend = {
                        let icon_id = icon.id.clone();
                        Callback::new(move |ev: web_sys::TouchEvent| {
                            ev.prevent_default();
                            activate(icon_id.clone());
                        })
                    };
                    view! {
                        <DesktopIconButton
                            title=icon.label.clone()
                            aria_label=icon.label.clone()
                            on_dblclick=on_dblclick
                            on_touchend=on_touchend
                        >
                            <ImageIcon src=icon.icon.clone() size=IconSize::Lg alt=icon.label.clone() />
                            <span data-ui-slot="label">{icon.label.clone()}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}
