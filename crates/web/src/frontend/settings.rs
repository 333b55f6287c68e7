//! Settings dropdown component.

use std::rc::Rc;

use leptos::*;
use leptos_router::use_navigate;

use crate::frontend::click_bus::use_click_bus;
use crate::frontend::context::{BrowserLogout, SignalAuth, SignalMenuState, use_auth_context};
use crate::frontend::icons::FaIcon;
use crate::menu::MenuState;
use crate::settings::SettingsMenu;
use crate::view::{
    DROPDOWN_CLASS, EXTERNAL_REL, EXTERNAL_TARGET, EntryAction, HEADER_CLASS, ITEM_CLASS,
    MENU_CLASS, MenuEntry,
};

type BrowserSettingsMenu = SettingsMenu<SignalMenuState>;

/// Cog icon that opens the settings dropdown. Renders nothing while signed out.
#[component]
pub fn Settings() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();
    let open = create_rw_signal(MenuState::Closed);
    let anchor = create_node_ref::<html::A>();

    let navigator = move |path: &str| navigate(path, Default::default());
    let menu: Rc<BrowserSettingsMenu> = Rc::new(SettingsMenu::with_state(
        Rc::new(SignalAuth(auth.is_authenticated)),
        Rc::new(BrowserLogout::new(auth.store.clone(), Rc::clone(&auth.config))),
        Rc::new(navigator),
        Rc::clone(&auth.config),
        Rc::new(SignalMenuState(open)),
    ));

    let bus = use_click_bus();
    menu.mount(&bus, move |node: &web_sys::Node| {
        anchor
            .get_untracked()
            .is_some_and(|anchor| anchor.contains(Some(node)))
    });
    {
        let menu = Rc::clone(&menu);
        on_cleanup(move || menu.unmount());
    }

    move || {
        let menu = Rc::clone(&menu);
        menu.render().map(|settings| {
            let entries = settings.menu().map(<[MenuEntry]>::to_vec);
            let title = settings.title;

            view! {
                <div class=settings.container_class()>
                    <div class=DROPDOWN_CLASS>
                        <a role="button" node_ref=anchor>
                            <FaIcon icon=settings.trigger.clone() />
                        </a>
                        {entries.map(|entries| view! {
                            <ul class=MENU_CLASS>
                                <li class=HEADER_CLASS>{title}</li>
                                {entries
                                    .into_iter()
                                    .map(|entry| menu_item(entry, Rc::clone(&menu)))
                                    .collect_view()}
                            </ul>
                        })}
                    </div>
                </div>
            }
        })
    }
}

fn menu_item(entry: MenuEntry, menu: Rc<BrowserSettingsMenu>) -> View {
    let MenuEntry {
        label, icon, action, ..
    } = entry;

    match action {
        EntryAction::External { href } => view! {
            <li>
                <a role="button" class=ITEM_CLASS href=href target=EXTERNAL_TARGET rel=EXTERNAL_REL>
                    <FaIcon icon=icon />
                    " "
                    {label}
                </a>
            </li>
        }
        .into_view(),
        EntryAction::Logout => {
            let on_click = move |_: web_sys::MouseEvent| {
                let pending = menu.on_logout_selected();
                spawn_local(async move {
                    pending.finish().await;
                });
            };

            view! {
                <li>
                    <a role="button" class=ITEM_CLASS on:click=on_click>
                        <FaIcon icon=icon />
                        " "
                        {label}
                    </a>
                </li>
            }
            .into_view()
        }
    }
}
