//! Dropdown menu primitives.
//!
//! The open/closed state lives inside `DropdownMenu`; consumers only supply
//! the trigger content and the items. Selecting an item (or clicking
//! anywhere outside the menu) closes it before the item's handler runs.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
struct DropdownMenuContext {
    open: Signal<bool>,
}

impl DropdownMenuContext {
    fn close(&self) {
        let mut open = self.open;
        open.set(false);
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DropdownMenuProps {
    /// Content of the trigger button (usually an icon).
    pub trigger: Element,
    pub children: Element,
}

#[component]
pub fn DropdownMenu(props: DropdownMenuProps) -> Element {
    let mut open = use_signal(|| false);
    use_context_provider(|| DropdownMenuContext { open });

    rsx! {
        div { class: "relative",
            button {
                class: "flex h-8 w-8 items-center justify-center rounded-md border border-[#3f4147] text-gray-300 transition-colors hover:bg-[#3f4147]",
                onclick: move |_| {
                    let was_open = *open.read();
                    open.set(!was_open);
                },
                {props.trigger}
            }
            if *open.read() {
                // Backdrop so a click anywhere else closes the menu
                div {
                    class: "fixed inset-0 z-40",
                    onclick: move |_| open.set(false),
                }
                div { class: "absolute right-0 z-50 mt-1 w-44 rounded-lg border border-[#3f4147] bg-[#313338] py-1 shadow-2xl",
                    {props.children}
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DropdownMenuItemProps {
    /// Destructive items get the red treatment.
    #[props(optional)]
    pub destructive: Option<bool>,
    #[props(optional)]
    pub onselect: Option<EventHandler<()>>,
    pub children: Element,
}

#[component]
pub fn DropdownMenuItem(props: DropdownMenuItemProps) -> Element {
    let menu = use_context::<DropdownMenuContext>();
    let destructive = props.destructive.unwrap_or(false);

    let tone = if destructive {
        "text-red-400 hover:bg-red-500/10 hover:text-red-400"
    } else {
        "text-gray-200 hover:bg-[#3f4147] hover:text-white"
    };

    rsx! {
        button {
            class: "flex w-full cursor-pointer items-center px-3 py-2 text-left text-sm transition-colors {tone}",
            onclick: move |_| {
                menu.close();
                if let Some(handler) = &props.onselect {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[component]
pub fn DropdownMenuSeparator() -> Element {
    rsx! {
        div { class: "my-1 border-t border-[#3f4147]" }
    }
}
