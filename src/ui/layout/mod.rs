// src/ui/layout/mod.rs - Layout system components

use dioxus::prelude::*;

// Module declarations
mod sidebar;
mod topbar;

// Re-exports
pub use sidebar::Sidebar;
pub use topbar::Topbar;

/// The authenticated shell: fixed sidebar on desktop, drawer on mobile,
/// topbar with the brand selector, and the page content beside them.
#[component]
pub fn Layout(children: Element) -> Element {
    let mut sidebar_open = use_signal(|| false);

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Sidebar {
                open: sidebar_open(),
                on_close: move |_| sidebar_open.set(false),
            }
            div {
                class: "lg:pl-72",
                Topbar {
                    on_open_sidebar: move |_| sidebar_open.set(!sidebar_open()),
                }
                {children}
            }
        }
    }
}
