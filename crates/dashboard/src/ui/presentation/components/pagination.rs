//! Page navigation for the dashboard table

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    /// Page numbers to show as buttons
    pub window: Vec<usize>,
    pub on_select: EventHandler<usize>,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    if props.total_pages <= 1 {
        return rsx! {};
    }

    let at_first = props.current_page <= 1;
    let at_last = props.current_page >= props.total_pages;

    rsx! {
        nav {
            class: "flex items-center justify-center gap-1 mt-4",

            button {
                class: "px-3 py-1 rounded border disabled:opacity-40",
                disabled: at_first,
                onclick: move |_| props.on_previous.call(()),
                "Previous"
            }

            for page in props.window.iter().copied() {
                button {
                    key: "{page}",
                    class: if page == props.current_page {
                        "px-3 py-1 rounded border bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded border hover:bg-gray-100"
                    },
                    onclick: move |_| props.on_select.call(page),
                    "{page}"
                }
            }

            button {
                class: "px-3 py-1 rounded border disabled:opacity-40",
                disabled: at_last,
                onclick: move |_| props.on_next.call(()),
                "Next"
            }
        }
    }
}
