//! Chevron used by the header navigation buttons.

use dioxus::prelude::*;

/// Left-pointing chevron; the right button rotates it via CSS.
#[component]
pub fn ArrowIcon() -> Element {
    rsx! {
        svg {
            width: "8",
            height: "12",
            view_box: "0 0 8 12",
            path { d: "M7.4 1.4 6 0 0 6l6 6 1.4-1.4L2.8 6z" }
        }
    }
}
