pub mod fields;
pub mod modal;
pub mod notifications;
pub mod profile;
pub mod shell;
pub mod stats;
pub mod tasks;

use dominator::{Dom, html};

/// Font Awesome icon, e.g. `icon("fas", "fa-plus")`
pub fn icon(style: &str, name: &str) -> Dom {
    html!("i", {
        .class([style, name])
    })
}
