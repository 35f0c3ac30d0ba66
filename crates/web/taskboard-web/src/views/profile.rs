use super::icon;
use crate::App;
use crate::styles::*;
use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use std::rc::Rc;
use taskboard_core::ProfileView;

pub fn render(app: &Rc<App>) -> Dom {
    html!("div", {
        .attr("id", "profile-info")
        .class(&*CARD)
        .child_signal(app.profile_signal().map(|profile| {
            Some(match profile {
                Some(profile) => details(profile),
                None => html!("p", {
                    .class(&*MUTED)
                    .text("Loading profile...")
                }),
            })
        }))
    })
}

fn details(profile: ProfileView) -> Dom {
    let member_since = profile.member_since.unwrap_or_else(|| "Unknown".to_string());

    html!("div", {
        .class("profile-info")
        .children(&mut [
            item("fa-user", "Username", &profile.username),
            item("fa-envelope", "Email", &profile.email),
            item("fa-calendar", "Member Since", &member_since),
        ])
    })
}

fn item(icon_name: &str, label: &str, value: &str) -> Dom {
    html!("div", {
        .class(["info-item", PROFILE_ITEM.as_str()])
        .children(&mut [
            icon("fas", icon_name),
            html!("strong", { .text(label) }),
            html!("span", { .text(value) }),
        ])
    })
}
