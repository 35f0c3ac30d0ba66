use super::icon;
use crate::App;
use crate::styles::*;
use dominator::{Dom, html};
use futures_signals::signal_vec::SignalVecExt;
use std::rc::Rc;
use taskboard_core::Notification;

pub fn render(app: &Rc<App>) -> Dom {
    html!("div", {
        .class(["notifications", NOTIFICATION_STACK.as_str()])
        .children_signal_vec(app.notifications().signal_vec().map(notification))
    })
}

fn notification(notification: Notification) -> Dom {
    let kind = notification.kind.class();

    html!("div", {
        .class(["notification", kind, NOTIFICATION.as_str()])
        .style("background", notification_color(kind))
        // Toggled in place so the slide transition runs
        .class_signal(["show", NOTIFICATION_SHOWN.as_str()], notification.shown_signal())
        .children(&mut [
            icon("fas", &format!("fa-{}", notification.kind.icon())),
            html!("span", { .text(&notification.message) }),
        ])
    })
}
