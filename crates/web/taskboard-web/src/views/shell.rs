//! Page frame: sidebar navigation, header and the four sections.

use super::{fields, icon, modal, notifications, profile, stats, tasks};
use crate::App;
use crate::styles::*;
use dominator::{Dom, EventOptions, clone, events, html, text};
use futures_signals::signal::SignalExt;
use std::rc::Rc;
use taskboard_core::Section;

pub fn render(app: &Rc<App>) -> Dom {
    html!("div", {
        .class(&*APP)
        .children(&mut [
            sidebar(app),
            html!("main", {
                .class(&*MAIN)
                .children(&mut [
                    header(app),
                    section(app, Section::Tasks, tasks::render(app)),
                    section(app, Section::New, fields::new_task_form(app)),
                    section(app, Section::Profile, profile::render(app)),
                    section(app, Section::Stats, stats::render(app)),
                ])
            }),
            modal::render(app),
            notifications::render(app),
        ])
    })
}

fn sidebar(app: &Rc<App>) -> Dom {
    html!("aside", {
        .class(["sidebar", SIDEBAR.as_str()])
        .child(html!("div", {
            .class(&*BRAND)
            .children(&mut [
                icon("fas", "fa-check-double"),
                text(" TaskBoard"),
            ])
        }))
        .child(html!("nav", {
            .class("sidebar-nav")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("gap", "4px")
            .children(Section::ALL.into_iter().map(|section| nav_link(app, section)))
        }))
    })
}

fn nav_link(app: &Rc<App>, section: Section) -> Dom {
    html!("a", {
        .attr("id", &format!("nav-{}", section.id()))
        .attr("href", "#")
        .class(&*NAV_LINK)
        .class_signal(&*NAV_ACTIVE, app.section_signal().map(move |active| active == section))
        .children(&mut [
            icon("fas", section.nav_icon()),
            html!("span", { .text(section.nav_label()) }),
        ])
        .event_with_options(&EventOptions::preventable(), clone!(app => move |e: events::Click| {
            e.prevent_default();
            app.show_section(section);
        }))
    })
}

fn header(app: &Rc<App>) -> Dom {
    html!("header", {
        .class(&*HEADER)
        .child(html!("h1", {
            .attr("id", "page-title")
            .style("margin", "0")
            .text_signal(app.section_signal().map(Section::title))
        }))
        .child(html!("div", {
            .class(&*HEADER_ACTIONS)
            .children(&mut [
                html!("button", {
                    .attr("id", "new-task-btn")
                    .attr("type", "button")
                    .class(&*BUTTON_PRIMARY)
                    .children(&mut [icon("fas", "fa-plus"), text(" New Task")])
                    .event(clone!(app => move |_: events::Click| {
                        app.show_section(Section::New);
                    }))
                }),
                html!("span", {
                    .attr("id", "username")
                    .style("font-weight", "600")
                    .text_signal(app.user_signal().map(|user| {
                        user.map(|user| user.username).unwrap_or_default()
                    }))
                }),
                html!("button", {
                    .attr("id", "logout-btn")
                    .attr("type", "button")
                    .class(&*BUTTON_SECONDARY)
                    .children(&mut [icon("fas", "fa-sign-out-alt"), text(" Logout")])
                    .event(clone!(app => move |_: events::Click| {
                        app.logout();
                    }))
                }),
            ])
        }))
    })
}

fn section(app: &Rc<App>, section: Section, content: Dom) -> Dom {
    html!("section", {
        .attr("id", &format!("{}-section", section.id()))
        .class("content-section")
        .visible_signal(app.section_signal().map(move |active| active == section))
        .child(content)
    })
}
