//! Edit modal. Mounted only while a task is open in the editor.

use super::{fields, icon};
use crate::styles::*;
use crate::{App, spawn_action};
use dominator::{Dom, EventOptions, clone, events, html};
use futures_signals::signal::SignalExt;
use std::rc::Rc;
use std::sync::Arc;
use taskboard_core::EditSession;

pub fn render(app: &Rc<App>) -> Dom {
    html!("div", {
        .attr("id", "taskModal")
        .child_signal(app.editor_signal().map(clone!(app => move |session| {
            session.map(|session| dialog(&app, session))
        })))
    })
}

fn dialog(app: &Rc<App>, session: Arc<EditSession>) -> Dom {
    html!("div", {
        .class(["modal", MODAL_BACKDROP.as_str()])
        // Clicks inside the dialog stop before reaching the backdrop
        .event(clone!(app => move |_: events::Click| {
            app.close_editor();
        }))
        .child(html!("div", {
            .class(["modal-content", MODAL.as_str()])
            .event(|e: events::Click| e.stop_propagation())
            .children(&mut [
                html!("div", {
                    .class(&*CARD_HEADER)
                    .children(&mut [
                        html!("h2", {
                            .style("margin", "0 0 16px")
                            .text("Edit Task")
                        }),
                        html!("button", {
                            .attr("type", "button")
                            .attr("title", "Close")
                            .class(["close", BUTTON_ICON.as_str()])
                            .child(icon("fas", "fa-times"))
                            .event(clone!(app => move |_: events::Click| {
                                app.close_editor();
                            }))
                        }),
                    ])
                }),
                html!("form", {
                    .attr("id", "editTaskForm")
                    .class(&*FORM)
                    .children(fields::fields(&session.form, "edit-"))
                    .child(html!("div", {
                        .class(["form-actions", FORM_ACTIONS.as_str()])
                        .children(&mut [
                            html!("button", {
                                .attr("type", "button")
                                .class(&*BUTTON_SECONDARY)
                                .text("Cancel")
                                .event(clone!(app => move |_: events::Click| {
                                    app.close_editor();
                                }))
                            }),
                            html!("button", {
                                .attr("type", "submit")
                                .class(&*BUTTON_PRIMARY)
                                .text("Save Changes")
                            }),
                        ])
                    }))
                    .event_with_options(&EventOptions::preventable(), clone!(app => move |e: events::Submit| {
                        e.prevent_default();
                        spawn_action("save_editor", clone!(app => async move {
                            app.save_editor().await
                        }));
                    }))
                }),
            ])
        }))
    })
}
