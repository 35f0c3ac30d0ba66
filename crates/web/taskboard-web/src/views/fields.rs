//! Task form inputs, shared by the "New Task" section and the edit modal.

use super::icon;
use crate::styles::*;
use crate::{App, spawn_action};
use dominator::{Dom, EventOptions, clone, events, html, text, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use std::rc::Rc;
use taskboard_api::{Priority, TaskStatus};
use taskboard_core::TaskForm;
use taskboard_core::render::{priority_label, status_option_label};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub fn new_task_form(app: &Rc<App>) -> Dom {
    html!("form", {
        .attr("id", "taskForm")
        .class(&*FORM)
        .children(fields(app.new_task_form(), ""))
        .child(html!("div", {
            .class(&*FORM_ACTIONS)
            .child(html!("button", {
                .attr("type", "submit")
                .class(&*BUTTON_PRIMARY)
                .children(&mut [icon("fas", "fa-plus"), text(" Create Task")])
            }))
        }))
        // Only fires once the browser's `required` check passed
        .event_with_options(&EventOptions::preventable(), clone!(app => move |e: events::Submit| {
            e.prevent_default();
            let draft = app.new_task_form().draft();
            spawn_action("create_task", clone!(app => async move {
                app.create_task(draft).await
            }));
        }))
    })
}

/// Inputs bound two-way to `form`. Element ids are the field names with
/// `id_prefix` in front.
pub fn fields(form: &TaskForm, id_prefix: &str) -> Vec<Dom> {
    let id = |name: &str| format!("{}{}", id_prefix, name);

    vec![
        group(&id("title"), "Title *", text_input(&id("title"), "text", form.title.clone(), true)),
        group(&id("description"), "Description", textarea(&id("description"), form.description.clone())),
        html!("div", {
            .class(["form-row", FORM_ROW.as_str()])
            .children(&mut [
                group(&id("priority"), "Priority", select(
                    &id("priority"),
                    form.priority.clone(),
                    Priority::ALL.map(|p| (p, p.as_str(), priority_label(p))),
                    Priority::parse,
                )),
                group(&id("status"), "Status", select(
                    &id("status"),
                    form.status.clone(),
                    TaskStatus::ALL.map(|s| (s, s.as_str(), status_option_label(s))),
                    TaskStatus::parse,
                )),
            ])
        }),
        group(&id("due_date"), "Due Date", text_input(&id("due_date"), "date", form.due_date.clone(), false)),
    ]
}

fn group(for_id: &str, label: &str, input: Dom) -> Dom {
    html!("div", {
        .class(["form-group", FORM_GROUP.as_str()])
        .children(&mut [
            html!("label", {
                .attr("for", for_id)
                .style("font-weight", "600")
                .text(label)
            }),
            input,
        ])
    })
}

fn text_input(id: &str, kind: &str, value: Mutable<String>, required: bool) -> Dom {
    html!("input" => HtmlInputElement, {
        .attr("id", id)
        .attr("type", kind)
        .class(&*INPUT)
        .apply_if(required, |dom| dom.attr("required", ""))
        .prop_signal("value", value.signal_cloned())
        .with_node!(element => {
            .event(clone!(value => move |_: events::Input| {
                value.set_neq(element.value());
            }))
        })
    })
}

fn textarea(id: &str, value: Mutable<String>) -> Dom {
    html!("textarea" => HtmlTextAreaElement, {
        .attr("id", id)
        .attr("rows", "3")
        .class(&*INPUT)
        .prop_signal("value", value.signal_cloned())
        .with_node!(element => {
            .event(clone!(value => move |_: events::Input| {
                value.set_neq(element.value());
            }))
        })
    })
}

/// `options` are `(value, wire key, label)` triples
fn select<T, const N: usize>(
    id: &str,
    value: Mutable<T>,
    options: [(T, &'static str, &'static str); N],
    parse: fn(&str) -> Option<T>,
) -> Dom
where
    T: Copy + PartialEq + 'static,
{
    html!("select" => HtmlSelectElement, {
        .attr("id", id)
        .class(&*INPUT)
        .children(options.into_iter().map(|(option, key, label)| {
            html!("option", {
                .attr("value", key)
                .prop_signal("selected", value.signal().map(move |current| current == option))
                .text(label)
            })
        }))
        .with_node!(element => {
            .event(clone!(value => move |_: events::Change| {
                if let Some(selected) = parse(&element.value()) {
                    value.set_neq(selected);
                }
            }))
        })
    })
}
