//! The task list section: filter bar, search box and the task container.

use super::icon;
use crate::styles::*;
use crate::{App, spawn_action};
use dominator::{Dom, clone, events, html, text, with_node};
use futures_signals::signal::SignalExt;
use std::rc::Rc;
use taskboard_core::{Section, StatusFilter, TaskCardView, TaskContainerView, TaskListView};
use web_sys::HtmlInputElement;

pub fn render(app: &Rc<App>) -> Dom {
    html!("div", {
        .children(&mut [
            toolbar(app),
            html!("div", {
                .attr("id", "tasks-container")
                .child_signal(app.container_signal().map(clone!(app => move |view| {
                    Some(container(&app, view))
                })))
            }),
        ])
    })
}

fn toolbar(app: &Rc<App>) -> Dom {
    html!("div", {
        .class(&*TOOLBAR)
        .child(html!("div", {
            .class("filters")
            .children(StatusFilter::ALL.into_iter().map(|filter| filter_button(app, filter)))
        }))
        .child(html!("input" => HtmlInputElement, {
            .attr("id", "search")
            .attr("type", "search")
            .attr("placeholder", "Search tasks...")
            .class(&*INPUT)
            .style("max-width", "280px")
            .with_node!(element => {
                .event(clone!(app, element => move |_: events::Input| {
                    app.set_search(&element.value());
                }))
                // Cleared whenever the list falls back to a filter
                .future(app.searching_signal().for_each(move |searching| {
                    if !searching {
                        element.set_value("");
                    }
                    async {}
                }))
            })
        }))
    })
}

fn filter_button(app: &Rc<App>, filter: StatusFilter) -> Dom {
    html!("button", {
        .attr("type", "button")
        .attr("data-filter", filter.key())
        .class(["filter-btn", FILTER_BUTTON.as_str()])
        .class_signal(&*FILTER_ACTIVE, app.filter_signal().map(move |active| active == Some(filter)))
        .text(filter.label())
        .event(clone!(app => move |_: events::Click| {
            app.set_filter(filter);
        }))
    })
}

fn container(app: &Rc<App>, view: TaskContainerView) -> Dom {
    match view {
        TaskContainerView::Loading => html!("div", {
            .class(["loading", PLACEHOLDER.as_str()])
            .children(&mut [
                html!("i", { .class(["fas", "fa-spinner", "fa-spin"]) }),
                text(" Loading tasks..."),
            ])
        }),
        TaskContainerView::Error(message) => html!("div", {
            .class(["error", PLACEHOLDER.as_str()])
            .style("color", "#ef4444")
            .children(&mut [
                icon("fas", "fa-exclamation-circle"),
                html!("p", { .text(message) }),
            ])
        }),
        TaskContainerView::List(TaskListView::Empty) => empty_state(app),
        TaskContainerView::List(TaskListView::Cards(cards)) => html!("div", {
            .class(["task-grid", TASK_GRID.as_str()])
            .children(cards.into_iter().map(|card| task_card(app, card)))
        }),
    }
}

fn empty_state(app: &Rc<App>) -> Dom {
    html!("div", {
        .class(["empty-state", PLACEHOLDER.as_str()])
        .children(&mut [
            html!("i", {
                .class(["fas", "fa-clipboard-list"])
                .style("font-size", "48px")
            }),
            html!("h3", { .text("No tasks found") }),
            html!("p", { .text("Create your first task to get started!") }),
            html!("button", {
                .attr("type", "button")
                .class(&*BUTTON_PRIMARY)
                .children(&mut [icon("fas", "fa-plus"), text(" Create Task")])
                .event(clone!(app => move |_: events::Click| {
                    app.show_section(Section::New);
                }))
            }),
        ])
    })
}

fn task_card(app: &Rc<App>, card: TaskCardView) -> Dom {
    let accent = priority_color(&card.priority_class);
    let id = card.id.clone();

    html!("div", {
        .class(["task-card", card.priority_class.as_str(), CARD.as_str()])
        .attr("data-id", card.id.as_str())
        .style("border-left-color", accent)
        .children(&mut [
            html!("div", {
                .class(["task-header", CARD_HEADER.as_str()])
                .children(&mut [
                    html!("h3", {
                        .class("task-title")
                        .style("margin", "0")
                        .text(&card.title)
                    }),
                    html!("span", {
                        .class(["task-priority", card.priority_class.as_str(), BADGE.as_str()])
                        .style("color", accent)
                        .text(card.priority_label)
                    }),
                ])
            }),
            html!("p", {
                .class("task-description")
                .apply_if(!card.has_description, |dom| dom.class(&*MUTED))
                .text(&card.description)
            }),
            html!("div", {
                .class(["task-meta", CARD_ROW.as_str()])
                .child(html!("span", {
                    .class(["task-status", card.status_class.as_str(), BADGE.as_str()])
                    .children(&mut [
                        icon("fas", &format!("fa-{}", card.status_icon)),
                        text(card.status_label),
                    ])
                }))
                .apply(|dom| match &card.due_label {
                    Some(due) => dom.child(html!("span", {
                        .class("task-due")
                        .children(&mut [icon("far", "fa-calendar"), text(&format!(" {}", due))])
                    })),
                    None => dom,
                })
            }),
            html!("div", {
                .class(["task-footer", CARD_ROW.as_str()])
                .children(&mut [
                    html!("span", {
                        .class("task-date")
                        .text(&card.created_label)
                    }),
                    html!("div", {
                        .class("task-actions")
                        .children(&mut [
                            action_button("Edit", "fa-edit", clone!(app, id => move || {
                                app.open_editor(&id);
                            })),
                            action_button("Delete", "fa-trash", clone!(app, id => move || {
                                spawn_action("delete_task", clone!(app, id => async move {
                                    app.delete_task(&id).await
                                }));
                            })),
                            action_button("Toggle Status", "fa-check", clone!(app, id => move || {
                                spawn_action("toggle_status", clone!(app, id => async move {
                                    app.toggle_status(&id).await
                                }));
                            })),
                        ])
                    }),
                ])
            }),
        ])
    })
}

fn action_button<F>(title: &str, icon_name: &str, mut on_click: F) -> Dom
where
    F: FnMut() + 'static,
{
    html!("button", {
        .attr("type", "button")
        .attr("title", title)
        .class(["btn-icon", BUTTON_ICON.as_str()])
        .child(icon("fas", icon_name))
        .event(move |_: events::Click| on_click())
    })
}
