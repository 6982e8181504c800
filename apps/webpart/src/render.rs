//! Plain-text rendering of the view models for the terminal host.

use std::fmt::Write as _;

use view_core::{
    AccordionRender, PanelBody, PropertyPane, SectionAction, TabsRender, WebPartRender,
};

fn body_text(body: &PanelBody) -> &str {
    match body {
        PanelBody::Content(content) => content,
        PanelBody::Placeholder(text) => text,
    }
}

fn actions_text(actions: &[SectionAction]) -> String {
    actions
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_text(render: &WebPartRender) -> String {
    let mut out = String::new();
    match render {
        WebPartRender::Accordion(AccordionRender::Empty(message))
        | WebPartRender::Tabs(TabsRender::Empty(message)) => {
            let _ = writeln!(out, "{message}");
        }
        WebPartRender::Accordion(AccordionRender::Panels { items, show_add }) => {
            for item in items {
                let marker = if item.expanded { "v" } else { ">" };
                let _ = write!(out, "{marker} {} [{}]", item.title, item.id);
                if !item.actions.is_empty() {
                    let _ = write!(out, "  ({})", actions_text(&item.actions));
                }
                out.push('\n');
                if let Some(body) = &item.body {
                    let _ = writeln!(out, "    {}", body_text(body));
                }
            }
            if *show_add {
                let _ = writeln!(out, "+ {}", shared::strings::ADD_SECTION_BUTTON);
            }
        }
        WebPartRender::Tabs(TabsRender::Tabs {
            headers,
            pane,
            show_add,
        }) => {
            let mut line = headers
                .iter()
                .map(|h| {
                    if h.active {
                        format!("*{}* [{}]", h.title, h.id)
                    } else {
                        format!("{} [{}]", h.title, h.id)
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            if *show_add {
                if !line.is_empty() {
                    line.push_str(" | ");
                }
                line.push('+');
            }
            let _ = writeln!(out, "{line}");
            let _ = writeln!(out, "{}", "-".repeat(line.chars().count().max(3)));
            let _ = writeln!(out, "{}", body_text(pane));
        }
    }
    out
}

pub fn pane_text(pane: &PropertyPane) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", pane.description);
    for group in &pane.groups {
        let _ = writeln!(out, "[{}]", group.name);
        for field in &group.fields {
            let options = field
                .options
                .iter()
                .map(|o| format!("{}={}", o.key, o.text))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {} ({}): {options}", field.label, field.property);
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
