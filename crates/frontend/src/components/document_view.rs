use dioxus::prelude::*;

use metroline_shared::models::{Block, Document, Span};

/// Render one guide document. The accent color comes from whichever line the
/// open guide belongs to and tints callouts and quotes.
#[component]
pub fn DocumentView(document: Document, accent: String) -> Element {
    rsx! {
        div { class: "document",
            for block in document.iter() {
                {render_block(block, &accent)}
            }
        }
    }
}

fn render_block(block: &Block, accent: &str) -> Element {
    match block {
        Block::Callout { title, body } => {
            let style = format!("background: {accent}14; border-left: 4px solid {accent};");
            rsx! {
                div { class: "doc-callout", style: "{style}",
                    div { class: "doc-callout-title", "{title}" }
                    div { class: "doc-callout-body", "{body}" }
                }
            }
        }
        Block::Heading(text) => rsx! {
            h3 { class: "doc-heading", "{text}" }
        },
        Block::Paragraph(spans) => rsx! {
            p { class: "doc-paragraph",
                for span in spans.iter() {
                    {render_span(span)}
                }
            }
        },
        Block::NumberedList(items) => rsx! {
            ol { class: "doc-list",
                for item in items.iter() {
                    li { "{item}" }
                }
            }
        },
        Block::Code(code) => rsx! {
            pre { class: "doc-code",
                code { "{code}" }
            }
        },
        Block::Quote(text) => {
            let style = format!("border-left: 4px solid {accent};");
            rsx! {
                blockquote { class: "doc-quote", style: "{style}", "{text}" }
            }
        }
        Block::Table { headers, rows } => rsx! {
            div { class: "doc-table-wrap",
                table { class: "doc-table",
                    thead {
                        tr {
                            for header in headers.iter() {
                                th { "{header}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                for cell in row.iter() {
                                    td { "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        Block::CardGrid(cards) => rsx! {
            div { class: "doc-cards",
                for card in cards.iter() {
                    div {
                        class: "doc-card",
                        style: "border-top: 3px solid {card.accent};",
                        div { class: "doc-card-title", "{card.title}" }
                        div { class: "doc-card-body", "{card.body}" }
                    }
                }
            }
        },
        Block::Link {
            url,
            title,
            description,
        } => {
            let desc = description
                .as_ref()
                .map(|d| rsx! { div { class: "doc-link-desc", "{d}" } });
            rsx! {
                a {
                    class: "doc-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    div { class: "doc-link-text",
                        div { class: "doc-link-title", "{title}" }
                        {desc}
                    }
                    svg {
                        view_box: "0 0 24 24",
                        width: "16",
                        height: "16",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M15 3h6v6" }
                        path { d: "M10 14 21 3" }
                        path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
                    }
                }
            }
        }
    }
}

fn render_span(span: &Span) -> Element {
    match span {
        Span::Text(text) => rsx! { "{text}" },
        Span::Strong(text) => rsx! {
            strong { "{text}" }
        },
        Span::Code(text) => rsx! {
            code { class: "doc-inline-code", "{text}" }
        },
        Span::Em(text) => rsx! {
            em { "{text}" }
        },
    }
}
