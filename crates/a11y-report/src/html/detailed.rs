//! Detailed report: summary cards, collapsible severity sections and the
//! annotated screenshot

use a11y_types::{AffectedNode, Impact, ViolationRecord};

use super::style::{detailed_css, detailed_js};
use super::{px, rules_html, ReportInput};
use crate::escape::{context_html, escape_html, failure_summary_html};
use crate::overlay::{overlay_boxes, project};

const CONTEXT_HELP: &str = "Context defines the scope of the analysis: which elements were tested and which were not.";
const TAGS_HELP: &str = "Tags select the groups of rules (WCAG level, best practices) used in the analysis.";
const RULES_HELP: &str = "Rules enable or disable specific checks, such as \"color-contrast\" or \"valid-lang\".";

fn severity_description(impact: Impact) -> &'static str {
    match impact {
        Impact::Critical => {
            "A CRITICAL violation is a barrier that prevents users with disabilities from reaching core \
             content or functionality.<br>For example, images without alternate text cannot be understood \
             through a screen reader."
        }
        Impact::Serious => {
            "A SERIOUS violation significantly degrades the experience for users with disabilities without \
             blocking access completely.<br>For example, text without enough color contrast is hard to read \
             for users with low vision or color blindness."
        }
        Impact::Moderate => {
            "A MODERATE violation causes confusion or inconvenience.<br>For example, page content outside of \
             landmarks makes the page structure harder to navigate with a screen reader."
        }
        Impact::Minor => {
            "A MINOR violation has a small impact and is usually a best-practice issue.<br>For example, an \
             ARIA role that does not match the element's purpose."
        }
    }
}

pub(super) fn render(input: &ReportInput<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Accessibility Report - {title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        <main>
            {summary}
            {violations}
            {screenshot}
        </main>
        {footer}
    </div>
    <script>{js}</script>
</body>
</html>"#,
        title = escape_html(&input.context.test_name),
        css = detailed_css(),
        js = detailed_js(),
        header = render_header(),
        summary = render_summary(input),
        violations = render_violations(input),
        screenshot = render_screenshot(input),
        footer = render_footer(),
    )
}

fn render_header() -> String {
    r#"<header class="header">
            <h1 class="header__title">Accessibility Report (Axe-core®)</h1>
            <div class="header__controls">
                <button type="button" onclick="expandAllSections()">Expand All</button>
                <button type="button" onclick="collapseAllSections()">Collapse All</button>
                <button type="button" onclick="scrollToScreenshot()">View Screenshot</button>
            </div>
        </header>"#
        .to_string()
}

fn render_summary(input: &ReportInput<'_>) -> String {
    format!(
        r#"<details class="summary-wrapper" open>
                <summary class="summary-wrapper__toggle">📋 Report Summary</summary>
                <div class="summary-grid">
                    {test}
                    {config}
                    {counts}
                </div>
            </details>"#,
        test = render_test_summary(input),
        config = render_configuration(input),
        counts = render_counts(input),
    )
}

fn render_test_summary(input: &ReportInput<'_>) -> String {
    let ctx = input.context;
    format!(
        r#"<div class="summary-section">
                        <div class="summary-section__header">📊 Test Summary</div>
                        <div class="summary-section__content">
                            <div class="summary-item"><span class="summary-item__label">Spec:</span><span>{spec}</span></div>
                            <div class="summary-item"><span class="summary-item__label">Test:</span><span>{test}</span></div>
                            <div class="summary-item"><span class="summary-item__label">Page URL:</span><span><a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a></span></div>
                            <div class="summary-item"><span class="summary-item__label">Generated:</span><span>{generated}</span></div>
                        </div>
                    </div>"#,
        spec = escape_html(&ctx.spec_name),
        test = escape_html(&ctx.test_name),
        url = escape_html(&ctx.url),
        generated = escape_html(&ctx.generated_on),
    )
}

fn config_item(label: &str, help: &str, value: &str) -> String {
    format!(
        r#"<div class="config-item">
                                <div class="config-item__label"><span tabindex="0" class="tooltip focusable">{label}<span class="tooltip__content" role="tooltip">{help}</span></span>:</div>
                                <div class="config-item__value">{value}</div>
                            </div>"#,
        label = label,
        help = escape_html(help),
        value = value,
    )
}

fn render_configuration(input: &ReportInput<'_>) -> String {
    let ctx = input.context;
    let mut items = vec![
        config_item("Context", CONTEXT_HELP, &context_html(&ctx.context)),
        config_item("Tags", TAGS_HELP, &escape_html(&ctx.run_only.join(", "))),
    ];
    if let Some(rules) = &ctx.rules {
        items.push(config_item("Rules", RULES_HELP, &rules_html(rules)));
    }
    format!(
        r#"<div class="summary-section">
                        <div class="summary-section__header">⚙️ Analysis Configuration</div>
                        <div class="summary-section__content">
                            {items}
                        </div>
                    </div>"#,
        items = items.join("\n                            "),
    )
}

fn render_counts(input: &ReportInput<'_>) -> String {
    let rows: Vec<String> = Impact::ALL
        .iter()
        .map(|&impact| {
            let badge = if input.policy.only_warn().contains(&impact) {
                r#" <span class="impact-indicator__badge">warning only</span>"#
            } else {
                ""
            };
            format!(
                r##"<div class="impact-indicator">
                                <span aria-hidden="true">{icon}</span>
                                <span class="impact-indicator__label"><a href="#section-{impact}" class="tooltip focusable">{impact}<span class="tooltip__content" role="tooltip">{description}</span></a>:{badge}</span>
                                <span class="impact-indicator__count">{count}</span>
                            </div>"##,
                icon = escape_html(input.styling.icon(impact)),
                impact = impact,
                description = severity_description(impact),
                badge = badge,
                count = input.aggregate.count(impact),
            )
        })
        .collect();
    format!(
        r#"<div class="summary-section">
                        <div class="summary-section__header">⚠️ Violations Summary</div>
                        <div class="summary-section__content">
                            {rows}
                        </div>
                    </div>"#,
        rows = rows.join("\n                            "),
    )
}

fn render_violations(input: &ReportInput<'_>) -> String {
    let sections: String = input
        .aggregate
        .analyzed()
        .map(|(impact, _)| render_section(input, impact))
        .collect();
    format!(
        r#"<section class="violations-section">
                <h2 class="violations-title">Accessibility Violations Details</h2>
                {sections}
            </section>"#,
        sections = sections,
    )
}

fn render_section(input: &ReportInput<'_>, impact: Impact) -> String {
    let violations: Vec<&ViolationRecord> = input
        .violations
        .iter()
        .filter(|v| v.has_impact(impact))
        .collect();
    let content = if violations.is_empty() {
        format!(
            r#"<p class="severity-section__empty">No {} violations found.</p>"#,
            impact
        )
    } else {
        let cards: String = violations
            .iter()
            .enumerate()
            .map(|(index, violation)| render_card(input, impact, index, violation))
            .collect();
        format!(r#"<ul class="violations-list">{}</ul>"#, cards)
    };
    format!(
        r#"
                <details class="severity-section severity-section--{impact}" open id="section-{impact}">
                    <summary class="severity-section__toggle">
                        <span><span aria-hidden="true">{icon}</span> {label} VIOLATIONS ({count})</span>
                        <span aria-hidden="true">▶</span>
                    </summary>
                    <div class="severity-section__content">
                        {content}
                    </div>
                </details>"#,
        impact = impact,
        icon = escape_html(input.styling.icon(impact)),
        label = impact.as_str().to_uppercase(),
        count = violations.len(),
        content = content,
    )
}

fn render_card(input: &ReportInput<'_>, impact: Impact, index: usize, violation: &ViolationRecord) -> String {
    let elements: String = violation
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| render_element(input, i, node))
        .collect();
    format!(
        r#"
                        <li class="violation-card">
                            <h3 class="violation-card__title" id="violation-{impact}-{index}">
                                <span class="violation-card__impact"><span aria-hidden="true">{icon}</span> {impact}</span>
                                <span>{help}</span>
                                <span class="violation-card__rule-id">(Rule: {id})</span>
                            </h3>
                            <div class="violation-card__meta">
                                <a href="{url}" target="_blank" rel="noopener noreferrer" aria-label="Learn more about {help} rule">Learn More</a>
                                <span><strong>Tags:</strong> {tags}</span>
                            </div>
                            <h4>Affected Elements ({nodes})</h4>
                            <ul class="affected-elements">{elements}</ul>
                        </li>"#,
        impact = impact,
        index = index,
        icon = escape_html(input.styling.icon(impact)),
        help = escape_html(&violation.help),
        id = escape_html(&violation.id),
        url = escape_html(&violation.help_url),
        tags = escape_html(&violation.tags.join(", ")),
        nodes = violation.nodes.len(),
        elements = elements,
    )
}

fn render_element(input: &ReportInput<'_>, index: usize, node: &AffectedNode) -> String {
    format!(
        r#"
                                <li class="affected-element">
                                    <div><span aria-hidden="true">{fixme}</span> Element {number}</div>
                                    <details>
                                        <summary class="affected-element__selector-toggle"><span class="affected-element__selector-text">{selector}</span> Details</summary>
                                        <div class="affected-element__expandable-content">{summary}</div>
                                    </details>
                                </li>"#,
        fixme = escape_html(input.styling.fixme_icon()),
        number = index + 1,
        selector = escape_html(&node.selector()),
        summary = failure_summary_html(&node.failure_summary),
    )
}

fn render_screenshot(input: &ReportInput<'_>) -> String {
    let body = match input.screenshot {
        Some(shot) => {
            let overlays: String = overlay_boxes(input.violations, input.styling, input.device_pixel_ratio)
                .iter()
                .filter_map(|overlay| {
                    let rect = project(overlay.rect(), shot.natural, shot.displayed)?;
                    Some(format!(
                        r#"
                    <svg class="overlay overlay--{impact}{send_back}" style="left: {left}; top: {top}; width: {width}; height: {height}; z-index: {z};" role="img" aria-label="{impact} violation"><rect width="100%" height="100%" style="{style}"><title>{tooltip}</title></rect></svg>"#,
                        impact = overlay.impact,
                        send_back = if overlay.is_full_page_target { " send-back" } else { "" },
                        left = px(rect.left),
                        top = px(rect.top),
                        width = px(rect.width),
                        height = px(rect.height),
                        z = overlay.z_index(),
                        style = escape_html(&input.styling.get(overlay.impact).style),
                        tooltip = escape_html(&overlay.tooltip_text),
                    ))
                })
                .collect();
            format!(
                r#"<div class="screenshot-container" style="width: {width}; height: {height};">
                    <img src="{src}" alt="Screenshot showing accessibility violations highlighted with colored borders based on severity level" class="screenshot-image">{overlays}
                </div>"#,
                width = px(shot.displayed.width),
                height = px(shot.displayed.height),
                src = escape_html(&shot.file_name),
                overlays = overlays,
            )
        }
        None => r#"<p class="screenshot-missing">The screenshot of the page is not available for this report.</p>"#
            .to_string(),
    };
    format!(
        r#"<section class="screenshot-section">
                <h2 id="screenshot-heading" class="screenshot-title" tabindex="-1">Accessibility Violations Screenshot</h2>
                {body}
            </section>"#,
        body = body,
    )
}

fn render_footer() -> String {
    r#"<footer class="footer">
            <p>🎓 <strong>Note:</strong> As per the axe-core® library, automated testing can find on average 57% of WCAG issues automatically.</p>
            <p>It only analyzes DOM elements that are visible in the browser viewport.</p>
            <p>Axe-core® (<a href="https://github.com/dequelabs/axe-core" target="_blank" rel="noopener noreferrer">https://github.com/dequelabs/axe-core</a>) is a trademark of Deque Systems, Inc (<a href="https://www.deque.com/" target="_blank" rel="noopener noreferrer">https://www.deque.com/</a>) in the US and other countries.</p>
        </footer>"#
        .to_string()
}
