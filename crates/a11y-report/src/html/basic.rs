//! Basic report: one flat list of violations, no overlays

use a11y_types::{Impact, ViolationRecord};

use super::style::basic_css;
use super::{rules_html, ReportInput};
use crate::escape::{context_html, escape_html, failure_summary_html};

pub(super) fn render(input: &ReportInput<'_>) -> String {
    let ctx = input.context;
    let rules = ctx
        .rules
        .as_ref()
        .map(|rules| format!("<div><dt>Rules</dt><dd>{}</dd></div>", rules_html(rules)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Basic Accessibility Report - {test}</title>
<style>{css}</style>
</head>
<body>
<h1>Basic Accessibility Report</h1>
<div class="info">
<div><dt>Test</dt><dd>{spec} › {test}</dd></div>
<div><dt>URL</dt><dd><a href="{url}" target="_blank" rel="noopener">{url}</a></dd></div>
<div><dt>Date</dt><dd>{generated}</dd></div>
<div><dt>Context</dt><dd>{context}</dd></div>
<div><dt>Tags</dt><dd>{tags}</dd></div>
{rules}
</div>
<div class="counts">{counts}</div>
<h2>Violations</h2>
<ul class="vlist">{violations}</ul>
{screenshot}
<footer class="foot">
<p><strong>Note:</strong> Automated testing finds ~57% of WCAG issues. Analyzes visible DOM elements only.</p>
<p>Axe-core® (<a href="https://github.com/dequelabs/axe-core" target="_blank" rel="noopener">github.com/dequelabs/axe-core</a>) is a trademark of Deque Systems, Inc (<a href="https://www.deque.com/" target="_blank" rel="noopener">deque.com</a>).</p>
</footer>
</body>
</html>"#,
        css = basic_css(),
        spec = escape_html(&ctx.spec_name),
        test = escape_html(&ctx.test_name),
        url = escape_html(&ctx.url),
        generated = escape_html(&ctx.generated_on),
        context = context_html(&ctx.context),
        tags = escape_html(&ctx.run_only.join(", ")),
        rules = rules,
        counts = render_counts(input),
        violations = render_violations(input),
        screenshot = render_screenshot(input),
    )
}

fn render_counts(input: &ReportInput<'_>) -> String {
    Impact::ALL
        .iter()
        .map(|&impact| {
            format!(
                r#"<span data-severity="{impact}">{icon} {impact} <b>{count}</b></span>"#,
                impact = impact,
                icon = escape_html(input.styling.icon(impact)),
                count = input.aggregate.count(impact),
            )
        })
        .collect()
}

fn render_violations(input: &ReportInput<'_>) -> String {
    input
        .violations
        .iter()
        .filter(|v| v.impact.is_some_and(|impact| input.policy.is_analyzed(impact)))
        .map(|violation| render_violation(input, violation))
        .collect()
}

fn render_violation(input: &ReportInput<'_>, violation: &ViolationRecord) -> String {
    let (class, icon) = match violation.impact {
        Some(impact) => (impact.as_str(), escape_html(input.styling.icon(impact))),
        None => ("", String::new()),
    };
    let elements: String = violation
        .nodes
        .iter()
        .map(|node| {
            format!(
                r#"
<div class="elem" tabindex="0">{selector}<div class="tip">{summary}</div></div>"#,
                selector = escape_html(&node.selector()),
                summary = failure_summary_html(&node.failure_summary),
            )
        })
        .collect();
    format!(
        r#"
<li class="v {class}">
<div class="vtitle"><span class="sev">{icon}</span> <span>{help}</span> <small>({id})</small></div>
<div class="vmeta"><a href="{url}" target="_blank" rel="noopener">Learn More</a> <span>Tags: {tags}</span></div>
<div class="elems">{elements}</div>
</li>"#,
        class = class,
        icon = icon,
        help = escape_html(&violation.help),
        id = escape_html(&violation.id),
        url = escape_html(&violation.help_url),
        tags = escape_html(&violation.tags.join(", ")),
        elements = elements,
    )
}

fn render_screenshot(input: &ReportInput<'_>) -> String {
    match input.screenshot {
        Some(shot) => format!(
            r#"<div class="shot"><h2>Screenshot</h2><img src="{}" alt="Accessibility violations screenshot"></div>"#,
            escape_html(&shot.file_name)
        ),
        None => r#"<div class="shot"><h2>Screenshot</h2><p>The screenshot of the page is not available for this report.</p></div>"#
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::super::ReportRenderer;

    #[test]
    fn test_lists_violations_in_order() {
        let shot = fixtures::screenshot();
        let html = fixtures::render_with(ReportRenderer::basic(), Some(&shot));
        let critical = html.find(r#"<li class="v critical">"#).unwrap();
        let serious = html.find(r#"<li class="v serious">"#).unwrap();
        assert!(critical < serious);
        assert!(html.contains(r#"<img src="Accessibility Issues Image.png""#));
        assert!(html.contains("<b>n/a</b>"));
    }

    #[test]
    fn test_no_overlays_in_basic() {
        let shot = fixtures::screenshot();
        let html = fixtures::render_with(ReportRenderer::basic(), Some(&shot));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_missing_screenshot() {
        let html = fixtures::render_with(ReportRenderer::basic(), None);
        assert!(!html.contains("<img"));
        assert!(html.contains("not available"));
    }
}
