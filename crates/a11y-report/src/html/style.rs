//! Inline stylesheets and script for the report templates

/// Stylesheet for the detailed report
pub(super) fn detailed_css() -> &'static str {
    r#"
:root {
    --color-white: #ffffff;
    --color-panel: #f0f8ff;
    --color-border: #d1d5db;
    --color-text: #111827;
    --color-text-secondary: #374151;
    --color-link: #1e40af;
    --color-focus: #2563eb;
    --color-critical: #991b1b;
    --color-serious: #9a3412;
    --color-moderate: #854d0e;
    --color-minor: #1e40af;
    --font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    --spacing-sm: 8px;
    --spacing-md: 16px;
    --spacing-lg: 24px;
    --radius: 8px;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-family);
    font-size: 16px;
    line-height: 1.6;
    color: var(--color-text);
    background: var(--color-white);
}

a {
    color: var(--color-link);
}

a:focus, button:focus, summary:focus, .focusable:focus {
    outline: 3px solid var(--color-focus);
    outline-offset: 2px;
}

.container {
    max-width: 1400px;
    margin: 0 auto;
    padding: var(--spacing-lg);
}

/* Header */
.header {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: var(--spacing-md);
    padding-bottom: var(--spacing-md);
    border-bottom: 2px solid var(--color-border);
}

.header__title {
    margin: 0;
    font-size: 32px;
}

.header__controls button {
    min-height: 44px;
    padding: 0 var(--spacing-md);
    margin-left: var(--spacing-sm);
    border: 2px solid var(--color-link);
    border-radius: var(--radius);
    background: var(--color-white);
    color: var(--color-link);
    font-weight: 600;
    cursor: pointer;
}

/* Summary */
.summary-wrapper {
    margin: var(--spacing-lg) 0;
    border: 1px solid var(--color-border);
    border-radius: var(--radius);
    background: var(--color-panel);
}

.summary-wrapper__toggle {
    padding: var(--spacing-md);
    font-size: 20px;
    font-weight: 700;
    cursor: pointer;
}

.summary-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: var(--spacing-md);
    padding: 0 var(--spacing-md) var(--spacing-md);
}

.summary-section {
    background: var(--color-white);
    border: 1px solid var(--color-border);
    border-radius: var(--radius);
}

.summary-section__header {
    padding: var(--spacing-sm) var(--spacing-md);
    font-weight: 700;
    border-bottom: 1px solid var(--color-border);
}

.summary-section__content {
    padding: var(--spacing-sm) var(--spacing-md);
}

.summary-item, .config-item, .impact-indicator {
    display: flex;
    gap: var(--spacing-sm);
    padding: 4px 0;
    word-break: break-word;
}

.summary-item__label, .config-item__label {
    font-weight: 600;
    min-width: 90px;
}

.impact-indicator__label {
    text-transform: uppercase;
    font-weight: 600;
}

.impact-indicator__count {
    margin-left: auto;
    font-weight: 700;
}

.impact-indicator__badge {
    font-size: 12px;
    padding: 0 6px;
    border-radius: 4px;
    background: #fef3c7;
    color: #78350f;
}

/* Tooltips */
.tooltip {
    position: relative;
    cursor: help;
    text-decoration: underline dotted;
}

.tooltip__content {
    visibility: hidden;
    position: absolute;
    z-index: 10;
    left: 0;
    top: 100%;
    width: 360px;
    padding: var(--spacing-sm);
    border-radius: 4px;
    background: #1f2937;
    color: var(--color-white);
    font-size: 14px;
    font-weight: 400;
    text-transform: none;
}

.tooltip:hover .tooltip__content, .tooltip:focus .tooltip__content {
    visibility: visible;
}

/* Severity sections */
.violations-title, .screenshot-title {
    font-size: 24px;
    margin: var(--spacing-lg) 0 var(--spacing-md);
}

.severity-section {
    margin-bottom: var(--spacing-md);
    border: 1px solid var(--color-border);
    border-left-width: 6px;
    border-radius: var(--radius);
}

.severity-section--critical { border-left-color: var(--color-critical); }
.severity-section--serious { border-left-color: var(--color-serious); }
.severity-section--moderate { border-left-color: var(--color-moderate); }
.severity-section--minor { border-left-color: var(--color-minor); }

.severity-section__toggle {
    display: flex;
    justify-content: space-between;
    padding: var(--spacing-md);
    font-size: 18px;
    font-weight: 700;
    cursor: pointer;
}

.severity-section__content {
    padding: 0 var(--spacing-md) var(--spacing-md);
}

.severity-section__empty {
    text-align: center;
    color: var(--color-text-secondary);
    font-style: italic;
}

.violations-list {
    list-style: none;
    padding: 0;
    margin: 0;
}

/* Violation cards */
.violation-card {
    margin-bottom: var(--spacing-md);
    padding: var(--spacing-md);
    border: 1px solid var(--color-border);
    border-radius: var(--radius);
}

.violation-card__title {
    display: flex;
    flex-wrap: wrap;
    gap: var(--spacing-sm);
    margin: 0 0 var(--spacing-sm);
    font-size: 18px;
}

.violation-card__impact {
    text-transform: uppercase;
}

.violation-card__rule-id {
    color: var(--color-text-secondary);
    font-weight: 400;
    font-style: italic;
}

.violation-card__meta {
    display: flex;
    flex-wrap: wrap;
    gap: var(--spacing-md);
    align-items: center;
    font-size: 14px;
}

.affected-elements {
    list-style: none;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: var(--spacing-sm);
}

.affected-element {
    padding: var(--spacing-sm);
    border: 1px solid var(--color-border);
    border-radius: 4px;
}

.affected-element__selector-text {
    font-family: Monaco, Menlo, monospace;
    font-size: 14px;
    word-break: break-all;
}

.affected-element__selector-toggle {
    cursor: pointer;
}

.affected-element__expandable-content p {
    margin: 4px 0;
    font-size: 14px;
}

/* Screenshot with overlays */
.screenshot-container {
    position: relative;
    margin: 0 auto;
    border: 1px solid var(--color-border);
}

.screenshot-image {
    display: block;
    width: 100%;
    height: 100%;
    object-fit: contain;
}

.overlay {
    position: absolute;
    overflow: visible;
}

.screenshot-missing {
    padding: var(--spacing-md);
    border: 1px dashed var(--color-border);
    color: var(--color-text-secondary);
    font-style: italic;
}

.footer {
    margin-top: var(--spacing-lg);
    padding-top: var(--spacing-md);
    border-top: 2px solid var(--color-border);
    font-size: 14px;
    color: var(--color-text-secondary);
    text-align: center;
}

@media print {
    .header__controls { display: none; }
    .violation-card { page-break-inside: avoid; }
}
"#
}

/// Stylesheet for the basic report
pub(super) fn basic_css() -> &'static str {
    r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--c-text:#1a1a1a;--c-muted:#666;--c-border:#ddd;--c-link:#0056b3;--c-crit:#dc2626;--c-ser:#ea580c;--c-mod:#d97706;--c-min:#2563eb;--f:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif}
body{font:14px/1.6 var(--f);color:var(--c-text);max-width:1200px;margin:0 auto;padding:14px}
h1{font-size:22px;font-weight:600;margin-bottom:14px;text-align:center}
h2{font-size:18px;font-weight:600;margin:18px 0 12px;padding-bottom:6px;border-bottom:2px solid var(--c-border)}
a{color:var(--c-link)}
a:focus,.elem:focus{outline:3px solid var(--c-link);outline-offset:2px}
.info{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:10px;margin-bottom:14px}
.info>div{padding:12px;border:2px solid var(--c-border);border-radius:4px}
.info dt{font-size:10px;text-transform:uppercase;letter-spacing:1px;font-weight:700;color:var(--c-muted)}
.info dd{font-size:15px;font-weight:600;word-break:break-word}
.counts{display:flex;gap:12px;flex-wrap:wrap;padding:12px 0;border-top:2px solid var(--c-border)}
.counts span{font-weight:600;text-transform:uppercase}
.counts b{font-size:18px;margin-left:4px}
.vlist{list-style:none}
.v{border-left:4px solid;padding:10px 0 10px 12px;margin-bottom:24px}
.v.critical{border-color:var(--c-crit)}
.v.serious{border-color:var(--c-ser)}
.v.moderate{border-color:var(--c-mod)}
.v.minor{border-color:var(--c-min)}
.vtitle{font-size:15px;font-weight:600;margin-bottom:6px}
.vtitle small{color:var(--c-muted);font-weight:400;font-style:italic}
.vmeta{font-size:13px;color:var(--c-muted);margin-bottom:8px}
.elems{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:10px 18px}
.elem{padding:8px;border-bottom:1px solid var(--c-border);font-family:Monaco,Menlo,monospace;font-size:13px}
.elem .tip{font-family:var(--f);color:var(--c-muted);margin-top:4px}
.shot img{max-width:100%;border:1px solid var(--c-border);display:block;margin:0 auto}
.foot{margin-top:20px;padding-top:12px;border-top:1px solid var(--c-border);text-align:center;font-size:12px;color:var(--c-muted)}
"#
}

/// Expand / collapse / scroll controls of the detailed report
pub(super) fn detailed_js() -> &'static str {
    r#"
function expandAllSections() {
    document.querySelectorAll('details').forEach(function (detail) { detail.open = true; });
}

function collapseAllSections() {
    document.querySelectorAll('details').forEach(function (detail) { detail.open = false; });
}

function scrollToScreenshot() {
    var heading = document.getElementById('screenshot-heading');
    if (heading) {
        heading.scrollIntoView({ behavior: 'smooth' });
        heading.focus({ preventScroll: true });
    }
}
"#
}
