//! Scope of an accessibility scan

use serde::{Deserialize, Serialize};

/// A DOM element captured by the host for display purposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRef {
    pub tag_name: String,
    pub outer_html: String,
}

/// Which part of the DOM was analyzed.
///
/// Deserializes from the natural shapes a host sends: `null` for the whole
/// document, a string selector, an element, a list of elements, or an
/// include/exclude object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextSpec {
    #[default]
    Document,
    Selector(String),
    Element(ElementRef),
    ElementList(Vec<ElementRef>),
    #[serde(rename_all = "camelCase")]
    IncludeExclude {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        include: Vec<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        exclude: Vec<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from_frames: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from_shadow_dom: Option<serde_json::Value>,
    },
}

impl ContextSpec {
    pub fn is_document(&self) -> bool {
        matches!(self, ContextSpec::Document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_document() {
        let ctx: ContextSpec = serde_json::from_str("null").unwrap();
        assert!(ctx.is_document());
    }

    #[test]
    fn test_string_is_selector() {
        let ctx: ContextSpec = serde_json::from_str(r#""main""#).unwrap();
        assert_eq!(ctx, ContextSpec::Selector("main".to_string()));
    }

    #[test]
    fn test_element_and_list() {
        let ctx: ContextSpec =
            serde_json::from_str(r#"{"tagName": "DIV", "outerHtml": "<div id=\"root\"></div>"}"#)
                .unwrap();
        assert!(matches!(ctx, ContextSpec::Element(ref e) if e.tag_name == "DIV"));

        let ctx: ContextSpec = serde_json::from_str(
            r#"[{"tagName": "LI", "outerHtml": "<li>a</li>"}, {"tagName": "LI", "outerHtml": "<li>b</li>"}]"#,
        )
        .unwrap();
        assert!(matches!(ctx, ContextSpec::ElementList(ref list) if list.len() == 2));
    }

    #[test]
    fn test_include_exclude() {
        let ctx: ContextSpec = serde_json::from_str(r#"{"exclude": ["button"]}"#).unwrap();
        match ctx {
            ContextSpec::IncludeExclude {
                include, exclude, ..
            } => {
                assert!(include.is_empty());
                assert_eq!(exclude, vec![serde_json::json!("button")]);
            }
            other => panic!("Expected IncludeExclude, got {:?}", other),
        }
    }
}
