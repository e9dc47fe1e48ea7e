//! Overlay geometry for the annotated screenshot
//!
//! Element boxes are captured in page CSS pixels at scan time. They are first
//! mapped into natural screenshot pixels (times the device pixel ratio), then
//! projected onto the image as it is actually displayed in the report, which
//! may be letterboxed or pillarboxed inside its container.

use a11y_engine::ImpactStyling;
use a11y_types::{AffectedNode, Impact, ViolationRecord};
use serde::Serialize;

use crate::escape::failure_summary_text;

/// Boxes smaller than this (in displayed pixels) are enlarged around their centre
pub const MIN_VISIBLE_PX: f64 = 4.0;

/// z-index of the most severe overlays; each lower impact sits 10 below
pub const TOP_Z_INDEX: i64 = 2_147_483_647;

/// z-index for overlays targeting the document root, below every other overlay
pub const ROOT_Z_INDEX: i64 = 2_147_482_647;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// One affected element, in natural screenshot pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayBox {
    pub impact: Impact,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip_text: String,
    /// Targets the `html` element and would cover the whole page
    pub is_full_page_target: bool,
}

impl OverlayBox {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn z_index(&self) -> i64 {
        if self.is_full_page_target {
            ROOT_Z_INDEX
        } else {
            TOP_Z_INDEX - self.impact.rank() as i64 * 10
        }
    }
}

/// Tooltip shown when hovering an overlay
pub fn tooltip_text(violation: &ViolationRecord, node: &AffectedNode, styling: &ImpactStyling) -> String {
    let (icon, impact) = match violation.impact {
        Some(impact) => (styling.icon(impact), impact.as_str().to_uppercase()),
        None => ("", String::new()),
    };
    format!(
        "◼️ DOM element selector ➜ {}\n\
         ◼️ Impact ➜ {} {}\n\
         ◼️ Help ➜ {}\n\
         ◼️ Description ➜ {}\n\
         ◼️ Failure Summary ➜ {}",
        node.target.join(","),
        icon,
        impact,
        violation.help.to_uppercase(),
        violation.description,
        failure_summary_text(&node.failure_summary)
    )
}

/// Build overlay boxes for every node with a captured bounding box, ordered
/// back to front: document-root targets first, then least to most severe.
pub fn overlay_boxes(
    violations: &[ViolationRecord],
    styling: &ImpactStyling,
    device_pixel_ratio: f64,
) -> Vec<OverlayBox> {
    let ratio = if device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };

    let mut boxes: Vec<OverlayBox> = violations
        .iter()
        .filter_map(|violation| violation.impact.map(|impact| (violation, impact)))
        .flat_map(|(violation, impact)| {
            violation.nodes.iter().filter_map(move |node| {
                let bbox = node.bounding_box?;
                Some(OverlayBox {
                    impact,
                    top: bbox.y * ratio,
                    left: bbox.x * ratio,
                    width: bbox.width * ratio,
                    height: bbox.height * ratio,
                    tooltip_text: tooltip_text(violation, node, styling),
                    is_full_page_target: node.targets_document_root(),
                })
            })
        })
        .collect();

    boxes.sort_by_key(|b| (!b.is_full_page_target, std::cmp::Reverse(b.impact.rank())));
    boxes
}

/// Rectangle the image occupies inside its container when scaled to fit
/// while keeping its aspect ratio
pub fn fit_image(natural: Dimensions, container: Dimensions) -> Rect {
    if natural.is_empty() || container.is_empty() {
        return Rect::new(0.0, 0.0, 0.0, 0.0);
    }
    let scale = (container.width / natural.width).min(container.height / natural.height);
    let width = natural.width * scale;
    let height = natural.height * scale;
    Rect::new(
        (container.width - width) / 2.0,
        (container.height - height) / 2.0,
        width,
        height,
    )
}

/// Project a natural-pixel box onto the displayed image. Returns `None` when
/// the box falls entirely outside the image.
pub fn project(rect: Rect, natural: Dimensions, container: Dimensions) -> Option<Rect> {
    let image = fit_image(natural, container);
    if image.width <= 0.0 || image.height <= 0.0 {
        return None;
    }
    let scale_x = image.width / natural.width;
    let scale_y = image.height / natural.height;

    let mut left = rect.left * scale_x + image.left;
    let mut top = rect.top * scale_y + image.top;
    let mut width = rect.width * scale_x;
    let mut height = rect.height * scale_y;

    if width < MIN_VISIBLE_PX {
        left -= (MIN_VISIBLE_PX - width) / 2.0;
        width = MIN_VISIBLE_PX;
    }
    if height < MIN_VISIBLE_PX {
        top -= (MIN_VISIBLE_PX - height) / 2.0;
        height = MIN_VISIBLE_PX;
    }

    let clamped_left = left.max(image.left);
    let clamped_top = top.max(image.top);
    let clamped_right = (left + width).min(image.right());
    let clamped_bottom = (top + height).min(image.bottom());

    if clamped_right <= clamped_left || clamped_bottom <= clamped_top {
        return None;
    }

    Some(Rect::new(
        clamped_left,
        clamped_top,
        clamped_right - clamped_left,
        clamped_bottom - clamped_top,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_types::BoundingBox;

    fn approx(a: Rect, b: Rect) -> bool {
        (a.left - b.left).abs() < 1e-9
            && (a.top - b.top).abs() < 1e-9
            && (a.width - b.width).abs() < 1e-9
            && (a.height - b.height).abs() < 1e-9
    }

    fn violation(impact: Impact, target: &str, bbox: Option<BoundingBox>) -> ViolationRecord {
        ViolationRecord {
            id: format!("{}-rule", impact),
            impact: Some(impact),
            help: "Document should have one main landmark".to_string(),
            description: "Ensures the document has a main landmark".to_string(),
            help_url: String::new(),
            tags: vec![],
            nodes: vec![AffectedNode {
                target: vec![target.to_string()],
                html: String::new(),
                failure_summary: "Fix all of the following:\nDocument does not have a main landmark"
                    .to_string(),
                bounding_box: bbox,
            }],
        }
    }

    #[test]
    fn test_half_size_display() {
        let natural = Dimensions::new(1920.0, 1080.0);
        let displayed = Dimensions::new(960.0, 540.0);
        let projected = project(Rect::new(10.0, 20.0, 100.0, 50.0), natural, displayed).unwrap();
        assert!(approx(projected, Rect::new(5.0, 10.0, 50.0, 25.0)), "{:?}", projected);
    }

    #[test]
    fn test_fit_image_letterbox() {
        // wide image in a square container: bars above and below
        let rect = fit_image(Dimensions::new(2000.0, 1000.0), Dimensions::new(1000.0, 1000.0));
        assert!(approx(rect, Rect::new(0.0, 250.0, 1000.0, 500.0)));
    }

    #[test]
    fn test_fit_image_pillarbox() {
        let rect = fit_image(Dimensions::new(1000.0, 2000.0), Dimensions::new(1000.0, 1000.0));
        assert!(approx(rect, Rect::new(250.0, 0.0, 500.0, 1000.0)));
    }

    #[test]
    fn test_project_applies_letterbox_offset() {
        let projected = project(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Dimensions::new(2000.0, 1000.0),
            Dimensions::new(1000.0, 1000.0),
        )
        .unwrap();
        assert!(approx(projected, Rect::new(0.0, 250.0, 100.0, 50.0)));
    }

    #[test]
    fn test_tiny_box_enlarged_around_center() {
        let projected = project(
            Rect::new(100.0, 100.0, 2.0, 2.0),
            Dimensions::new(1000.0, 1000.0),
            Dimensions::new(1000.0, 1000.0),
        )
        .unwrap();
        assert!(approx(projected, Rect::new(99.0, 99.0, 4.0, 4.0)));
    }

    #[test]
    fn test_box_clamped_to_image() {
        let projected = project(
            Rect::new(900.0, -50.0, 200.0, 100.0),
            Dimensions::new(1000.0, 1000.0),
            Dimensions::new(1000.0, 1000.0),
        )
        .unwrap();
        assert!(approx(projected, Rect::new(900.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn test_box_outside_image_hidden() {
        let hidden = project(
            Rect::new(1200.0, 10.0, 50.0, 50.0),
            Dimensions::new(1000.0, 1000.0),
            Dimensions::new(500.0, 500.0),
        );
        assert_eq!(hidden, None);
    }

    #[test]
    fn test_empty_natural_size_hides_everything() {
        let hidden = project(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Dimensions::new(0.0, 0.0),
            Dimensions::new(500.0, 500.0),
        );
        assert_eq!(hidden, None);
    }

    #[test]
    fn test_overlay_boxes_scaled_by_pixel_ratio() {
        let violations = vec![violation(
            Impact::Serious,
            "#submit",
            Some(BoundingBox::new(10.0, 20.0, 30.0, 40.0)),
        )];
        let boxes = overlay_boxes(&violations, &ImpactStyling::default(), 2.0);
        assert_eq!(boxes.len(), 1);
        assert!(approx(boxes[0].rect(), Rect::new(20.0, 40.0, 60.0, 80.0)));
        assert!(boxes[0].tooltip_text.contains("◼️ Impact ➜ 🟧 SERIOUS"));
        assert!(boxes[0]
            .tooltip_text
            .contains("Fix all of the following:\n      • Document does not have a main landmark"));
    }

    #[test]
    fn test_nodes_without_box_are_skipped() {
        let violations = vec![violation(Impact::Critical, "img", None)];
        assert!(overlay_boxes(&violations, &ImpactStyling::default(), 1.0).is_empty());
    }

    #[test]
    fn test_stacking_order() {
        let bbox = Some(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        let violations = vec![
            violation(Impact::Critical, "img", bbox),
            violation(Impact::Minor, "html", bbox),
            violation(Impact::Moderate, "nav", bbox),
            violation(Impact::Serious, "a", bbox),
        ];
        let boxes = overlay_boxes(&violations, &ImpactStyling::default(), 1.0);
        let order: Vec<_> = boxes
            .iter()
            .map(|b| (b.impact, b.is_full_page_target))
            .collect();
        assert_eq!(
            order,
            vec![
                (Impact::Minor, true),
                (Impact::Moderate, false),
                (Impact::Serious, false),
                (Impact::Critical, false),
            ]
        );
        assert_eq!(boxes[0].z_index(), ROOT_Z_INDEX);
        assert_eq!(boxes[3].z_index(), TOP_Z_INDEX);
        assert!(boxes.windows(2).all(|w| w[0].z_index() < w[1].z_index()));
    }
}
