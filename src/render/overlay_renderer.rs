//! Hilfslinien: Kreisbögen je Tripel und Tangenten je Punkt.

use super::types::{RenderContext, ARC_COLOR, TANGENT_COLOR};
use crate::core::Point2D;
use crate::shared::TangentSegment;

pub(crate) fn render_arcs(ctx: &RenderContext<'_>, arcs: &[Vec<Point2D>]) {
    for arc in arcs {
        ctx.polyline(arc, ARC_COLOR);
    }
}

pub(crate) fn render_tangents(ctx: &RenderContext<'_>, tangents: &[TangentSegment]) {
    for seg in tangents {
        ctx.polyline(&[seg.start, seg.end], TANGENT_COLOR);
    }
}
