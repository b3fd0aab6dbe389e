//! Ausgabekurve als zusammenhängende Polyline.

use super::types::{RenderContext, CURVE_COLOR};
use crate::core::Point2D;

pub(crate) fn render(ctx: &RenderContext<'_>, curve: &[Point2D]) {
    ctx.polyline(curve, CURVE_COLOR);
}
