use serde::Serialize;

use svpath_core::PathogenicityLevel;

use crate::stack::StackedSegment;

/// Which edges of one segment's rectangle get a visible stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderSpec {
    pub level: PathogenicityLevel,
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl BorderSpec {
    fn sides(level: PathogenicityLevel) -> Self {
        BorderSpec {
            level,
            top: false,
            bottom: false,
            left: true,
            right: true,
        }
    }
}

///
/// Outline a selected column.
///
/// Every non-empty segment gets both side strokes and the topmost non-empty segment
/// also gets the top stroke, so the column reads as a single outlined shape with no
/// line across it where two segments meet. The bottom edge sits on the x axis and
/// is never stroked. Empty segments are skipped entirely.
///
/// Returns nothing when the column is not selected or every segment is empty.
///
pub fn resolve_highlight(segments: &[StackedSegment], is_selected: bool) -> Vec<BorderSpec> {
    if !is_selected {
        return Vec::new();
    }

    let mut borders: Vec<BorderSpec> = segments
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| BorderSpec::sides(s.level))
        .collect();

    if let Some(topmost) = borders.last_mut() {
        topmost.top = true;
    }

    borders
}
