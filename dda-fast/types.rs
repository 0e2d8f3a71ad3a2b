use dda_core::PixelCoord;

/// Corner location with its segment-test response, used for NMS
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCorner {
    pub coord: PixelCoord,
    pub response: f32,
}

/// Which side of the centre intensity a contiguous arc lies on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CornerType {
    Bright,
    Dark,
}
