//! Slide positions along the carousel track

/// A panel on the carousel track
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slide {
    index: usize,
    /// Left edge on the track in pixels (`index × slide width`)
    offset: f32,
}

impl Slide {
    pub(crate) fn new(index: usize, width: f32) -> Self {
        Self {
            index,
            offset: offset_for(index, width),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// CSS `left` value for this slide
    pub fn left_css(&self) -> String {
        format!("{}px", self.offset)
    }

    pub(crate) fn relayout(&mut self, width: f32) {
        self.offset = offset_for(self.index, width);
    }
}

#[inline]
fn offset_for(index: usize, width: f32) -> f32 {
    index as f32 * width
}

/// Track transform that brings a slide at `offset` to the track origin
pub fn track_transform(offset: f32) -> String {
    format!("translateX(-{}px)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_index_times_width() {
        let slide = Slide::new(3, 320.0);
        assert!((slide.offset() - 960.0).abs() < f32::EPSILON);
        assert_eq!(slide.left_css(), "960px");
    }

    #[test]
    fn test_relayout() {
        let mut slide = Slide::new(2, 500.0);
        slide.relayout(412.5);
        assert!((slide.offset() - 825.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_track_transform() {
        assert_eq!(track_transform(0.0), "translateX(-0px)");
        assert_eq!(track_transform(1280.0), "translateX(-1280px)");
    }
}
