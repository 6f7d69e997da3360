//! Scroll-triggered reveal tracking
//!
//! One flag per tagged element. Flags only ever go from hidden to revealed.

/// True if an element whose top edge sits at `top` (viewport coordinates)
/// should be revealed
#[inline]
pub fn in_view(top: f32, viewport_height: f32, offset: f32) -> bool {
    top <= viewport_height - offset
}

/// Reveal state for the tagged elements of a page
#[derive(Clone, Debug)]
pub struct ScrollReveal {
    offset: f32,
    revealed: Vec<bool>,
}

impl ScrollReveal {
    pub fn new(element_count: usize, offset: f32) -> Self {
        Self {
            offset,
            revealed: vec![false; element_count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Mark an element revealed. Returns true only on the first reveal.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Run one reveal pass
    ///
    /// `top_of` is asked for the top edge of each element that is still
    /// hidden; revealed elements are not measured again. Returns the indices
    /// revealed by this pass.
    pub fn check<F>(&mut self, viewport_height: f32, mut top_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> f32,
    {
        let mut newly = Vec::new();
        for index in 0..self.revealed.len() {
            if self.revealed[index] {
                continue;
            }
            if in_view(top_of(index), viewport_height, self.offset) {
                self.revealed[index] = true;
                newly.push(index);
            }
        }
        newly
    }
}
