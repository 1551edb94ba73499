use std::time::{Duration, Instant};

/// Something that can bring a page's section into view.
pub trait ScrollSurface {
    /// Returns false when no section is mounted for `index`.
    fn scroll_to_page(&mut self, index: usize) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f64,
    to_page: usize,
    started: Option<Instant>,
}

/// Horizontal strip of page sections, each exactly one viewport wide.
///
/// `offset` is measured in terminal columns from the left edge of the first
/// section. Programmatic scrolls ease toward their target over
/// `smooth_duration`; free scrolling moves the offset directly.
#[derive(Debug, Clone)]
pub struct ScrollView {
    offset: f64,
    viewport_width: u16,
    mounted_pages: usize,
    smooth_duration: Duration,
    animation: Option<ScrollAnimation>,
}

impl ScrollView {
    pub fn new(mounted_pages: usize, smooth_duration: Duration) -> Self {
        Self {
            offset: 0.0,
            viewport_width: 0,
            mounted_pages,
            smooth_duration,
            animation: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn mounted_pages(&self) -> usize {
        self.mounted_pages
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn page_offset(&self, index: usize) -> f64 {
        index as f64 * f64::from(self.viewport_width)
    }

    fn max_offset(&self) -> f64 {
        self.page_offset(self.mounted_pages.saturating_sub(1))
    }

    /// Keeps the same fractional page in view when the terminal is resized.
    pub fn set_viewport_width(&mut self, width: u16) -> bool {
        if width == self.viewport_width {
            return false;
        }
        let page_position = if self.viewport_width == 0 {
            0.0
        } else {
            self.offset / f64::from(self.viewport_width)
        };
        self.viewport_width = width;
        self.offset = (page_position * f64::from(width)).clamp(0.0, self.max_offset());
        if let Some(animation) = self.animation.as_mut() {
            animation.from = self.offset;
            animation.started = None;
        }
        true
    }

    /// Free scroll by `delta` columns; cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.animation = None;
        let next = (self.offset + delta).clamp(0.0, self.max_offset());
        if next == self.offset {
            return false;
        }
        self.offset = next;
        true
    }

    /// Advance the smooth scroll. Returns whether the offset moved.
    pub fn step(&mut self, now: Instant) -> bool {
        let Some(mut animation) = self.animation else {
            return false;
        };
        let started = *animation.started.get_or_insert(now);
        let target = self.page_offset(animation.to_page);

        let elapsed = now.saturating_duration_since(started);
        let progress = if self.smooth_duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.smooth_duration.as_secs_f64()).min(1.0)
        };

        let previous = self.offset;
        if progress >= 1.0 {
            self.offset = target;
            self.animation = None;
        } else {
            let eased = 1.0 - (1.0 - progress).powi(3);
            self.offset = animation.from + (target - animation.from) * eased;
            self.animation = Some(animation);
        }
        self.offset != previous
    }
}

impl ScrollSurface for ScrollView {
    fn scroll_to_page(&mut self, index: usize) -> bool {
        if index >= self.mounted_pages {
            return false;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to_page: index,
            started: None,
        });
        true
    }
}
