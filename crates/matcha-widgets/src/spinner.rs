//! Loading-spinner frame sets and a minimal frame cycler.
//!
//! A [`Spinner`] holds no timer of its own: whoever owns it advances it, and
//! in practice that is an [`InputField`](crate::input_field::InputField)
//! forwarding the runtime's animation tick while it is loading.

/// Built-in spinner frame sets.
pub mod frames {
    /// Braille dot spinner cycling through ten positions.
    pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    /// Classic ASCII line spinner: |, /, -, \.
    pub const LINE: &[&str] = &["|", "/", "-", "\\"];
    /// Compact braille dot spinner with six frames.
    pub const MINI_DOT: &[&str] = &["⠋", "⠙", "⠸", "⠴", "⠦", "⠇"];
    /// Growing ellipsis from empty to three dots.
    pub const ELLIPSIS: &[&str] = &["", ".", "..", "..."];
}

/// An indeterminate progress indicator that steps through a frame set.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    index: usize,
}

impl Spinner {
    /// Create a new spinner using the [`frames::DOTS`] frame set.
    pub fn new() -> Self {
        Self {
            frames: frames::DOTS,
            index: 0,
        }
    }

    /// Set the frame set used by this spinner (e.g. [`frames::LINE`]).
    pub fn with_frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = frames;
        self.index = 0;
        self
    }

    /// Advance to the next frame, wrapping around at the end of the set.
    pub fn advance(&mut self) {
        if !self.frames.is_empty() {
            self.index = (self.index + 1) % self.frames.len();
        }
    }

    /// Return the current frame.
    pub fn current(&self) -> &'static str {
        if self.frames.is_empty() {
            ""
        } else {
            self.frames[self.index]
        }
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_frame() {
        let spinner = Spinner::new().with_frames(frames::LINE);
        assert_eq!(spinner.current(), "|");
    }

    #[test]
    fn advance_steps_through_frames() {
        let mut spinner = Spinner::new().with_frames(frames::LINE);
        spinner.advance();
        assert_eq!(spinner.current(), "/");
        spinner.advance();
        assert_eq!(spinner.current(), "-");
    }

    #[test]
    fn advance_wraps_around() {
        let mut spinner = Spinner::new().with_frames(frames::LINE);
        for _ in 0..frames::LINE.len() {
            spinner.advance();
        }
        assert_eq!(spinner.current(), "|");
    }

    #[test]
    fn reset_rewinds() {
        let mut spinner = Spinner::new().with_frames(frames::ELLIPSIS);
        spinner.advance();
        spinner.advance();
        spinner.reset();
        assert_eq!(spinner.current(), "");
    }

    #[test]
    fn empty_frame_set_is_harmless() {
        let mut spinner = Spinner::new().with_frames(&[]);
        spinner.advance();
        assert_eq!(spinner.current(), "");
    }
}
