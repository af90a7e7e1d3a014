use textlens_types::{EncodedImage, ImageSource, RecognitionOutcome};

/// Session state: image -> crop -> recognized text, plus the transient
/// "copied" flag. All transitions run on the app's single event loop.
///
/// Generations guard against out-of-order recognition results: every crop
/// confirm bumps the counter, and a result is applied only while its
/// generation is still current. The copied flag uses the same scheme with
/// tickets so a slow expiry timer cannot clear a newer flag.
#[derive(Default)]
pub struct SessionState {
    image: Option<ImageSource>,
    cropped: Option<EncodedImage>,
    outcome: Option<RecognitionOutcome>,
    generation: u64,
    copied_ticket: Option<u64>,
    next_ticket: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image unconditionally. A new image invalidates the
    /// previous crop and its result.
    pub fn load_image(&mut self, source: ImageSource) {
        self.image = Some(source);
        self.cropped = None;
        self.outcome = None;
    }

    /// Store the confirmed crop and return the new generation, or `None`
    /// when no image is loaded (a crop cannot outlive its source).
    pub fn confirm_crop(&mut self, region: EncodedImage) -> Option<u64> {
        self.image.as_ref()?;

        self.generation += 1;
        self.cropped = Some(region);
        Some(self.generation)
    }

    /// Apply a settled recognition result. Returns `false` for stale
    /// results: a newer crop was confirmed since, or the crop is gone.
    pub fn apply_recognition(&mut self, generation: u64, outcome: RecognitionOutcome) -> bool {
        if self.cropped.is_none() || generation != self.generation {
            return false;
        }

        self.outcome = Some(outcome);
        true
    }

    /// Back to the initial empty state. Counters stay monotonic so results
    /// still in flight can never match again.
    pub fn cancel(&mut self) {
        self.image = None;
        self.cropped = None;
        self.outcome = None;
        self.copied_ticket = None;
    }

    /// Raise the "copied" flag and return the ticket its expiry must present.
    pub fn mark_copied(&mut self) -> u64 {
        self.next_ticket += 1;
        self.copied_ticket = Some(self.next_ticket);
        self.next_ticket
    }

    /// Clear the "copied" flag if `ticket` is the one that raised it.
    /// Returns whether the flag was cleared.
    pub fn expire_copied(&mut self, ticket: u64) -> bool {
        if self.copied_ticket == Some(ticket) {
            self.copied_ticket = None;
            true
        } else {
            false
        }
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    pub fn cropped(&self) -> Option<&EncodedImage> {
        self.cropped.as_ref()
    }

    pub fn outcome(&self) -> Option<&RecognitionOutcome> {
        self.outcome.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_copied(&self) -> bool {
        self.copied_ticket.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
            && self.cropped.is_none()
            && self.outcome.is_none()
            && self.copied_ticket.is_none()
    }
}

#[cfg(test)]
mod tests {
    use textlens_types::{ImageOrigin, NO_TEXT_FALLBACK};

    use super::*;

    fn source(tag: u8) -> ImageSource {
        ImageSource {
            bytes: vec![tag; 4],
            origin: ImageOrigin::Dropped,
        }
    }

    fn region(tag: &str) -> EncodedImage {
        EncodedImage(tag.to_string())
    }

    fn outcome(text: &str) -> RecognitionOutcome {
        RecognitionOutcome {
            text: text.to_string(),
        }
    }

    #[test]
    fn load_image_keeps_only_latest_and_clears_downstream() {
        let mut state = SessionState::new();

        state.load_image(source(1));
        let generation = state.confirm_crop(region("a")).unwrap();
        assert!(state.apply_recognition(generation, outcome("first")));

        state.load_image(source(2));
        assert_eq!(state.image().unwrap().bytes, vec![2; 4]);
        assert!(state.cropped().is_none());
        assert!(state.outcome().is_none());
    }

    #[test]
    fn cancel_restores_initial_state() {
        let mut state = SessionState::new();

        state.load_image(source(1));
        let generation = state.confirm_crop(region("a")).unwrap();
        state.apply_recognition(generation, outcome("text"));
        state.mark_copied();

        state.cancel();
        assert!(state.is_empty());

        // Cancel on an already-empty session is a no-op
        state.cancel();
        assert!(state.is_empty());
    }

    #[test]
    fn confirm_crop_requires_an_image() {
        let mut state = SessionState::new();
        assert_eq!(state.confirm_crop(region("a")), None);
        assert!(state.cropped().is_none());
    }

    #[test]
    fn stale_result_is_discarded_after_recrop() {
        let mut state = SessionState::new();
        state.load_image(source(1));

        let gen_a = state.confirm_crop(region("a")).unwrap();
        let gen_b = state.confirm_crop(region("b")).unwrap();
        assert!(gen_b > gen_a);

        // B settles first, then A arrives late
        assert!(state.apply_recognition(gen_b, outcome("from b")));
        assert!(!state.apply_recognition(gen_a, outcome("from a")));
        assert_eq!(state.outcome().unwrap().text, "from b");
    }

    #[test]
    fn result_after_cancel_is_discarded() {
        let mut state = SessionState::new();
        state.load_image(source(1));
        let generation = state.confirm_crop(region("a")).unwrap();

        state.cancel();
        assert!(!state.apply_recognition(generation, outcome("late")));
        assert!(state.outcome().is_none());
    }

    #[test]
    fn fallback_outcome_is_a_successful_result() {
        let mut state = SessionState::new();
        state.load_image(source(1));
        let generation = state.confirm_crop(region("a")).unwrap();

        assert!(state.apply_recognition(generation, RecognitionOutcome::no_text()));
        let outcome = state.outcome().unwrap();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.text, NO_TEXT_FALLBACK);
    }

    #[test]
    fn copied_flag_ignores_stale_tickets() {
        let mut state = SessionState::new();

        let first = state.mark_copied();
        let second = state.mark_copied();
        assert_ne!(first, second);

        // The first copy's timer fires after a second copy was made
        assert!(!state.expire_copied(first));
        assert!(state.is_copied());

        assert!(state.expire_copied(second));
        assert!(!state.is_copied());

        // Expiry on a cleared flag does nothing
        assert!(!state.expire_copied(second));
    }
}
