use crate::config;
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    total_frames: usize,
    max_scroll: u32,
}

impl FrameSequence {
    pub fn new(total_frames: usize, max_scroll: u32) -> Result<Self, SiteError> {
        if total_frames == 0 {
            return Err(SiteError::ZeroFrames);
        }
        if max_scroll == 0 {
            return Err(SiteError::ZeroScrollRange);
        }
        Ok(Self {
            total_frames,
            max_scroll,
        })
    }

    pub fn hero() -> Result<Self, SiteError> {
        Self::new(config::HERO_TOTAL_FRAMES, config::HERO_MAX_SCROLL)
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    // Offset 0 maps to the last position, `max_scroll` and beyond to 0.
    pub fn position_for_scroll(&self, scroll_y: f64) -> usize {
        let max = self.max_scroll as f64;
        let clamped = if scroll_y.is_nan() {
            0.0
        } else {
            scroll_y.clamp(0.0, max)
        };
        let fraction = clamped / max;
        let last = self.total_frames - 1;
        let step = (fraction * last as f64).floor() as usize;
        last - step.min(last)
    }

    // Images are stacked from the highest number down, so the last position
    // holds frame_000.
    pub fn image_at(&self, position: usize) -> usize {
        (self.total_frames - 1).saturating_sub(position)
    }

    pub fn path_at(&self, position: usize) -> String {
        format!(
            "{}/frames/frame_{:03}.png",
            config::ASSET_BASE,
            self.image_at(position)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSwap {
    pub hide: usize,
    pub show: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Waiting,
    Ready(Option<FrameSwap>),
}

#[derive(Clone, Debug)]
pub struct FramePlayer {
    sequence: FrameSequence,
    status: Vec<FrameStatus>,
    visible: usize,
}

impl FramePlayer {
    pub fn new(sequence: FrameSequence) -> Self {
        Self {
            status: vec![FrameStatus::Pending; sequence.total_frames()],
            visible: sequence.position_for_scroll(0.0),
            sequence,
        }
    }

    pub fn sequence(&self) -> FrameSequence {
        self.sequence
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn mark_loaded(&mut self, position: usize) {
        if let Some(status) = self.status.get_mut(position) {
            *status = FrameStatus::Loaded;
        }
    }

    pub fn mark_failed(&mut self, position: usize) {
        if let Some(status) = self.status.get_mut(position) {
            *status = FrameStatus::Failed;
        }
    }

    // Seeks to `scroll_y()` only when this was the last frame outstanding.
    pub fn settle(
        &mut self,
        position: usize,
        loaded: bool,
        scroll_y: impl FnOnce() -> f64,
    ) -> Settled {
        let was_ready = self.is_ready();
        if loaded {
            self.mark_loaded(position);
        } else {
            self.mark_failed(position);
        }
        if was_ready || !self.is_ready() {
            return Settled::Waiting;
        }
        Settled::Ready(self.seek(scroll_y()))
    }

    pub fn is_ready(&self) -> bool {
        self.status.iter().all(|s| *s != FrameStatus::Pending)
    }

    pub fn failed_count(&self) -> usize {
        self.status
            .iter()
            .filter(|s| **s == FrameStatus::Failed)
            .count()
    }

    // Ties go to the lower position.
    pub fn resolve(&self, target: usize) -> Option<usize> {
        let len = self.status.len();
        if target >= len {
            return None;
        }
        for distance in 0..len {
            if let Some(lower) = target.checked_sub(distance) {
                if self.status[lower] == FrameStatus::Loaded {
                    return Some(lower);
                }
            }
            let upper = target + distance;
            if upper < len && self.status[upper] == FrameStatus::Loaded {
                return Some(upper);
            }
        }
        None
    }

    pub fn seek(&mut self, scroll_y: f64) -> Option<FrameSwap> {
        if !self.is_ready() {
            return None;
        }
        let target = self.sequence.position_for_scroll(scroll_y);
        let show = self.resolve(target)?;
        if show == self.visible {
            return None;
        }
        let swap = FrameSwap {
            hide: self.visible,
            show,
        };
        self.visible = show;
        Some(swap)
    }

    pub fn opacity(&self, position: usize) -> &'static str {
        if position == self.visible {
            "1"
        } else {
            "0"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loaded_player(total: usize, max_scroll: u32) -> FramePlayer {
        let mut player = FramePlayer::new(FrameSequence::new(total, max_scroll).unwrap());
        for i in 0..total {
            player.mark_loaded(i);
        }
        player
    }

    fn visible_path(player: &FramePlayer) -> String {
        player.sequence().path_at(player.visible())
    }

    // Opacity table as the DOM holds it after mount plus the given swaps.
    struct Screen(Vec<bool>);

    impl Screen {
        fn mounted(player: &FramePlayer) -> Self {
            let total = player.sequence().total_frames();
            Screen((0..total).map(|i| player.opacity(i) == "1").collect())
        }

        fn apply(&mut self, swap: Option<FrameSwap>) {
            if let Some(swap) = swap {
                self.0[swap.hide] = false;
                self.0[swap.show] = true;
            }
        }

        fn visible(&self) -> Vec<usize> {
            self.0
                .iter()
                .enumerate()
                .filter(|(_, v)| **v)
                .map(|(i, _)| i)
                .collect()
        }
    }

    #[test]
    fn rejects_empty_or_flat_configuration() {
        assert!(matches!(FrameSequence::new(0, 680), Err(SiteError::ZeroFrames)));
        assert!(matches!(FrameSequence::new(85, 0), Err(SiteError::ZeroScrollRange)));
    }

    #[test]
    fn hero_scenario_maps_expected_positions() {
        let seq = FrameSequence::new(85, 680).unwrap();
        assert_eq!(seq.position_for_scroll(0.0), 84);
        assert_eq!(seq.position_for_scroll(340.0), 42);
        assert_eq!(seq.position_for_scroll(680.0), 0);
        assert_eq!(seq.position_for_scroll(1000.0), 0);
    }

    #[test]
    fn negative_and_nan_offsets_behave_like_the_top() {
        let seq = FrameSequence::new(85, 680).unwrap();
        assert_eq!(seq.position_for_scroll(-20.0), 84);
        assert_eq!(seq.position_for_scroll(f64::NAN), 84);
    }

    #[test]
    fn single_frame_is_static() {
        let seq = FrameSequence::new(1, 680).unwrap();
        for s in [0.0, 10.0, 680.0, 5000.0] {
            assert_eq!(seq.position_for_scroll(s), 0);
        }
        assert_eq!(seq.path_at(0), "/images/frames/frame_000.png");
    }

    #[test]
    fn positions_hold_images_in_descending_order() {
        let seq = FrameSequence::new(85, 680).unwrap();
        assert_eq!(seq.path_at(0), "/images/frames/frame_084.png");
        assert_eq!(seq.path_at(77), "/images/frames/frame_007.png");
        assert_eq!(seq.path_at(84), "/images/frames/frame_000.png");
    }

    #[test]
    fn animation_plays_forward_through_the_images() {
        let mut player = loaded_player(85, 680);
        assert_eq!(visible_path(&player), "/images/frames/frame_000.png");
        assert_eq!(player.seek(0.0), None);
        player.seek(340.0);
        assert_eq!(visible_path(&player), "/images/frames/frame_042.png");
        player.seek(680.0);
        assert_eq!(visible_path(&player), "/images/frames/frame_084.png");
        player.seek(0.0);
        assert_eq!(visible_path(&player), "/images/frames/frame_000.png");
    }

    #[test]
    fn seek_waits_for_every_frame_to_settle() {
        let mut player = FramePlayer::new(FrameSequence::new(4, 100).unwrap());
        player.mark_loaded(0);
        player.mark_loaded(1);
        player.mark_loaded(2);
        assert!(!player.is_ready());
        assert_eq!(player.seek(100.0), None);
        assert_eq!(player.visible(), 3);

        player.mark_failed(3);
        assert!(player.is_ready());
        // position 3 failed, nearest loaded neighbour is 2
        assert_eq!(player.seek(0.0), Some(FrameSwap { hide: 3, show: 2 }));
        assert_eq!(player.failed_count(), 1);
    }

    #[test]
    fn last_settled_frame_catches_up_with_scroll() {
        let mut player = FramePlayer::new(FrameSequence::new(3, 100).unwrap());
        let mut reads = 0;
        assert_eq!(player.settle(0, true, || { reads += 1; 100.0 }), Settled::Waiting);
        assert_eq!(player.settle(1, false, || { reads += 1; 100.0 }), Settled::Waiting);
        assert_eq!(reads, 0);
        assert_eq!(
            player.settle(2, true, || 100.0),
            Settled::Ready(Some(FrameSwap { hide: 2, show: 0 }))
        );
        // late duplicate events do not seek again
        assert_eq!(player.settle(2, true, || 0.0), Settled::Waiting);
        assert_eq!(player.visible(), 0);
    }

    #[test]
    fn settling_at_the_top_keeps_the_mounted_frame() {
        let mut player = FramePlayer::new(FrameSequence::new(3, 100).unwrap());
        player.settle(0, true, || 0.0);
        player.settle(1, true, || 0.0);
        assert_eq!(player.settle(2, true, || 0.0), Settled::Ready(None));
        assert_eq!(player.visible(), 2);
    }

    #[test]
    fn resolve_prefers_lower_position_on_ties() {
        let mut player = FramePlayer::new(FrameSequence::new(5, 100).unwrap());
        player.mark_loaded(1);
        player.mark_failed(2);
        player.mark_loaded(3);
        assert_eq!(player.resolve(2), Some(1));
        assert_eq!(player.resolve(4), Some(3));
        assert_eq!(player.resolve(9), None);
    }

    #[test]
    fn nothing_loaded_keeps_initial_frame() {
        let mut player = FramePlayer::new(FrameSequence::new(3, 100).unwrap());
        for i in 0..3 {
            player.mark_failed(i);
        }
        assert_eq!(player.seek(50.0), None);
        assert_eq!(player.visible(), 2);
    }

    #[test]
    fn repeated_offsets_produce_no_swaps() {
        let mut player = loaded_player(85, 680);
        assert!(player.seek(340.0).is_some());
        assert_eq!(player.seek(340.0), None);
        assert_eq!(player.opacity(42), "1");
        assert_eq!(player.opacity(41), "0");
    }

    proptest! {
        #[test]
        fn exactly_one_frame_visible(offsets in prop::collection::vec(-100.0f64..2000.0, 1..40)) {
            let mut player = loaded_player(85, 680);
            let mut screen = Screen::mounted(&player);
            prop_assert_eq!(screen.visible(), vec![84]);
            for s in offsets {
                screen.apply(player.seek(s));
                let expected = player.sequence().position_for_scroll(s);
                prop_assert_eq!(screen.visible(), vec![expected]);
            }
        }

        #[test]
        fn position_never_increases_with_scroll(a in 0.0f64..=680.0, b in 0.0f64..=680.0) {
            let seq = FrameSequence::new(85, 680).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(seq.position_for_scroll(hi) <= seq.position_for_scroll(lo));
        }

        #[test]
        fn past_the_ceiling_matches_the_ceiling(extra in 0.0f64..1.0e6, frames in 1usize..200, max in 1u32..5000) {
            let seq = FrameSequence::new(frames, max).unwrap();
            prop_assert_eq!(seq.position_for_scroll(max as f64 + extra), seq.position_for_scroll(max as f64));
            prop_assert_eq!(seq.position_for_scroll(max as f64), 0);
            prop_assert_eq!(seq.position_for_scroll(0.0), frames - 1);
        }
    }
}
