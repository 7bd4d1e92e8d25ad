//! Sprites domain: animation sequences and per-actor frame bookkeeping.

use std::collections::HashMap;

use bevy::prelude::*;

pub const PLAYER_IDLE: &str = "player/idle";
pub const PLAYER_RUN: &str = "player/run";
pub const PLAYER_JUMP_IMAGE: &str = "player/jump";
pub const PLAYER_SPIN_IMAGE: &str = "player/spin";
pub const FX_TURN: &str = "fx/turn";
pub const FX_JUMP: &str = "fx/jump";

/// A fixed sequence of frame keys, one entry per tick. Built from
/// `(frame index, duration)` runs so timing is baked into the length.
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    frames: Vec<String>,
}

impl AnimationSequence {
    pub fn from_timings(base: &str, timings: &[(u32, u32)]) -> Self {
        let mut frames = Vec::new();
        for (index, duration) in timings {
            for _ in 0..*duration {
                frames.push(format!("{base}{index}"));
            }
        }
        Self { frames }
    }

    pub fn len(&self) -> i32 {
        self.frames.len() as i32
    }

    /// Frame key at `index`, clamped into range rather than failing.
    pub fn frame_key(&self, index: i32) -> &str {
        let clamped = index.clamp(0, self.len() - 1) as usize;
        &self.frames[clamped]
    }
}

/// Explicit asset cache for animation sequences, keyed by stable ids and
/// owned by the app rather than being process-global.
#[derive(Resource, Debug, Default)]
pub struct AnimationLibrary {
    sequences: HashMap<String, AnimationSequence>,
}

impl AnimationLibrary {
    pub fn insert(&mut self, id: &str, sequence: AnimationSequence) {
        self.sequences.insert(id.to_string(), sequence);
    }

    pub fn get(&self, id: &str) -> Option<&AnimationSequence> {
        self.sequences.get(id)
    }
}

/// Per-actor animation cursor: an optional current sequence with a frame
/// index, and a static fallback image shown while no sequence is set.
#[derive(Component, Debug, Default)]
pub struct ActorAnimation {
    pub sequence: Option<String>,
    pub frame: i32,
    pub looping: bool,
    pub image: Option<String>,
}

impl ActorAnimation {
    pub fn new(sequence: &str) -> Self {
        Self {
            sequence: Some(sequence.to_string()),
            ..default()
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Switches the current sequence without resetting the frame cursor; the
    /// next `change_frame` call wraps it into the new sequence's range.
    pub fn play(&mut self, id: &str) {
        if self.sequence.as_deref() != Some(id) {
            self.sequence = Some(id.to_string());
        }
    }

    pub fn clear_sequence(&mut self) {
        self.sequence = None;
    }

    pub fn set_image(&mut self, image: &str) {
        if self.image.as_deref() != Some(image) {
            self.image = Some(image.to_string());
        }
    }

    /// Advances the frame cursor. A looping sequence wraps at both ends; a
    /// non-looping one clamps to its first or last frame.
    pub fn change_frame(&mut self, amount: i32, library: &AnimationLibrary) {
        self.frame += amount;
        let Some(id) = &self.sequence else {
            return;
        };
        let Some(sequence) = library.get(id) else {
            return;
        };
        let len = sequence.len();
        if len == 0 {
            self.frame = 0;
            return;
        }
        while self.frame < 0 {
            if self.looping {
                self.frame += len;
            } else {
                self.frame = 0;
            }
        }
        while self.frame >= len {
            if self.looping {
                self.frame -= len;
            } else {
                self.frame = len - 1;
            }
        }
    }

    /// The frame key the renderer should draw this frame, if any.
    pub fn current_key<'a>(&'a self, library: &'a AnimationLibrary) -> Option<&'a str> {
        match &self.sequence {
            Some(id) => library.get(id).map(|sequence| sequence.frame_key(self.frame)),
            None => self.image.as_deref(),
        }
    }
}

/// Seeds the library with the built-in sequences. Frame timings mirror the
/// shipped player art: a slow two-frame idle and a six-frame run cycle.
pub(crate) fn build_library(mut library: ResMut<AnimationLibrary>) {
    seed_library(&mut library);
}

pub(crate) fn seed_library(library: &mut AnimationLibrary) {
    library.insert(
        PLAYER_IDLE,
        AnimationSequence::from_timings("player/idle/stand_", &[(0, 40), (1, 20)]),
    );
    library.insert(
        PLAYER_RUN,
        AnimationSequence::from_timings(
            "player/run/run_",
            &[(0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4)],
        ),
    );
    library.insert(
        FX_TURN,
        AnimationSequence::from_timings("fx/turn/turn_", &[(0, 6), (1, 6), (2, 6)]),
    );
    library.insert(
        FX_JUMP,
        AnimationSequence::from_timings("fx/jump/jump_", &[(0, 4), (1, 4), (2, 4), (3, 4)]),
    );
}
