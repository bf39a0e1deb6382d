//! Named animation clips and the player that owns them.
//!
//! Clips are looked up by name, and every action against a name that is
//! not loaded is skipped (with a debug log) instead of failing. The
//! locomotion machine leans on that: it issues play/stop/restart calls
//! without checking what the asset actually shipped with.

/// Clip names as they appear in the actor's animation set.
pub const CLIP_IDLE: &str = "IDLE";
pub const CLIP_WALK: &str = "Walk";
pub const CLIP_JUMP: &str = "Jump";

/// Which procedural pose family a clip samples from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClipKind {
    Idle,
    Walk,
    Jump,
}

pub struct Clip {
    pub name: String,
    pub kind: ClipKind,
    /// Seconds of playback accumulated since the last restart.
    pub time: f32,
    pub playing: bool,
}

/// Flat clip store attached to the actor entity.
#[derive(Default)]
pub struct ClipPlayer {
    clips: Vec<Clip>,
}

impl ClipPlayer {
    pub fn new() -> Self {
        Self { clips: Vec::new() }
    }

    /// The demo's clip set, with idle already playing.
    pub fn with_standard_clips() -> Self {
        let mut player = Self::new();
        player.add(CLIP_IDLE, ClipKind::Idle);
        player.add(CLIP_WALK, ClipKind::Walk);
        player.add(CLIP_JUMP, ClipKind::Jump);
        player.play(CLIP_IDLE);
        player
    }

    pub fn add(&mut self, name: &str, kind: ClipKind) {
        self.clips.push(Clip {
            name: name.to_string(),
            kind,
            time: 0.0,
            playing: false,
        });
    }

    pub fn find(&self, name: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.name == name)
    }

    pub fn play(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(clip) => clip.playing = true,
            None => log::debug!("no clip named '{name}', play skipped"),
        }
    }

    pub fn stop(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(clip) => clip.playing = false,
            None => log::debug!("no clip named '{name}', stop skipped"),
        }
    }

    /// Rewind to the first frame and start playing (one-shot clips such as
    /// the jump restart from the top every trigger).
    pub fn restart(&mut self, name: &str) {
        match self.find_mut(name) {
            Some(clip) => {
                clip.time = 0.0;
                clip.playing = true;
            }
            None => log::debug!("no clip named '{name}', restart skipped"),
        }
    }

    /// Advance playback time on every playing clip.
    pub fn advance(&mut self, dt: f32) {
        for clip in self.clips.iter_mut().filter(|c| c.playing) {
            clip.time += dt;
        }
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.find(name).is_some_and(|c| c.playing)
    }

    /// The clip currently driving the actor's pose.
    pub fn active(&self) -> Option<&Clip> {
        self.clips.iter().find(|c| c.playing)
    }
}
