mod clips;

pub use clips::{Clip, ClipKind, ClipPlayer, CLIP_IDLE, CLIP_JUMP, CLIP_WALK};
