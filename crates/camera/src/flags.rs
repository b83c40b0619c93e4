/// Per-frame movement intent, one flag per direction.
///
/// The windowing layer sets these from key state (pressed = set, released =
/// cleared); the camera only reads them. Multiple flags may be set at once
/// and their effects are additive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
}

impl MovementFlags {
    /// Whether any movement is requested this frame.
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right || self.forward || self.backward
    }
}
