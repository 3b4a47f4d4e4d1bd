use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Move,
    Up(PointerButton),
    Cancel,
}

/// A pointer sample. `position` is in page coordinates, the same space the
/// host measures the track in.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId::default(),
            kind: PointerKind::default(),
            event,
            position,
        }
    }

    pub fn down(position: Vec2) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), position)
    }

    pub fn moved(position: Vec2) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Vec2) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), position)
    }

    pub fn cancel(position: Vec2) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }

    /// True for events that end a press: `Up` and `Cancel`.
    pub fn is_release(&self) -> bool {
        matches!(
            self.event,
            PointerEventKind::Up(_) | PointerEventKind::Cancel
        )
    }

    pub fn is_move(&self) -> bool {
        matches!(self.event, PointerEventKind::Move)
    }
}
