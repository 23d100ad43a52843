use std::fmt;

/// Stable player id. Only 1 and 2 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(1);
    pub const TWO: PlayerId = PlayerId(2);

    pub fn new(id: u8) -> Option<Self> {
        match id {
            1 | 2 => Some(Self(id)),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        if self == Self::ONE { Self::TWO } else { Self::ONE }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    Human,
    Ai,
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRole::Human => write!(f, "Human"),
            PlayerRole::Ai => write!(f, "AI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    role: PlayerRole,
}

impl Player {
    pub fn new(id: PlayerId, role: PlayerRole) -> Self {
        Self { id, role }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (player {})", self.role, self.id)
    }
}
