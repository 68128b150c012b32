//! The two demo screens. They share one gesture screen and differ only in
//! their title and whether an image is shown before the first gesture.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Recognizers bound in code; starts on a random car.
    First,
    /// Same bindings, starts empty.
    Second,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 2] = [ScreenKind::First, ScreenKind::Second];

    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::First => "First",
            ScreenKind::Second => "Second",
        }
    }

    pub fn initial_category(self) -> Option<&'static str> {
        match self {
            ScreenKind::First => Some(crate::images::TAP_CYCLE[0]),
            ScreenKind::Second => None,
        }
    }
}
