/// What a screen asks its host to do next.
///
/// Screens never dismiss themselves; the host owns navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavSignal<T> {
    /// Leave the screen without a result.
    Close,
    /// Leave the screen and hand the chosen value back.
    Selected(T),
}

impl<T> NavSignal<T> {
    pub fn selected(self) -> Option<T> {
        match self {
            Self::Selected(value) => Some(value),
            Self::Close => None,
        }
    }
}
