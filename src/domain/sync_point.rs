use serde::Serialize;

/// Position of a word on its page.
///
/// Page layout extraction is not implemented: every value produced by
/// [`Coordinates::unresolved`] is zero and must not be read as a real position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Coordinates {
    pub fn unresolved() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPoint {
    pub word: String,
    pub original_text: String,
    pub start: f64,
    pub end: f64,
    pub page: u32,
    pub coordinates: Coordinates,
}

impl SyncPoint {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
