//! Feature slices for the reader (update/render per tab).

pub mod notes;
pub mod reader;
pub mod stats;
pub mod statusline;
pub mod vocabulary;

use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;

/// What a tab key handler asks the reducer to do next.
#[derive(Debug, Default)]
pub struct KeyOutcome {
    pub effects: Vec<UiEffect>,
    pub overlay: Option<OverlayRequest>,
}

impl KeyOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effect(effect: UiEffect) -> Self {
        Self {
            effects: vec![effect],
            overlay: None,
        }
    }

    pub fn overlay(request: OverlayRequest) -> Self {
        Self {
            effects: Vec::new(),
            overlay: Some(request),
        }
    }
}
