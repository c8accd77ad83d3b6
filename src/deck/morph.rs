//! Minimal shared-element morph
//!
//! Consumes the controller's transitions: when a card expands, the detail
//! panel grows out of the compact card's rectangle over a few ticks; when
//! it collapses, an outline shrinks back into the card. Cards are matched
//! by `TransitionKey` only, so the controller stays unaware of animation.

use super::transition::{Transition, TransitionKey, TransitionKind};
use ratatui::layout::Rect;

#[derive(Debug, Clone)]
struct Morph {
    key: TransitionKey,
    kind: TransitionKind,
    /// Compact card rectangle
    origin: Rect,
    /// Panel rectangle when the transition started (collapse only)
    panel: Option<Rect>,
    frame: u16,
}

#[derive(Debug, Clone)]
pub struct MorphLayer {
    /// Ticks per transition; 0 disables animation
    frames: u16,
    active: Option<Morph>,
}

impl MorphLayer {
    pub fn new(frames: u16) -> Self {
        Self {
            frames,
            active: None,
        }
    }

    /// Start animating `transition`.
    ///
    /// `origin` is the compact card sharing the transition key; `panel` is
    /// the last drawn detail rectangle (needed to shrink on collapse).
    /// Without an origin there is nothing to morph from and the layer stays idle.
    pub fn begin(&mut self, transition: &Transition, origin: Option<Rect>, panel: Option<Rect>) {
        self.active = match origin {
            Some(origin) if self.frames > 0 => Some(Morph {
                key: transition.key.clone(),
                kind: transition.kind,
                origin,
                panel,
                frame: 0,
            }),
            _ => None,
        };
    }

    /// Advance one animation frame
    pub fn tick(&mut self) {
        if let Some(morph) = &mut self.active {
            morph.frame += 1;
            if morph.frame >= self.frames {
                self.active = None;
            }
        }
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Rectangle to draw the expanding panel for `key` this frame
    pub fn panel_rect(&self, key: &TransitionKey, target: Rect) -> Rect {
        match &self.active {
            Some(m) if &m.key == key && m.kind == TransitionKind::Expand => {
                lerp_rect(m.origin, target, m.frame + 1, self.frames)
            }
            _ => target,
        }
    }

    /// Outline of a collapsing panel, if one is in flight
    pub fn collapse_outline(&self) -> Option<Rect> {
        let m = self.active.as_ref()?;
        if m.kind != TransitionKind::Collapse {
            return None;
        }
        let panel = m.panel?;
        Some(lerp_rect(panel, m.origin, m.frame + 1, self.frames))
    }
}

/// Linear interpolation `from` → `to` at `step / steps`
fn lerp_rect(from: Rect, to: Rect, step: u16, steps: u16) -> Rect {
    if steps == 0 || step >= steps {
        return to;
    }
    let lerp = |a: u16, b: u16| -> u16 {
        let (a, b) = (i32::from(a), i32::from(b));
        let v = a + (b - a) * i32::from(step) / i32::from(steps);
        v.clamp(0, i32::from(u16::MAX)) as u16
    };
    Rect::new(
        lerp(from.x, to.x),
        lerp(from.y, to.y),
        lerp(from.width, to.width),
        lerp(from.height, to.height),
    )
}
