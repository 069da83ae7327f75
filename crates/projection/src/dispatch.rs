//! Declarative input binding.
//!
//! The view layer turns pointer and keyboard listener callbacks into
//! [`InputEvent`]s; this dispatcher maps them onto projector transitions.
//! Drawing and reacting stay decoupled: the render pass never attaches
//! listeners itself.

use catalog::EventId;

use crate::projector::Projector;

/// An interaction with one rendered list card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerEnter(EventId),
    PointerLeave(EventId),
    FocusGained(EventId),
    FocusLost(EventId),
    /// Click, Enter, or Space on a card.
    Activate(EventId),
}

pub fn dispatch_input(projector: &mut Projector, event: InputEvent) {
    match event {
        InputEvent::PointerEnter(id) | InputEvent::FocusGained(id) => projector.highlight(&id),
        InputEvent::PointerLeave(id) | InputEvent::FocusLost(id) => projector.unhighlight(&id),
        InputEvent::Activate(id) => projector.focus(&id),
    }
}
