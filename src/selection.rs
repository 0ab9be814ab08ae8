//! Selection coordinator for the master-detail panes
//!
//! Holds at most one selected id. The selected record is never cached: it is
//! re-derived from the live data set on every lookup, so a deleted or
//! filtered-out record simply reads as "nothing selected".

use serde::{Deserialize, Serialize};

use crate::directory::DistrictNode;
use crate::entity::Entity;

/// Viewport width (in CSS pixels) below which the layout collapses to one pane
pub const DEFAULT_COMPACT_BREAKPOINT: u32 = 768;

/// Anything the detail pane can show
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Entity {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for DistrictNode {
    fn id(&self) -> &str {
        &self.name
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// User intent that can change the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Pick(String),
    Close,
    Escape,
}

/// Current selection; replaced wholesale on every transition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(rename = "selectedId")]
    pub selected_id: Option<String>,
}

impl SelectionState {
    pub fn unselected() -> Self {
        Self::default()
    }

    pub fn selected(id: impl Into<String>) -> Self {
        Self {
            selected_id: Some(id.into()),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Transition for `event` against the live `items`.
    ///
    /// Picking an id that is not in `items` leaves the state unchanged.
    #[must_use]
    pub fn apply<T: Identified>(&self, event: &SelectionEvent, items: &[T]) -> Self {
        match event {
            SelectionEvent::Pick(id) if items.iter().any(|item| item.id() == id) => {
                Self::selected(id.clone())
            }
            SelectionEvent::Pick(id) => {
                tracing::debug!("Ignoring pick of unknown id {:?}", id);
                self.clone()
            }
            SelectionEvent::Close | SelectionEvent::Escape => Self::unselected(),
        }
    }

    /// Drop the selection if its id no longer exists in `items`
    #[must_use]
    pub fn reconcile<T: Identified>(&self, items: &[T]) -> Self {
        match self.resolve(items) {
            Some(_) => self.clone(),
            None => Self::unselected(),
        }
    }

    /// Re-derive the selected record from the live data set
    pub fn resolve<'a, T: Identified>(&self, items: &'a [T]) -> Option<&'a T> {
        let id = self.selected_id.as_deref()?;
        items.iter().find(|item| item.id() == id)
    }
}

/// Responsive layout class of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Small viewport: master and detail swap in a single pane
    Compact,
    /// Wide viewport: master and detail side by side
    Wide,
}

impl Layout {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Layout::Compact
        } else {
            Layout::Wide
        }
    }
}

/// Which panes the rendering layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaneVisibility {
    pub master: bool,
    pub detail: bool,
}

/// Pane policy keyed off the selection; not a second state machine
pub fn panes(layout: Layout, has_selection: bool) -> PaneVisibility {
    match layout {
        Layout::Wide => PaneVisibility {
            master: true,
            detail: true,
        },
        Layout::Compact => PaneVisibility {
            master: !has_selection,
            detail: has_selection,
        },
    }
}

/// Owns the [`SelectionState`] of one master-detail view
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    state: SelectionState,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Handle a user event and return the new state
    pub fn dispatch<T: Identified>(&mut self, event: SelectionEvent, items: &[T]) -> &SelectionState {
        self.state = self.state.apply(&event, items);
        &self.state
    }

    pub fn pick<T: Identified>(&mut self, id: &str, items: &[T]) -> &SelectionState {
        self.dispatch(SelectionEvent::Pick(id.to_string()), items)
    }

    pub fn close(&mut self) -> &SelectionState {
        self.state = SelectionState::unselected();
        &self.state
    }

    /// The selected record, or `None` if it is absent from `items`.
    ///
    /// A dangling id also clears the stored selection.
    pub fn current<'a, T: Identified>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.state = self.state.reconcile(items);
        self.state.resolve(items)
    }

    /// Pane visibility for `layout` given the live data set
    pub fn panes<T: Identified>(&self, layout: Layout, items: &[T]) -> PaneVisibility {
        panes(layout, self.state.resolve(items).is_some())
    }
}
