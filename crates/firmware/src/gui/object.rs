//! Object pool with generation-checked handles.

use embedded_graphics::pixelcolor::Rgb888;
use heapless::Vec;
use ui::{Action, ToolkitError};

/// Objects alive at the same time, across all screens.
pub const MAX_OBJECTS: usize = 32;

/// Handle to a pooled object.
///
/// Freed slots are reused with a new generation, so a handle outliving its
/// object never reaches the newcomer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObjHandle {
    index: u8,
    generation: u16,
}

/// What an object is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjKind {
    /// Top-level screen.
    Screen,
    /// Text label.
    Label,
    /// Clickable button.
    Button,
}

/// A pooled object and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object {
    /// Kind.
    pub kind: ObjKind,
    /// Parent, `None` for screens.
    pub parent: Option<ObjHandle>,
    /// Own background colour.
    pub background: Option<Rgb888>,
    /// Own text colour; children inherit it.
    pub text_color: Option<Rgb888>,
    /// Label text.
    pub text: &'static str,
    /// Centred inside the parent rather than at its top-left corner.
    pub centered: bool,
    /// Action reported when clicked.
    pub action: Option<Action>,
    /// Screen reports swipes.
    pub gestures: bool,
}

impl Object {
    /// Unstyled object of `kind` under `parent`.
    pub const fn new(kind: ObjKind, parent: Option<ObjHandle>) -> Self {
        Self {
            kind,
            parent,
            background: None,
            text_color: None,
            text: "",
            centered: false,
            action: None,
            gestures: false,
        }
    }
}

struct Slot {
    generation: u16,
    object: Option<Object>,
}

/// Fixed-capacity object pool.
pub struct ObjectPool {
    slots: Vec<Slot, MAX_OBJECTS>,
}

impl ObjectPool {
    /// Empty pool.
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Store `object`, reusing a free slot when there is one.
    pub fn alloc(&mut self, object: Object) -> Result<ObjHandle, ToolkitError> {
        if let Some(parent) = object.parent {
            self.get(parent)?;
        }

        if let Some((index, slot)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.object.is_none())
        {
            let index = u8::try_from(index).map_err(|_| ToolkitError::OutOfObjects)?;
            slot.object = Some(object);
            return Ok(ObjHandle {
                index,
                generation: slot.generation,
            });
        }

        let index = u8::try_from(self.slots.len()).map_err(|_| ToolkitError::OutOfObjects)?;
        self.slots
            .push(Slot {
                generation: 0,
                object: Some(object),
            })
            .map_err(|_| ToolkitError::OutOfObjects)?;
        Ok(ObjHandle {
            index,
            generation: 0,
        })
    }

    /// Object behind `handle`.
    pub fn get(&self, handle: ObjHandle) -> Result<&Object, ToolkitError> {
        self.slots
            .get(usize::from(handle.index))
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.object.as_ref())
            .ok_or(ToolkitError::StaleHandle)
    }

    /// Mutable object behind `handle`.
    pub fn get_mut(&mut self, handle: ObjHandle) -> Result<&mut Object, ToolkitError> {
        self.slots
            .get_mut(usize::from(handle.index))
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.object.as_mut())
            .ok_or(ToolkitError::StaleHandle)
    }

    /// Top-level ancestor of `handle` (itself for screens).
    pub fn root_of(&self, handle: ObjHandle) -> Option<ObjHandle> {
        let mut current = handle;
        // Parent chains are at most MAX_OBJECTS long; the bound also guards
        // against a corrupt cycle.
        for _ in 0..MAX_OBJECTS {
            match self.get(current).ok()?.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
        None
    }

    /// Free `root` and everything under it. Returns how many objects went.
    pub fn free_tree(&mut self, root: ObjHandle) -> usize {
        let doomed: Vec<ObjHandle, MAX_OBJECTS> = self
            .iter()
            .map(|(h, _)| h)
            .filter(|&h| self.root_of(h) == Some(root))
            .collect();

        for handle in &doomed {
            if let Some(slot) = self.slots.get_mut(usize::from(handle.index)) {
                slot.object = None;
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        doomed.len()
    }

    /// Live objects with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjHandle, &Object)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let object = slot.object.as_ref()?;
            let index = u8::try_from(index).ok()?;
            Some((
                ObjHandle {
                    index,
                    generation: slot.generation,
                },
                object,
            ))
        })
    }

    /// Live children of `parent`.
    pub fn children(&self, parent: ObjHandle) -> impl Iterator<Item = (ObjHandle, &Object)> + '_ {
        self.iter().filter(move |(_, o)| o.parent == Some(parent))
    }

    /// Number of live objects.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.object.is_some()).count()
    }
}

impl Default for ObjectPool {
    fn default() -> Self {
        Self::new()
    }
}
