//! The mark-class contract and the registry of mark types
//!
//! A mark type is one implementation of [`MarkClass`]: it declares an
//! attribute schema, initializes defaults, emits the constraints relating
//! its attributes, resolves attribute state into renderable primitives, and
//! derives the interactive affordances an editor needs. Mark types are
//! selected through a name-keyed [`MarkRegistry`] rather than inheritance,
//! so hosts can register their own variants alongside the built-ins.

mod image;
mod rect;

pub use image::{ImageMark, ImageProperties};
pub use rect::RectMark;

use std::collections::HashMap;

use thiserror::Error;

use crate::attrs::{AttributeSpec, AttributeStore};
use crate::coords::CoordinateSystem;
use crate::geometry::{BoundingBox, Point};
use crate::graphics::Element;
use crate::interaction::{DropZone, Handle, LinkAnchor, SnappingGuide};
use crate::resources::ResourceResolver;
use crate::solver::ConstraintSolver;

/// How the user creates an instance of a mark type on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationGesture {
    /// Drag out a rectangle; the gesture's start/end corners are written
    /// into the named attribute pairs
    DragRect {
        x_attributes: [&'static str; 2],
        y_attributes: [&'static str; 2],
    },
}

/// Display metadata for a mark type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkMetadata {
    pub display_name: &'static str,
    /// Icon identifier the editor's toolbar looks up
    pub icon: &'static str,
    pub creation: CreationGesture,
}

/// The polymorphic mark contract.
///
/// All query methods are pure functions of the attribute snapshot; none
/// mutate the store. The only writers of a store are `initialize_state`,
/// handle edits, and the solve pass.
pub trait MarkClass {
    fn metadata(&self) -> MarkMetadata;

    /// The fixed set of attributes every instance of this type carries
    fn schema(&self) -> &'static [AttributeSpec];

    /// Set every declared attribute to its documented default. Total: a
    /// freshly initialized store is immediately valid.
    fn initialize_state(&self, store: &mut AttributeStore);

    /// Emit this type's intrinsic constraints for the given instance.
    ///
    /// Purely structural: the emitted equations depend only on which
    /// attributes exist, never on their current values, so re-emission on
    /// every solve pass is idempotent.
    fn build_constraints(&self, element_id: &str, solver: &mut dyn ConstraintSolver);

    /// Resolve current attribute state into a renderable primitive tree,
    /// or None to skip drawing (instance or type-level visibility off)
    fn graphics(
        &self,
        store: &AttributeStore,
        cs: &dyn CoordinateSystem,
        offset: Point,
        resources: &dyn ResourceResolver,
    ) -> Option<Element>;

    /// Draggable handles for the current frame
    fn handles(&self, store: &AttributeStore) -> Vec<Handle>;

    /// Axis-aligned snapping references for cross-mark alignment
    fn snapping_guides(&self, store: &AttributeStore) -> Vec<SnappingGuide>;

    /// Data-drop targets along the shape boundary
    fn drop_zones(&self, store: &AttributeStore) -> Vec<DropZone>;

    /// Connection points with outward directions for linking marks
    fn link_anchors(&self, store: &AttributeStore) -> Vec<LinkAnchor>;

    /// Axis-aligned spatial extent of the instance
    fn bounding_box(&self, store: &AttributeStore) -> BoundingBox;
}

/// Errors from registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("mark type not found: {name}")]
    NotFound { name: String },

    #[error("duplicate mark type: {name}")]
    Duplicate { name: String },
}

type MarkFactory = fn() -> Box<dyn MarkClass>;

/// Name-keyed registry of mark type constructors
#[derive(Default)]
pub struct MarkRegistry {
    factories: HashMap<String, MarkFactory>,
}

impl MarkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in mark types registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("image", || Box::<ImageMark>::default())
            .expect("built-in registration cannot collide in an empty registry");
        registry
            .register("rect", || Box::<RectMark>::default())
            .expect("built-in registration cannot collide in an empty registry");
        registry
    }

    /// Register a mark type under a unique name
    pub fn register(&mut self, name: &str, factory: MarkFactory) -> Result<(), RegistryError> {
        if self.factories.contains_key(name) {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
            });
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    /// Instantiate a mark type by name
    pub fn create(&self, name: &str) -> Result<Box<dyn MarkClass>, RegistryError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered type names, sorted for stable listing
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
