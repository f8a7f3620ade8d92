// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Components are plain records in a [`ComponentArena`], addressed by [`ComponentId`].
//! The layout engine never holds references into the host's widget tree, it only asks
//! each component's [`MeasurePrefSize`] how big its content wants to be.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{CommonResult, Insets, LayoutError, LogicalGridData, Size, SizeHints, size};

/// Measurement capability supplied by the host for each leaf component. Returns the
/// content size, without margins.
pub trait MeasurePrefSize {
    fn pref_size(&self, hints: SizeHints) -> Size;
}

impl<F> MeasurePrefSize for F
where
    F: Fn(SizeHints) -> Size,
{
    fn pref_size(&self, hints: SizeHints) -> Size { self(hints) }
}

/// Always the same size, whatever the hints.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedPrefSize(pub Size);

impl MeasurePrefSize for FixedPrefSize {
    fn pref_size(&self, _hints: SizeHints) -> Size { self.0 }
}

/// Content of a fixed `area` (in square pixels) that wraps into lines of
/// `line_height`, like a paragraph of text. Without a width hint it is laid out on a
/// single line. With a width hint (never narrower than `min_width`) it wraps, and the
/// height grows by whole lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WrappingPrefSize {
    pub area: i32,
    pub min_width: i32,
    pub line_height: i32,
}

impl MeasurePrefSize for WrappingPrefSize {
    fn pref_size(&self, hints: SizeHints) -> Size {
        let line_height = self.line_height.max(1);
        let single_line_width = (self.area.max(0) + line_height - 1) / line_height;
        let width = match hints.width_hint {
            Some(hint) => hint.max(self.min_width).min(single_line_width).max(1),
            None => single_line_width.max(1),
        };
        let lines = ((single_line_width + width - 1) / width).max(1);
        size!(width: width, height: lines * line_height)
    }
}

/// Index of a component in its [`ComponentArena`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ComponentId(pub usize);

impl Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct GridComponent {
    pub id: ComponentId,
    pub name: String,
    /// [`None`] is only allowed while the component is invisible.
    pub grid_data: Option<LogicalGridData>,
    pub margins: Insets,
    pub visible: bool,
    pub measure: Box<dyn MeasurePrefSize>,
}

impl Debug for GridComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridComponent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("grid_data", &self.grid_data)
            .field("margins", &self.margins)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl GridComponent {
    /// Measured content size plus margins.
    #[must_use]
    pub fn pref_size_with_margins(&self, hints: SizeHints) -> Size {
        self.measure.pref_size(hints).add_insets(self.margins)
    }
}

/// Ids of the visible components, in insertion order. Most grids are small.
pub type VisibleIds = SmallVec<[ComponentId; 16]>;

/// Owns the components of one grid. Removing a component leaves a hole, so ids stay
/// stable. Every mutation bumps [`ComponentArena::revision`].
#[derive(Debug, Default)]
pub struct ComponentArena {
    slots: Vec<Option<GridComponent>>,
    revision: u64,
}

impl ComponentArena {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        grid_data: Option<LogicalGridData>,
        measure: impl MeasurePrefSize + 'static,
    ) -> ComponentId {
        let id = ComponentId(self.slots.len());
        self.slots.push(Some(GridComponent {
            id,
            name: name.into(),
            grid_data,
            margins: Insets::default(),
            visible: true,
            measure: Box::new(measure),
        }));
        self.bump();
        id
    }

    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownComponent`] if `id` is not in this arena.
    pub fn remove(&mut self, id: ComponentId) -> CommonResult<GridComponent> {
        let it = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(LayoutError::UnknownComponent { component: id })?;
        self.bump();
        Ok(it)
    }

    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&GridComponent> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Counts as a mutation, even if the caller ends up not changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownComponent`] if `id` is not in this arena.
    pub fn get_mut(&mut self, id: ComponentId) -> CommonResult<&mut GridComponent> {
        let it = self
            .slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(LayoutError::UnknownComponent { component: id })?;
        self.revision += 1;
        Ok(it)
    }

    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownComponent`] if `id` is not in this arena.
    pub fn set_visible(&mut self, id: ComponentId, visible: bool) -> CommonResult<()> {
        self.get_mut(id)?.visible = visible;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownComponent`] if `id` is not in this arena.
    pub fn set_grid_data(
        &mut self,
        id: ComponentId,
        grid_data: Option<LogicalGridData>,
    ) -> CommonResult<()> {
        self.get_mut(id)?.grid_data = grid_data;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownComponent`] if `id` is not in this arena.
    pub fn set_margins(&mut self, id: ComponentId, margins: Insets) -> CommonResult<()> {
        self.get_mut(id)?.margins = margins;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridComponent> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn visible_ids(&self) -> VisibleIds {
        self.iter().filter(|it| it.visible).map(|it| it.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.iter().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn revision(&self) -> u64 { self.revision }

    fn bump(&mut self) { self.revision += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, insets};

    #[test]
    fn test_add_remove_keeps_ids_stable() {
        let mut arena = ComponentArena::new();
        let a = arena.add("a", None, FixedPrefSize(Size::ZERO));
        let b = arena.add("b", None, FixedPrefSize(Size::ZERO));
        let c = arena.add("c", None, FixedPrefSize(Size::ZERO));

        let removed = arena.remove(b).unwrap();
        assert_eq2!(removed.name, "b");
        assert_eq2!(arena.len(), 2);
        assert_eq2!(arena.get(c).map(|it| it.name.as_str()), Some("c"));
        assert!(arena.get(b).is_none());
        assert_eq2!(arena.visible_ids().as_slice(), &[a, c]);

        // Removing twice is an error.
        let report = arena.remove(b).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<LayoutError>(),
            Some(&LayoutError::UnknownComponent { component: b })
        );
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut arena = ComponentArena::new();
        let id = arena.add("a", Some(LogicalGridData::at(0, 0)), FixedPrefSize(Size::ZERO));
        let mut last = arena.revision();

        let mut assert_bumped = |arena: &ComponentArena| {
            assert!(arena.revision() > last);
            last = arena.revision();
        };

        arena.set_visible(id, false).unwrap();
        assert_bumped(&arena);
        arena.set_grid_data(id, None).unwrap();
        assert_bumped(&arena);
        arena.set_margins(id, insets!(all: 2)).unwrap();
        assert_bumped(&arena);
        arena.get_mut(id).unwrap().name = "renamed".into();
        assert_bumped(&arena);
    }

    #[test]
    fn test_unknown_id_keeps_revision() {
        let mut arena = ComponentArena::new();
        arena.add("a", Some(LogicalGridData::at(0, 0)), FixedPrefSize(Size::ZERO));
        let before = arena.revision();

        assert!(arena.get_mut(ComponentId(7)).is_err());
        assert!(arena.set_visible(ComponentId(7), false).is_err());
        assert!(arena.remove(ComponentId(7)).is_err());
        assert_eq2!(arena.revision(), before);
    }

    #[test]
    fn test_visible_ids_skip_invisible() {
        let mut arena = ComponentArena::new();
        let a = arena.add("a", None, FixedPrefSize(Size::ZERO));
        let b = arena.add("b", None, FixedPrefSize(Size::ZERO));
        arena.set_visible(a, false).unwrap();
        assert_eq2!(arena.visible_ids().as_slice(), &[b]);
    }

    #[test]
    fn test_closure_measure_and_margins() {
        let mut arena = ComponentArena::new();
        let id = arena.add("label", None, |hints: SizeHints| {
            size!(width: hints.width_hint.unwrap_or(50), height: 20)
        });
        arena.set_margins(id, insets!(top: 1, right: 2, bottom: 3, left: 4)).unwrap();
        let component = arena.get(id).unwrap();
        assert_eq2!(
            component.pref_size_with_margins(SizeHints::none()),
            size!(width: 56, height: 24)
        );
    }

    #[test]
    fn test_wrapping_pref_size() {
        let it = WrappingPrefSize {
            area: 3000,
            min_width: 40,
            line_height: 20,
        };
        // One line of 150px.
        assert_eq2!(it.pref_size(SizeHints::none()), size!(width: 150, height: 20));
        // Wraps into two lines.
        assert_eq2!(
            it.pref_size(SizeHints::none().with_width(100)),
            size!(width: 100, height: 40)
        );
        // Never narrower than min_width.
        assert_eq2!(
            it.pref_size(SizeHints::none().with_width(10)),
            size!(width: 40, height: 80)
        );
        // A wider hint does not make it wider than one line.
        assert_eq2!(
            it.pref_size(SizeHints::none().with_width(400)),
            size!(width: 150, height: 20)
        );
    }

    #[test]
    fn test_component_id_display() {
        assert_eq2!(ComponentId(3).to_string(), "#3");
    }
}
