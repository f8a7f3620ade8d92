// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`GridContainer`] is the host side of the layout engine. It owns the components,
//! remembers whether its layout is still valid, and memoizes its preferred size.
//!
//! The contract is the usual invalidate / validate cycle:
//!
//! 1. Mutations (components added, removed, shown, hidden, moved, container resized)
//!    mark the layout invalid. They don't lay anything out.
//! 2. [`GridContainer::validate_layout`] lays out once, and only if the layout is
//!    invalid. Batch mutations, then validate.
//!
//! Everything is synchronous and single threaded.

use rustc_hash::FxHashMap;

use crate::{CommonResult, ComponentArena, ComponentId, DEBUG_GRID_LAYOUT, GridComponent,
            Insets, LogicalGridData, LogicalGridLayout, LogicalGridLayoutConfig,
            MeasurePrefSize, Rect, Size, SizeHints};

#[derive(Debug)]
pub struct GridContainer {
    arena: ComponentArena,
    layout: LogicalGridLayout,
    insets: Insets,
    size: Size,
    valid: bool,
    bounds: Vec<(ComponentId, Rect)>,
    pref_size_memo: FxHashMap<SizeHints, Size>,
}

mod constructor {
    use super::{ComponentArena, FxHashMap, GridContainer, Insets, LogicalGridLayout,
                LogicalGridLayoutConfig, Size};

    impl GridContainer {
        #[must_use]
        pub fn new(config: LogicalGridLayoutConfig) -> Self {
            Self {
                arena: ComponentArena::new(),
                layout: LogicalGridLayout::new(config),
                insets: Insets::default(),
                size: Size::ZERO,
                valid: false,
                bounds: vec![],
                pref_size_memo: FxHashMap::default(),
            }
        }
    }

    impl Default for GridContainer {
        fn default() -> Self { Self::new(LogicalGridLayoutConfig::default()) }
    }
}

mod mutators {
    use super::{CommonResult, ComponentId, GridComponent, GridContainer, Insets,
                LogicalGridData, LogicalGridLayoutConfig, MeasurePrefSize, Size};

    impl GridContainer {
        pub fn add_component(
            &mut self,
            name: impl Into<String>,
            grid_data: Option<LogicalGridData>,
            measure: impl MeasurePrefSize + 'static,
        ) -> ComponentId {
            let id = self.arena.add(name, grid_data, measure);
            self.invalidate_layout();
            id
        }

        /// # Errors
        ///
        /// Returns [`crate::LayoutError::UnknownComponent`] if `id` is unknown.
        pub fn remove_component(&mut self, id: ComponentId) -> CommonResult<GridComponent> {
            let it = self.arena.remove(id)?;
            self.invalidate_layout();
            Ok(it)
        }

        /// # Errors
        ///
        /// Returns [`crate::LayoutError::UnknownComponent`] if `id` is unknown.
        pub fn set_visible(&mut self, id: ComponentId, visible: bool) -> CommonResult<()> {
            self.arena.set_visible(id, visible)?;
            self.invalidate_layout();
            Ok(())
        }

        /// # Errors
        ///
        /// Returns [`crate::LayoutError::UnknownComponent`] if `id` is unknown.
        pub fn set_grid_data(
            &mut self,
            id: ComponentId,
            grid_data: Option<LogicalGridData>,
        ) -> CommonResult<()> {
            self.arena.set_grid_data(id, grid_data)?;
            self.invalidate_layout();
            Ok(())
        }

        /// # Errors
        ///
        /// Returns [`crate::LayoutError::UnknownComponent`] if `id` is unknown.
        pub fn set_margins(&mut self, id: ComponentId, margins: Insets) -> CommonResult<()> {
            self.arena.set_margins(id, margins)?;
            self.invalidate_layout();
            Ok(())
        }

        /// Resizing keeps the memoized preferred sizes, they don't depend on the
        /// container's own size.
        pub fn set_size(&mut self, size: Size) {
            if self.size != size {
                self.size = size;
                self.valid = false;
            }
        }

        pub fn set_insets(&mut self, insets: Insets) {
            if self.insets != insets {
                self.insets = insets;
                self.invalidate_layout();
            }
        }

        /// # Errors
        ///
        /// Returns [`crate::LayoutError::InvalidConfig`] if `config` doesn't validate.
        /// The current config is kept in that case.
        pub fn set_config(&mut self, config: LogicalGridLayoutConfig) -> CommonResult<()> {
            config.validate()?;
            self.layout.set_config(config);
            self.invalidate_layout();
            Ok(())
        }
    }
}

mod api {
    use super::{CommonResult, ComponentArena, ComponentId, DEBUG_GRID_LAYOUT,
                GridComponent, GridContainer, Insets, LogicalGridLayout,
                LogicalGridLayoutConfig, Rect, Size, SizeHints};

    impl GridContainer {
        /// Preferred size, insets included. Memoized per set of hints until the layout
        /// is invalidated.
        ///
        /// # Errors
        ///
        /// Returns [`crate::LayoutError::MissingGridData`] if a visible component has
        /// no grid data.
        pub fn pref_size(&mut self, hints: SizeHints) -> CommonResult<Size> {
            let hints = hints.normalized();
            if let Some(it) = self.pref_size_memo.get(&hints) {
                return Ok(*it);
            }
            let it = self
                .layout
                .preferred_layout_size(&self.arena, self.insets, hints)?;
            self.pref_size_memo.insert(hints, it);
            Ok(it)
        }

        /// Mark the layout invalid and drop everything memoized, including the cached
        /// layout infos. Call this when the content of a component changed in a way
        /// the container can't see (its measurement now returns something else).
        pub fn invalidate_layout(&mut self) {
            self.valid = false;
            self.pref_size_memo.clear();
            self.layout.invalidate();
        }

        /// Lay out the components, if the layout is invalid. Returns whether a layout
        /// pass actually ran.
        ///
        /// # Errors
        ///
        /// Returns [`crate::LayoutError::MissingGridData`] if a visible component has
        /// no grid data. The layout stays invalid in that case.
        pub fn validate_layout(&mut self) -> CommonResult<bool> {
            if self.valid {
                return Ok(false);
            }
            self.bounds = self.layout.layout(&self.arena, self.size, self.insets)?;
            self.valid = true;

            DEBUG_GRID_LAYOUT.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "GridContainer::validate_layout",
                    size = ?self.size,
                    component_count = %self.bounds.len(),
                );
            });

            Ok(true)
        }

        /// [`Self::invalidate_layout`] then [`Self::validate_layout`].
        ///
        /// # Errors
        ///
        /// See [`Self::validate_layout`].
        pub fn revalidate_layout(&mut self) -> CommonResult<bool> {
            self.invalidate_layout();
            self.validate_layout()
        }

        /// Bounds of `id` from the last layout pass. [`None`] for invisible and
        /// unknown components.
        #[must_use]
        pub fn bounds_of(&self, id: ComponentId) -> Option<Rect> {
            self.bounds
                .iter()
                .find(|(it, _)| *it == id)
                .map(|(_, bounds)| *bounds)
        }

        /// Bounds of the visible components from the last layout pass.
        #[must_use]
        pub fn bounds(&self) -> &[(ComponentId, Rect)] { &self.bounds }

        #[must_use]
        pub fn is_valid(&self) -> bool { self.valid }

        #[must_use]
        pub fn component(&self, id: ComponentId) -> Option<&GridComponent> {
            self.arena.get(id)
        }

        #[must_use]
        pub fn arena(&self) -> &ComponentArena { &self.arena }

        #[must_use]
        pub fn layout(&self) -> &LogicalGridLayout { &self.layout }

        #[must_use]
        pub fn config(&self) -> &LogicalGridLayoutConfig { self.layout.config() }

        #[must_use]
        pub fn size(&self) -> Size { self.size }

        #[must_use]
        pub fn insets(&self) -> Insets { self.insets }
    }
}
