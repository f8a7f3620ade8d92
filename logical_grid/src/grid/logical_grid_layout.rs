// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CacheStats, CommonResult, ComponentArena, ComponentId, DEBUG_GRID_LAYOUT,
            Insets, LayoutEntry, LogicalGridLayoutConfig, LogicalGridLayoutInfo,
            LruCache, Rect, Size, SizeFlag, SizeHints, VisibleIds};

/// How many infos (one per distinct set of hints) are kept around.
pub const LAYOUT_INFO_CACHE_CAPACITY: usize = 8;

/// An info is only valid for the hints, the visible components, and the state of the
/// arena it was built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutCacheKey {
    pub hints: SizeHints,
    pub visible: VisibleIds,
    pub revision: u64,
}

impl LayoutCacheKey {
    #[must_use]
    pub fn new(arena: &ComponentArena, hints: SizeHints) -> Self {
        Self {
            hints,
            visible: arena.visible_ids(),
            revision: arena.revision(),
        }
    }
}

/// Turns [`LogicalGridLayoutInfo`]s into the preferred size of a grid, and into the
/// bounds of its components.
#[derive(Debug)]
pub struct LogicalGridLayout {
    config: LogicalGridLayoutConfig,
    cache: LruCache<LayoutCacheKey, LogicalGridLayoutInfo>,
}

impl LogicalGridLayout {
    #[must_use]
    pub fn new(config: LogicalGridLayoutConfig) -> Self {
        Self {
            config,
            cache: LruCache::new(LAYOUT_INFO_CACHE_CAPACITY),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LogicalGridLayoutConfig { &self.config }

    pub fn set_config(&mut self, config: LogicalGridLayoutConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Drop every cached info.
    pub fn invalidate(&mut self) { self.cache.clear(); }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats { self.cache.stats() }

    /// Only the width hint takes part in sizing, so the height hint is dropped before
    /// the cache lookup.
    ///
    /// # Errors
    ///
    /// See [`LogicalGridLayoutInfo::try_new`].
    pub fn info(
        &mut self,
        arena: &ComponentArena,
        hints: SizeHints,
    ) -> CommonResult<LogicalGridLayoutInfo> {
        let hints = SizeHints {
            height_hint: None,
            ..hints.normalized()
        };
        let config = &self.config;
        self.cache
            .get_or_try_insert_with(LayoutCacheKey::new(arena, hints), || {
                LogicalGridLayoutInfo::try_new(arena, config, hints)
            })
    }

    /// Preferred size of the grid including `insets`. The hints describe the space the
    /// parent offers to the whole container, insets included.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::MissingGridData`] if a visible component has no
    /// grid data.
    pub fn preferred_layout_size(
        &mut self,
        arena: &ComponentArena,
        insets: Insets,
        hints: SizeHints,
    ) -> CommonResult<Size> {
        if arena.visible_ids().is_empty() {
            return Ok(Size::ZERO.add_insets(insets));
        }

        let info = self.info(arena, hints.normalized().without_insets(insets))?;
        let it = info.grid_dimension(SizeFlag::Pref).add_insets(insets);

        DEBUG_GRID_LAYOUT.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "LogicalGridLayout::preferred_layout_size",
                hints = ?hints,
                insets = ?insets,
                pref_size = ?it,
            );
        });

        Ok(it)
    }

    /// Bounds of every visible component, in insertion order, for a container of
    /// `container_size`. Bounds are relative to the container's border box, so the
    /// first cell starts at the top left of `insets`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::MissingGridData`] if a visible component has no
    /// grid data.
    pub fn layout(
        &mut self,
        arena: &ComponentArena,
        container_size: Size,
        insets: Insets,
    ) -> CommonResult<Vec<(ComponentId, Rect)>> {
        if arena.visible_ids().is_empty() {
            return Ok(vec![]);
        }

        let mut size = container_size.clamp_non_negative();
        if self.config.min_width > 0 && size.width < self.config.min_width {
            size.width = self.config.min_width;
        }

        let info = self.info(
            arena,
            SizeHints::none().with_width(size.width - insets.horizontal()),
        )?;
        let cell_bounds = info.layout_cell_bounds(size, insets);

        let acc: Vec<(ComponentId, Rect)> = info
            .entries
            .iter()
            .map(|entry| (entry.id, place(entry, &cell_bounds)))
            .collect();

        DEBUG_GRID_LAYOUT.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "LogicalGridLayout::layout",
                container_size = ?container_size,
                logical_size = ?size,
                insets = ?insets,
                cols = %info.cols,
                rows = %info.rows,
            );
            for (id, bounds) in &acc {
                tracing::trace!(message = "component bounds", id = %id, bounds = ?bounds);
            }
        });

        Ok(acc)
    }
}

/// Bounds of one component: the block of cells it spans, minus its margins, then
/// shrunk to its measured size and aligned along each axis it doesn't fill.
fn place(entry: &LayoutEntry, cell_bounds: &[Vec<Rect>]) -> Rect {
    let cell = |row: usize, col: usize| {
        cell_bounds
            .get(row)
            .and_then(|it| it.get(col))
            .copied()
            .unwrap_or_default()
    };
    let block = cell(entry.row, entry.col).union(cell(entry.end_row(), entry.end_col()));
    let mut it = block.shrink_by(entry.margins);

    let data = &entry.grid_data;
    if data.fills_both() {
        return it;
    }

    let pref = entry.measured;
    if !data.fill_horizontal && pref.width < it.width {
        let delta = it.width - pref.width;
        it.width = pref.width;
        it.x += data.horizontal_alignment.offset(delta);
    }
    let pref_height = data.height_hint().unwrap_or(pref.height);
    if !data.fill_vertical && pref_height < it.height {
        let delta = it.height - pref_height;
        it.height = pref_height;
        it.y += data.vertical_alignment.offset(delta);
    }

    it.clamp_non_negative()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alignment, FixedPrefSize, LogicalGridData, assert_eq2, insets, rect,
                size};

    fn fixed(width: i32, height: i32) -> FixedPrefSize {
        FixedPrefSize(size!(width: width, height: height))
    }

    fn layout_with_gaps(hgap: i32, vgap: i32) -> LogicalGridLayout {
        LogicalGridLayout::new(LogicalGridLayoutConfig {
            hgap,
            vgap,
            ..Default::default()
        })
    }

    #[test]
    fn test_info_is_cached_until_arena_changes() {
        let mut arena = ComponentArena::new();
        let id = arena.add("a", Some(LogicalGridData::at(0, 0)), fixed(10, 10));
        let mut layout = layout_with_gaps(0, 0);

        layout.preferred_layout_size(&arena, Insets::default(), SizeHints::none()).unwrap();
        layout.preferred_layout_size(&arena, Insets::default(), SizeHints::none()).unwrap();
        assert_eq2!(layout.cache_stats(), CacheStats { hits: 1, misses: 1 });

        arena.set_margins(id, insets!(all: 1)).unwrap();
        let it = layout
            .preferred_layout_size(&arena, Insets::default(), SizeHints::none())
            .unwrap();
        assert_eq2!(it, size!(width: 12, height: 12));
        assert_eq2!(layout.cache_stats(), CacheStats { hits: 1, misses: 2 });

        layout.invalidate();
        assert_eq2!(layout.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_hints_exclude_insets() {
        let mut arena = ComponentArena::new();
        arena.add("a", Some(LogicalGridData::at(0, 0)), fixed(10, 10));
        let mut layout = layout_with_gaps(0, 0);
        let insets = insets!(all: 5);
        layout
            .preferred_layout_size(&arena, insets, SizeHints::none().with_width(110))
            .unwrap();
        let key = LayoutCacheKey::new(&arena, SizeHints::none().with_width(100));
        assert!(layout.cache.contains_key(&key));
    }

    #[test]
    fn test_height_hint_shares_cached_info() {
        let mut arena = ComponentArena::new();
        arena.add("a", Some(LogicalGridData::at(0, 0)), fixed(10, 10));
        let mut layout = layout_with_gaps(0, 0);

        let hints = SizeHints::none().with_width(100);
        let first = layout
            .preferred_layout_size(&arena, Insets::default(), hints)
            .unwrap();
        let second = layout
            .preferred_layout_size(&arena, Insets::default(), hints.with_height(40))
            .unwrap();
        assert_eq2!(first, second);
        assert_eq2!(layout.cache_stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_fill_both_gets_whole_block_minus_margins() {
        let mut arena = ComponentArena::new();
        let id = arena.add(
            "a",
            Some(LogicalGridData::at(0, 0).with_weights(1.0, 1.0)),
            fixed(10, 10),
        );
        arena.set_margins(id, insets!(top: 1, right: 2, bottom: 3, left: 4)).unwrap();
        let mut layout = layout_with_gaps(0, 0);

        let bounds = layout
            .layout(&arena, size!(width: 200, height: 100), Insets::default())
            .unwrap();
        assert_eq2!(bounds, vec![(id, rect!(x: 4, y: 1, width: 194, height: 96))]);
    }

    #[test]
    fn test_trailing_and_center_alignment() {
        let mut arena = ComponentArena::new();
        let data = LogicalGridData::at(0, 0)
            .with_weights(1.0, 1.0)
            .with_fill(false, false);
        let trailing = arena.add(
            "trailing",
            Some(data.with_alignment(Alignment::Trailing, Alignment::Trailing)),
            fixed(50, 20),
        );
        let center = arena.add(
            "center",
            Some(
                data.with_alignment(Alignment::Center, Alignment::Center)
                    .with_span(1, 1),
            ),
            fixed(51, 21),
        );
        // Both in the same cell.
        let mut layout = layout_with_gaps(0, 0);
        let bounds = layout
            .layout(&arena, size!(width: 100, height: 50), Insets::default())
            .unwrap();
        assert_eq2!(
            bounds,
            vec![
                (trailing, rect!(x: 50, y: 30, width: 50, height: 20)),
                (center, rect!(x: 25, y: 15, width: 51, height: 21)),
            ]
        );
    }

    #[test]
    fn test_height_hint_wins_vertically() {
        let mut arena = ComponentArena::new();
        let id = arena.add(
            "a",
            Some(
                LogicalGridData::at(0, 0)
                    .with_weights(1.0, 1.0)
                    .with_fill(true, false)
                    .with_hints(0, 24),
            ),
            fixed(50, 80),
        );
        let mut layout = layout_with_gaps(0, 0);
        let bounds = layout
            .layout(&arena, size!(width: 100, height: 100), Insets::default())
            .unwrap();
        assert_eq2!(bounds, vec![(id, rect!(x: 0, y: 0, width: 100, height: 24))]);
    }

    #[test]
    fn test_layout_of_empty_arena() {
        let arena = ComponentArena::new();
        let mut layout = layout_with_gaps(10, 10);
        assert!(
            layout
                .layout(&arena, size!(width: 100, height: 100), insets!(all: 3))
                .unwrap()
                .is_empty()
        );
        assert_eq2!(
            layout
                .preferred_layout_size(&arena, insets!(all: 3), SizeHints::none())
                .unwrap(),
            size!(width: 6, height: 6)
        );
    }
}
