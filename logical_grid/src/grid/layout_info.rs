// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The sizing half of the layout engine.
//!
//! A [`LogicalGridLayoutInfo`] is a snapshot of the visible components of a
//! [`ComponentArena`], taken for one set of [`SizeHints`]:
//!
//! 1. Components without [`LogicalGridData`] fail fast with
//!    [`LayoutError::MissingGridData`].
//! 2. Unused columns and rows are compacted away, so the grid is dense.
//! 3. Each component is measured once.
//! 4. The column pass produces a [`TrackSize`] (min, pref, max) and a normalized weight
//!    per column.
//! 5. When the parent offers a width, columns are distributed over it first, and
//!    components whose height depends on their width are measured again with the
//!    width of their cell-block.
//! 6. The row pass does the same as the column pass, for heights.
//!
//! [`LogicalGridLayoutInfo::layout_cell_bounds`] then turns the track tables into a
//! table of cell rectangles for a concrete container size.

use std::{collections::BTreeSet, fmt::Debug};

use strum_macros::{Display, EnumIter};

use crate::{CommonResult, ComponentArena, ComponentId, DEBUG_GRID_LAYOUT, GridComponent,
            Insets, LayoutError, LogicalGridData, LogicalGridLayoutConfig, Rect, Size,
            SizeHints, size};

/// The max size of a flexible track.
pub const MAX_TRACK_SIZE: i32 = 10_240;

/// Weights smaller than this are treated as zero.
pub const EPS: f64 = 1e-6;

/// Selects one of the three sizes of a [`TrackSize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SizeFlag {
    Min,
    Pref,
    Max,
}

/// Negotiated size of one column (width) or one row (height).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TrackSize {
    pub min: i32,
    pub pref: i32,
    pub max: i32,
}

impl TrackSize {
    /// A track that neither grows nor shrinks.
    #[must_use]
    pub const fn fixed(size: i32) -> Self {
        Self {
            min: size,
            pref: size,
            max: size,
        }
    }

    /// A track that can shrink to nothing, or grow up to [`MAX_TRACK_SIZE`].
    #[must_use]
    pub const fn flexible(pref: i32) -> Self {
        Self {
            min: 0,
            pref,
            max: MAX_TRACK_SIZE,
        }
    }

    #[must_use]
    pub fn get(&self, flag: SizeFlag) -> i32 {
        match flag {
            SizeFlag::Min => self.min,
            SizeFlag::Pref => self.pref,
            SizeFlag::Max => self.max,
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool { self.min == self.max }
}

impl Debug for TrackSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[min: {}, pref: {}, max: {}]", self.min, self.pref, self.max)
    }
}

/// One visible component, as seen by the layout engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEntry {
    pub id: ComponentId,
    /// Sanitized copy of the component's grid data. The cell coordinates in here are
    /// the ones the host set, `col` and `row` are the compacted ones.
    pub grid_data: LogicalGridData,
    pub col: usize,
    pub row: usize,
    pub col_span: usize,
    pub row_span: usize,
    pub margins: Insets,
    /// Content size (without margins), with the explicit width and height hints
    /// applied.
    pub measured: Size,
}

impl LayoutEntry {
    /// Measured size plus margins. This is what the component asks of its cell-block.
    #[must_use]
    pub fn comp_size(&self) -> Size { self.measured.add_insets(self.margins) }

    #[must_use]
    pub fn end_col(&self) -> usize { self.col + self.col_span - 1 }

    #[must_use]
    pub fn end_row(&self) -> usize { self.row + self.row_span - 1 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogicalGridLayoutInfo {
    pub entries: Vec<LayoutEntry>,
    pub cols: usize,
    pub rows: usize,
    /// Column widths.
    pub width: Vec<TrackSize>,
    /// Row heights.
    pub height: Vec<TrackSize>,
    /// Normalized column weights. Sum to 1, or are all 0.
    pub weight_x: Vec<f64>,
    /// Normalized row weights. Sum to 1, or are all 0.
    pub weight_y: Vec<f64>,
    pub hgap: i32,
    pub vgap: i32,
}

/// What one component asks of the tracks it spans, along one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
struct TrackRequest {
    start: usize,
    span: usize,
    weight: f64,
    pref: i32,
    max_extent: Option<i32>,
}

impl TrackRequest {
    fn is_fixed(&self) -> bool { self.weight <= 0.0 }

    fn touches(&self, index: usize) -> bool {
        self.start <= index && index < self.start + self.span
    }
}

mod constructor {
    use super::{BTreeSet, CommonResult, ComponentArena, DEBUG_GRID_LAYOUT,
                GridComponent, LayoutEntry, LayoutError, LogicalGridLayoutConfig,
                LogicalGridLayoutInfo, SizeHints, TrackRequest, gaps, initialize_tracks,
                layout_sizes, to_index, to_px};

    impl LogicalGridLayoutInfo {
        /// Build the info for the visible components of `arena`. Invisible components
        /// take no part in it at all. Only the width hint of `hints` is used, the
        /// height of a row never feeds back into the widths.
        ///
        /// # Errors
        ///
        /// Returns [`LayoutError::MissingGridData`] if a visible component has no grid
        /// data.
        pub fn try_new(
            arena: &ComponentArena,
            config: &LogicalGridLayoutConfig,
            hints: SizeHints,
        ) -> CommonResult<Self> {
            let hints = hints.normalized();

            let mut components: Vec<&GridComponent> = vec![];
            let mut entries: Vec<LayoutEntry> = vec![];
            for component in arena.iter().filter(|it| it.visible) {
                let Some(grid_data) = component.grid_data else {
                    return Err(LayoutError::MissingGridData {
                        component: component.name.clone(),
                    }
                    .into());
                };
                let grid_data = grid_data.sanitized();
                let own_hints = SizeHints {
                    width_hint: grid_data.width_hint(),
                    height_hint: grid_data.height_hint(),
                };
                let mut measured = component.measure.pref_size(own_hints);
                if let Some(width_hint) = grid_data.width_hint() {
                    measured.width = width_hint;
                }
                if let Some(height_hint) = grid_data.height_hint() {
                    measured.height = height_hint;
                }
                entries.push(LayoutEntry {
                    id: component.id,
                    grid_data,
                    col: to_index(grid_data.grid_x),
                    row: to_index(grid_data.grid_y),
                    col_span: to_index(grid_data.grid_w),
                    row_span: to_index(grid_data.grid_h),
                    margins: component.margins,
                    measured,
                });
                components.push(component);
            }

            let (cols, rows) = compact(&mut entries);

            // Columns.
            let requests_x: Vec<TrackRequest> = entries
                .iter()
                .map(|entry| {
                    let data = &entry.grid_data;
                    let pref = if data.use_ui_width || data.width_hint().is_some() {
                        entry.comp_size().width
                    } else {
                        config.logical_width(to_px(entry.col_span))
                    };
                    TrackRequest {
                        start: entry.col,
                        span: entry.col_span,
                        weight: data.weight_x,
                        pref,
                        max_extent: data.max_width(),
                    }
                })
                .collect();
            let (width, weight_x) = initialize_tracks(cols, config.hgap, &requests_x);

            // Width / height negotiation.
            if let Some(width_hint) = hints.width_hint {
                let col_widths =
                    layout_sizes(width_hint - gaps(cols, config.hgap), &width, &weight_x);
                for (entry, component) in entries.iter_mut().zip(&components) {
                    let data = entry.grid_data;
                    if !data.use_ui_height || data.height_hint().is_some() {
                        continue;
                    }
                    let block_width = col_widths
                        .get(entry.col..=entry.end_col())
                        .map_or(0, |it| it.iter().sum::<i32>())
                        + gaps(entry.col_span, config.hgap);
                    let content_width = block_width - entry.margins.horizontal();
                    if content_width <= 0 {
                        continue;
                    }
                    let remeasured = component
                        .measure
                        .pref_size(SizeHints::none().with_width(content_width));
                    if data.width_hint().is_none() {
                        entry.measured.width = remeasured.width;
                    }
                    entry.measured.height = remeasured.height;
                }
            }

            // Rows.
            let requests_y: Vec<TrackRequest> = entries
                .iter()
                .map(|entry| {
                    let data = &entry.grid_data;
                    let pref = if data.use_ui_height || data.height_hint().is_some() {
                        entry.comp_size().height
                    } else {
                        config.logical_height(to_px(entry.row_span))
                    };
                    TrackRequest {
                        start: entry.row,
                        span: entry.row_span,
                        weight: data.weight_y,
                        pref,
                        max_extent: data.max_height(),
                    }
                })
                .collect();
            let (height, weight_y) = initialize_tracks(rows, config.vgap, &requests_y);

            let it = Self {
                entries,
                cols,
                rows,
                width,
                height,
                weight_x,
                weight_y,
                hgap: config.hgap,
                vgap: config.vgap,
            };

            DEBUG_GRID_LAYOUT.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "LogicalGridLayoutInfo::try_new",
                    hints = ?hints,
                    cols = %it.cols,
                    rows = %it.rows,
                    width = ?it.width,
                    height = ?it.height,
                );
            });

            Ok(it)
        }
    }

    /// Drop the columns and rows that no component touches, shifting later cells down.
    /// Returns the number of columns and rows left.
    fn compact(entries: &mut [LayoutEntry]) -> (usize, usize) {
        let used_cols: BTreeSet<usize> = entries
            .iter()
            .flat_map(|it| it.col..it.col + it.col_span)
            .collect();
        let used_rows: BTreeSet<usize> = entries
            .iter()
            .flat_map(|it| it.row..it.row + it.row_span)
            .collect();

        // A span covers a contiguous run of used cells, so it still fits afterwards.
        for entry in entries.iter_mut() {
            entry.col = used_cols.range(..entry.col).count();
            entry.row = used_rows.range(..entry.row).count();
        }

        (used_cols.len(), used_rows.len())
    }
}

mod api {
    use super::{Insets, LogicalGridLayoutInfo, Rect, Size, SizeFlag, gaps, layout_sizes,
                size};

    impl LogicalGridLayoutInfo {
        /// Width of every column when the grid gets `available_width` (gaps included).
        #[must_use]
        pub fn column_widths(&self, available_width: i32) -> Vec<i32> {
            layout_sizes(
                available_width - gaps(self.cols, self.hgap),
                &self.width,
                &self.weight_x,
            )
        }

        /// Height of every row when the grid gets `available_height` (gaps included).
        #[must_use]
        pub fn row_heights(&self, available_height: i32) -> Vec<i32> {
            layout_sizes(
                available_height - gaps(self.rows, self.vgap),
                &self.height,
                &self.weight_y,
            )
        }

        /// Cell rectangles, indexed `[row][col]`, for a container of `size` with
        /// `insets`. Gaps are not part of any cell.
        #[must_use]
        pub fn layout_cell_bounds(&self, size: Size, insets: Insets) -> Vec<Vec<Rect>> {
            let col_widths = self.column_widths(size.width - insets.horizontal());
            let row_heights = self.row_heights(size.height - insets.vertical());

            let mut acc = Vec::with_capacity(self.rows);
            let mut y = insets.top;
            for &row_height in &row_heights {
                let mut x = insets.left;
                let mut row = Vec::with_capacity(self.cols);
                for &col_width in &col_widths {
                    row.push(Rect::new(x, y, col_width, row_height));
                    x += col_width + self.hgap;
                }
                acc.push(row);
                y += row_height + self.vgap;
            }
            acc
        }

        /// Extent of all cells for the given size flag, gaps included, insets not.
        #[must_use]
        pub fn grid_dimension(&self, flag: SizeFlag) -> Size {
            let width: i32 = self.width.iter().map(|it| it.get(flag)).sum();
            let height: i32 = self.height.iter().map(|it| it.get(flag)).sum();
            size!(
                width: width + gaps(self.cols, self.hgap),
                height: height + gaps(self.rows, self.vgap),
            )
        }
    }
}

/// Column (or row) pass. Returns the track sizes and their normalized weights.
fn initialize_tracks(
    count: usize,
    gap: i32,
    requests: &[TrackRequest],
) -> (Vec<TrackSize>, Vec<f64>) {
    let mut prefs = vec![0_i32; count];
    let mut fixed = vec![false; count];

    // Single cell requests max-merge into their track.
    for request in requests.iter().filter(|it| it.span == 1) {
        if let Some(pref) = prefs.get_mut(request.start) {
            *pref = (*pref).max(request.pref);
        }
        if request.is_fixed()
            && let Some(it) = fixed.get_mut(request.start)
        {
            *it = true;
        }
    }

    // Spanning requests share what the flexible tracks don't already provide.
    for request in requests.iter().filter(|it| it.span > 1) {
        let range = request.start..(request.start + request.span).min(count);
        let span = to_px(request.span);
        let span_pref: i32 = range.clone().filter(|&i| !fixed[i]).map(|i| prefs[i]).sum();
        let dist = request.pref - span_pref - (span - 1) * gap;
        if dist <= 0 {
            continue;
        }
        let equal = (dist + span_pref) / span;
        let remainder = (dist + span_pref) % span;
        for i in range.clone() {
            if !fixed[i] {
                prefs[i] = prefs[i].max(equal);
            }
            if request.is_fixed() {
                fixed[i] = true;
            }
        }
        if let Some(last) = range.last() {
            prefs[last] += remainder;
        }
    }

    let mut tracks: Vec<TrackSize> = prefs
        .iter()
        .zip(&fixed)
        .map(|(&pref, &is_fixed)| {
            if is_fixed {
                TrackSize::fixed(pref)
            } else {
                TrackSize::flexible(pref)
            }
        })
        .collect();

    apply_max_extents(&mut tracks, gap, requests);

    let mut weights: Vec<f64> = (0..count)
        .map(|index| {
            if fixed[index] {
                return 0.0;
            }
            let (sum, n) = requests
                .iter()
                .filter(|it| it.weight > 0.0 && it.touches(index))
                .fold((0.0, 0), |(sum, n), it| {
                    (sum + it.weight / f64::from(to_px(it.span)), n + 1)
                });
            if n > 0 { sum / f64::from(n) } else { 0.0 }
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    if sum >= EPS {
        for weight in &mut weights {
            *weight /= sum;
        }
    }

    (tracks, weights)
}

/// Cap the max size of the tracks spanned by requests with a max extent, in request
/// order. A request splits its extent (minus gaps) evenly, each spanned track keeps the
/// smaller of its current max and that share, and the last spanned track then gets the
/// remainder on top. Only capped tracks have their pref and min clamped to the max.
fn apply_max_extents(tracks: &mut [TrackSize], gap: i32, requests: &[TrackRequest]) {
    let mut capped = vec![false; tracks.len()];
    for request in requests {
        let Some(max_extent) = request.max_extent else {
            continue;
        };
        let span = to_px(request.span);
        let available = (max_extent - (span - 1) * gap).max(0);
        let equal = available / span;
        let remainder = available % span;
        let range = request.start..(request.start + request.span).min(tracks.len());
        let Some(spanned) = tracks.get_mut(range.clone()) else {
            continue;
        };
        for track in spanned.iter_mut() {
            track.max = track.max.min(equal);
        }
        if let Some(last) = spanned.last_mut() {
            last.max += remainder;
        }
        if let Some(it) = capped.get_mut(range) {
            it.fill(true);
        }
    }

    for (track, _) in tracks.iter_mut().zip(&capped).filter(|(_, capped)| **capped) {
        track.max = track.max.max(0);
        track.pref = track.pref.min(track.max);
        track.min = track.min.min(track.max);
    }
}

/// Distribute `target` pixels over `tracks`, starting from their preferred sizes.
///
/// - Surplus grows the tracks that have a weight, up to their max.
/// - Deficit shrinks them, down to their min.
/// - A track with no weight gets an implicit weight of 1 if it can change size at all.
/// - Pixels are handed out one at a time, round robin, with a float accumulator per
///   track so that the split follows the weights.
///
/// A `target <= 0` gives all zeros. No size is ever negative.
#[must_use]
pub fn layout_sizes(target: i32, tracks: &[TrackSize], weights: &[f64]) -> Vec<i32> {
    if target <= 0 {
        return vec![0; tracks.len()];
    }

    let mut sizes: Vec<i32> = tracks.iter().map(|it| it.pref.max(0)).collect();
    let mut weights: Vec<f64> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let weight = weights.get(index).copied().unwrap_or(0.0);
            match (weight < EPS, track.max > track.min) {
                (false, _) => weight,
                (true, true) => 1.0,
                (true, false) => 0.0,
            }
        })
        .collect();
    let sum_weight: f64 = weights.iter().sum();
    if sum_weight > 0.0 {
        for weight in &mut weights {
            *weight /= sum_weight;
        }
    }

    let mut delta = target - sizes.iter().sum::<i32>();
    let mut acc = vec![0.0_f64; tracks.len()];
    let mut has_targets = true;
    while delta != 0 && has_targets {
        has_targets = false;
        for (index, track) in tracks.iter().enumerate() {
            if delta == 0 {
                break;
            }
            let can_change = if delta > 0 {
                sizes[index] < track.max
            } else {
                sizes[index] > track.min
            };
            if weights[index] <= 0.0 || !can_change {
                continue;
            }
            has_targets = true;
            acc[index] += weights[index];
            if acc[index] > 0.0 {
                acc[index] -= 1.0;
                let step = delta.signum();
                sizes[index] += step;
                delta -= step;
            }
        }
    }

    for size in &mut sizes {
        *size = (*size).max(0);
    }
    sizes
}

/// Total size of the gaps between `count` tracks.
fn gaps(count: usize, gap: i32) -> i32 { to_px(count.saturating_sub(1)) * gap }

fn to_index(value: i32) -> usize { usize::try_from(value).unwrap_or(0) }

fn to_px(value: usize) -> i32 { i32::try_from(value).unwrap_or(i32::MAX) }
