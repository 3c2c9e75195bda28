use std::cmp::Ordering;

use crate::{
    foundation::{
        core::{ObjectId, Point, Rgba8},
        error::{SceneError, SceneResult},
    },
    metadata::tree::{DomainValue, Metadata},
    objects::{Colorable, Showable, record::VisualRecord},
    scene::recorder::Recorder,
};

const CELL_SPACING: f64 = 60.0;

#[derive(Clone, Debug)]
struct Cell {
    record: VisualRecord,
    value: i64,
}

/// A row of value cells, the usual subject of sorting visualizations.
///
/// Cell positions are slots: after a swap, the cell at index `i` is always drawn at slot `i`.
#[derive(Clone, Debug)]
pub struct ArrayView {
    cells: Vec<Cell>,
    origin: Point,
    spacing: f64,
    highlight: Rgba8,
}

impl ArrayView {
    /// Lay out `values` left to right from the origin. Nothing is recorded until `show`.
    pub fn new(rec: &mut Recorder<'_>, values: &[i64]) -> Self {
        Self::with_layout(rec, values, Point::ORIGIN, CELL_SPACING)
    }

    /// Array laid out from `origin`, one cell every `spacing` units.
    pub fn with_layout(
        rec: &mut Recorder<'_>,
        values: &[i64],
        origin: Point,
        spacing: f64,
    ) -> Self {
        let cells = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Cell {
                record: VisualRecord::new(
                    rec.new_object(),
                    slot_position(origin, spacing, i),
                    Rgba8::BLUE,
                ),
                value,
            })
            .collect();
        Self {
            cells,
            origin,
            spacing,
            highlight: Rgba8::YELLOW,
        }
    }

    /// Color used by `compare`.
    pub fn with_highlight(mut self, color: Rgba8) -> Self {
        self.highlight = color;
        self
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for an empty array.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current values, in display order.
    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|c| c.value).collect()
    }

    /// Value currently shown in cell `i`.
    pub fn value(&self, i: usize) -> SceneResult<i64> {
        self.check(i).map(|_| self.cells[i].value)
    }

    /// Scene object drawing cell `i`.
    pub fn object(&self, i: usize) -> SceneResult<ObjectId> {
        self.check(i).map(|_| self.cells[i].record.id())
    }

    fn check(&self, i: usize) -> SceneResult<()> {
        if i < self.cells.len() {
            Ok(())
        } else {
            Err(SceneError::validation(format!(
                "array index {i} out of range for {} cells",
                self.cells.len()
            )))
        }
    }

    /// Recolor one cell (tag `"highlight"`).
    pub fn highlight_cell(
        &mut self,
        rec: &mut Recorder<'_>,
        i: usize,
        color: Rgba8,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()> {
        self.check(i)?;
        rec.operation("highlight", parent, |rec, meta| {
            let cell = &mut self.cells[i];
            let pair = cell.record.recolor_pair(color, false);
            rec.record_labeled(meta, "highlight", pair, [DomainValue::Int(cell.value)]);
        });
        Ok(())
    }

    /// Highlight cells `i` and `j` together, then restore them together (tag `"compare"`).
    ///
    /// Returns how `values[i]` orders against `values[j]`.
    pub fn compare(
        &mut self,
        rec: &mut Recorder<'_>,
        i: usize,
        j: usize,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<Ordering> {
        self.check(i)?;
        self.check(j)?;
        let (vi, vj) = (self.cells[i].value, self.cells[j].value);
        let highlight = self.highlight;
        rec.operation("compare", parent, |rec, meta| {
            let values = [DomainValue::Int(vi), DomainValue::Int(vj)];
            let pair = self.cells[i].record.recolor_pair(highlight, false);
            rec.record_labeled(meta, "highlight", pair, values.clone());
            let pair = self.cells[j].record.recolor_pair(highlight, true);
            rec.record_labeled(meta, "highlight", pair, values.clone());
            let pair = self.cells[i].record.restore_pair(false);
            rec.record_labeled(meta, "restore", pair, values.clone());
            let pair = self.cells[j].record.restore_pair(true);
            rec.record_labeled(meta, "restore", pair, values);
        });
        Ok(vi.cmp(&vj))
    }

    /// Exchange cells `i` and `j`; both moves play as one block (tag `"swap"`).
    pub fn swap(
        &mut self,
        rec: &mut Recorder<'_>,
        i: usize,
        j: usize,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()> {
        self.check(i)?;
        self.check(j)?;
        if i == j {
            return Ok(());
        }
        let (to_j, to_i) = (
            slot_position(self.origin, self.spacing, j),
            slot_position(self.origin, self.spacing, i),
        );
        let values = [
            DomainValue::Int(self.cells[i].value),
            DomainValue::Int(self.cells[j].value),
        ];
        rec.operation("swap", parent, |rec, meta| {
            let pair = self.cells[i].record.move_pair(to_j, false);
            rec.record(meta, pair, values.clone());
            let pair = self.cells[j].record.move_pair(to_i, true);
            rec.record(meta, pair, values);
        });
        self.cells.swap(i, j);
        Ok(())
    }

    /// Overwrite the value shown in cell `i` (tag `"set_value"`).
    pub fn set_value(
        &mut self,
        rec: &mut Recorder<'_>,
        i: usize,
        value: i64,
        parent: Option<&mut Metadata>,
    ) -> SceneResult<()> {
        self.check(i)?;
        let old = self.cells[i].value;
        rec.operation("set_value", parent, |rec, meta| {
            let pair = self.cells[i].record.label_pair(value.to_string(), false);
            rec.record(meta, pair, [DomainValue::Int(old), DomainValue::Int(value)]);
        });
        self.cells[i].value = value;
        Ok(())
    }
}

fn slot_position(origin: Point, spacing: f64, i: usize) -> Point {
    Point::new(origin.x + spacing * i as f64, origin.y)
}

impl Showable for ArrayView {
    fn show(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>) {
        rec.operation("show", parent, |rec, meta| {
            for (n, cell) in self.cells.iter_mut().enumerate() {
                let pair = cell.record.show_pair(n > 0);
                rec.record(meta, pair, [DomainValue::Int(cell.value)]);
            }
        });
    }

    fn hide(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>) {
        rec.operation("hide", parent, |rec, meta| {
            for (n, cell) in self.cells.iter_mut().enumerate() {
                let pair = cell.record.hide_pair(n > 0);
                rec.record(meta, pair, [DomainValue::Int(cell.value)]);
            }
        });
    }
}

impl Colorable for ArrayView {
    fn highlight(&mut self, rec: &mut Recorder<'_>, color: Rgba8, parent: Option<&mut Metadata>) {
        rec.operation("highlight", parent, |rec, meta| {
            for (n, cell) in self.cells.iter_mut().enumerate() {
                let pair = cell.record.recolor_pair(color, n > 0);
                rec.record_labeled(meta, "highlight", pair, [DomainValue::Int(cell.value)]);
            }
        });
    }

    fn unhighlight(&mut self, rec: &mut Recorder<'_>, parent: Option<&mut Metadata>) {
        rec.operation("unhighlight", parent, |rec, meta| {
            for (n, cell) in self.cells.iter_mut().enumerate() {
                let pair = cell.record.restore_pair(n > 0);
                rec.record_labeled(meta, "unhighlight", pair, [DomainValue::Int(cell.value)]);
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/objects/array.rs"]
mod tests;
