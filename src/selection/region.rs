use std::collections::BTreeMap;

use crate::foundation::core::{PixelBounds, Point};

/// Half-open run of pixels `[start, end)` on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// First covered column.
    pub start: i32,
    /// One past the last covered column.
    pub end: i32,
}

impl Span {
    /// Create a span; `end` is clamped so the span is never inverted.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of covered pixels.
    pub fn len(self) -> u32 {
        self.end.abs_diff(self.start)
    }

    /// Return `true` when no pixel is covered.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// An immutable set of pixel cells in canvas coordinates.
///
/// Rows map to sorted, disjoint, non-adjacent spans. Rows without spans are never stored, so two
/// regions covering the same cells compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    rows: BTreeMap<i32, Vec<Span>>,
}

impl Region {
    /// The region covering nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every pixel of `bounds`.
    pub fn from_rect(bounds: PixelBounds) -> Self {
        if bounds.is_empty() {
            return Self::empty();
        }
        let span = Span::new(bounds.left, bounds.right);
        let rows = (bounds.top..bounds.bottom).map(|y| (y, vec![span])).collect();
        Self { rows }
    }

    /// Rasterize a closed polygon with the even-odd rule.
    ///
    /// A pixel is inside when its centre is; centres exactly on a left/top edge are inside and
    /// centres on a right/bottom edge are outside.
    pub fn from_polygon(points: &[Point]) -> Self {
        if points.len() < 3 {
            return Self::empty();
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        if !min_y.is_finite() || !max_y.is_finite() {
            return Self::empty();
        }

        let mut rows = BTreeMap::new();
        let mut xs = Vec::new();
        for y in (min_y.floor() as i32)..(max_y.ceil() as i32) {
            let yc = f64::from(y) + 0.5;
            xs.clear();
            for (i, p0) in points.iter().enumerate() {
                let p1 = points[(i + 1) % points.len()];
                if p0.y == p1.y {
                    continue;
                }
                let (lo, hi) = if p0.y < p1.y { (*p0, p1) } else { (p1, *p0) };
                if lo.y <= yc && yc < hi.y {
                    xs.push(lo.x + (yc - lo.y) * (hi.x - lo.x) / (hi.y - lo.y));
                }
            }
            xs.sort_by(f64::total_cmp);

            let spans: Vec<Span> = xs
                .chunks_exact(2)
                .map(|pair| {
                    Span::new(
                        (pair[0] - 0.5).ceil() as i32,
                        (pair[1] - 0.5).ceil() as i32,
                    )
                })
                .collect();
            let spans = normalize(spans);
            if !spans.is_empty() {
                rows.insert(y, spans);
            }
        }
        Self { rows }
    }

    /// Return `true` when the region covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of covered pixels.
    pub fn area(&self) -> u64 {
        self.rows
            .values()
            .flatten()
            .map(|s| u64::from(s.len()))
            .sum()
    }

    /// Return `true` when pixel `(x, y)` is covered.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rows
            .get(&y)
            .is_some_and(|spans| spans.iter().any(|s| s.start <= x && x < s.end))
    }

    /// Bounding box of all covered pixels.
    pub fn bounds(&self) -> Option<PixelBounds> {
        let (&top, _) = self.rows.first_key_value()?;
        let (&last, _) = self.rows.last_key_value()?;
        let (left, right) = self
            .rows
            .values()
            .fold((i32::MAX, i32::MIN), |(l, r), spans| {
                let first = spans.first().map_or(l, |s| s.start);
                let end = spans.last().map_or(r, |s| s.end);
                (l.min(first), r.max(end))
            });
        Some(PixelBounds::new(left, top, right, last + 1))
    }

    /// Rows in ascending order with their spans.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[Span])> + '_ {
        self.rows.iter().map(|(&y, spans)| (y, spans.as_slice()))
    }

    /// Every covered `(x, y)` cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows().flat_map(|(y, spans)| {
            spans
                .iter()
                .flat_map(move |s| (s.start..s.end).map(move |x| (x, y)))
        })
    }

    /// Cells in either region.
    pub fn union(&self, other: &Region) -> Region {
        let mut rows = self.rows.clone();
        for (&y, spans) in &other.rows {
            let merged = match rows.remove(&y) {
                Some(mut mine) => {
                    mine.extend_from_slice(spans);
                    normalize(mine)
                }
                None => spans.clone(),
            };
            rows.insert(y, merged);
        }
        Region { rows }
    }

    /// Cells in both regions.
    pub fn intersect(&self, other: &Region) -> Region {
        let rows = self
            .rows
            .iter()
            .filter_map(|(&y, a)| {
                let b = other.rows.get(&y)?;
                let spans = intersect_spans(a, b);
                (!spans.is_empty()).then_some((y, spans))
            })
            .collect();
        Region { rows }
    }

    /// Cells in `self` but not in `other`.
    pub fn subtract(&self, other: &Region) -> Region {
        let rows = self
            .rows
            .iter()
            .filter_map(|(&y, a)| {
                let spans = match other.rows.get(&y) {
                    Some(b) => subtract_spans(a, b),
                    None => a.clone(),
                };
                (!spans.is_empty()).then_some((y, spans))
            })
            .collect();
        Region { rows }
    }

    /// The same cells shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Region {
        let rows = self
            .rows
            .iter()
            .map(|(&y, spans)| {
                let shifted = spans
                    .iter()
                    .map(|s| Span::new(s.start + dx, s.end + dx))
                    .collect();
                (y + dy, shifted)
            })
            .collect();
        Region { rows }
    }

    /// Grow outward by `px` pixels in every direction, corners included.
    pub fn expand(&self, px: u32) -> Region {
        if px == 0 {
            return self.clone();
        }
        let n = i32::try_from(px).unwrap_or(i32::MAX / 4);
        let mut grown: BTreeMap<i32, Vec<Span>> = BTreeMap::new();
        for (&y, spans) in &self.rows {
            let widened: Vec<Span> = spans
                .iter()
                .map(|s| Span::new(s.start - n, s.end + n))
                .collect();
            for dy in -n..=n {
                grown
                    .entry(y + dy)
                    .or_default()
                    .extend_from_slice(&widened);
            }
        }
        let rows = grown
            .into_iter()
            .map(|(y, spans)| (y, normalize(spans)))
            .collect();
        Region { rows }
    }
}

fn normalize(mut spans: Vec<Span>) -> Vec<Span> {
    spans.retain(|s| !s.is_empty());
    spans.sort_by_key(|s| s.start);
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for s in spans {
        match out.last_mut() {
            Some(last) if s.start <= last.end => last.end = last.end.max(s.end),
            _ => out.push(s),
        }
    }
    out
}

fn intersect_spans(a: &[Span], b: &[Span]) -> Vec<Span> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let start = a[i].start.max(b[j].start);
        let end = a[i].end.min(b[j].end);
        if start < end {
            out.push(Span::new(start, end));
        }
        if a[i].end < b[j].end {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

fn subtract_spans(a: &[Span], b: &[Span]) -> Vec<Span> {
    let mut out = Vec::new();
    let mut first = 0;
    for span in a {
        while first < b.len() && b[first].end <= span.start {
            first += 1;
        }
        let mut cur = span.start;
        for cut in &b[first..] {
            if cut.start >= span.end {
                break;
            }
            if cut.start > cur {
                out.push(Span::new(cur, cut.start));
            }
            cur = cur.max(cut.end);
        }
        if cur < span.end {
            out.push(Span::new(cur, span.end));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/selection/region.rs"]
mod tests;
