//! Grid topology for the atlas.
//!
//! The planner only decides how many columns and rows to lay sprite-sized
//! cells out in. It never checks that the grid fits the atlas canvas: with
//! enough images, trailing rows land outside the canvas and are clipped.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridPlan {
    pub columns: u32,
    pub rows: u32,
}

impl GridPlan {
    /// Pixel origin of the cell holding the image at `index`.
    pub fn cell_origin(&self, index: u32, cell_width: u32, cell_height: u32) -> (u32, u32) {
        let col = index % self.columns;
        let row = index / self.columns;
        (col * cell_width, row * cell_height)
    }
}

pub fn plan_grid(
    image_count: u32,
    sprite_width: u32,
    _sprite_height: u32,
    atlas_width: u32,
    _atlas_height: u32,
) -> GridPlan {
    if image_count == 0 {
        return GridPlan {
            columns: 1,
            rows: 1,
        };
    }

    let per_row = atlas_width as f64 / sprite_width as f64;
    let columns = ((per_row * image_count as f64).sqrt().floor() as u32).max(1);
    let rows = (image_count + columns - 1) / columns;

    GridPlan { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_images_on_default_atlas() {
        let plan = plan_grid(4, 32, 32, 512, 512);
        assert_eq!(plan, GridPlan { columns: 8, rows: 1 });
        for i in 0..4 {
            assert_eq!(plan.cell_origin(i, 32, 32), (i * 32, 0));
        }
    }

    #[test]
    fn zero_images_is_degenerate() {
        assert_eq!(plan_grid(0, 32, 32, 512, 512), GridPlan { columns: 1, rows: 1 });
    }

    #[test]
    fn columns_guarded_when_formula_gives_zero() {
        // 16 / 64 * 1 = 0.25, sqrt = 0.5, floor = 0
        let plan = plan_grid(1, 64, 64, 16, 16);
        assert_eq!(plan, GridPlan { columns: 1, rows: 1 });

        let plan = plan_grid(3, 100, 100, 10, 10);
        assert_eq!(plan, GridPlan { columns: 1, rows: 3 });
    }

    #[test]
    fn known_layouts() {
        // (count, sprite, atlas) -> (columns, rows)
        let cases = [
            ((1, 32, 512), (4, 1)),     // sqrt(16)
            ((10, 32, 512), (12, 1)),   // sqrt(160) = 12.6
            ((300, 32, 512), (69, 5)),  // sqrt(4800) = 69.3
            ((50, 16, 1024), (56, 1)),  // sqrt(3200) = 56.6
            ((9, 64, 64), (3, 3)),
            ((10, 64, 64), (3, 4)),     // sqrt(10) = 3.2
            ((300, 64, 64), (17, 18)),  // sqrt(300) = 17.3
            ((4, 100, 30), (1, 4)),     // sqrt(1.2) = 1.1
            ((14, 100, 30), (2, 7)),    // sqrt(4.2) = 2.05
            ((2, 7, 513), (12, 1)),     // sqrt(146.6) = 12.1
        ];
        for ((n, sprite, atlas), (columns, rows)) in cases {
            assert_eq!(
                plan_grid(n, sprite, sprite, atlas, atlas),
                GridPlan { columns, rows },
                "n={} sprite={} atlas={}",
                n,
                sprite,
                atlas
            );
        }
    }

    #[test]
    fn every_image_gets_a_cell() {
        for (sw, aw) in [(32, 512), (16, 1024), (64, 64), (100, 30), (7, 513)] {
            for n in 1..=300 {
                let plan = plan_grid(n, sw, sw, aw, aw);
                assert!(plan.columns >= 1);
                assert!(plan.columns * plan.rows >= n);
                assert!(plan.columns * (plan.rows - 1) < n);
            }
        }
    }

    #[test]
    fn wraps_onto_next_row() {
        let plan = plan_grid(10, 32, 32, 64, 64);
        // sqrt(2 * 10) = 4.47
        assert_eq!(plan, GridPlan { columns: 4, rows: 3 });
        assert_eq!(plan.cell_origin(4, 32, 32), (0, 32));
        assert_eq!(plan.cell_origin(9, 32, 32), (32, 64));
    }
}
