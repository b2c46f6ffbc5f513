use crate::{cell::Cell, errors::XpError};

/// A flattened REXPaint image: `width * height` cells, row by row from the top.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct XpImage {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl XpImage {
    /// An image of the given size with every cell cleared.
    pub fn new(width: u32, height: u32) -> Self {
        let mut image = Self::default();
        image.init(width, height);
        image
    }

    /// Resizes to `width` x `height` and clears every cell.
    pub fn init(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::CLEAR);
    }

    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the image holds no cells; every cell access fails.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order (`x + y * width`).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, XpError> {
        if self.cells.is_empty() || x >= self.width || y >= self.height {
            return Err(XpError::Bounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width as usize)
    }

    /// Copy of the cell at `(x, y)`, with `(0, 0)` at the top left.
    pub fn get_cell(&self, x: u32, y: u32) -> Result<Cell, XpError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), XpError> {
        let index = self.index(x, y)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Cells with their coordinates, row by row.
    pub fn enumerate_cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width) as u32, (i / width) as u32, cell))
    }
}
