use crate::panel::Panel;

/// Panels arranged row-major in a fixed number of columns.
#[derive(Clone, Debug)]
pub struct GridLayout {
    ncols: usize,
    children: Vec<Panel>,
}

impl GridLayout {
    /// `ncols` is raised to at least 1.
    pub fn new(children: Vec<Panel>, ncols: usize) -> Self {
        Self {
            ncols: ncols.max(1),
            children,
        }
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nrows(&self) -> usize {
        self.children.len().div_ceil(self.ncols)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.children
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Panel> {
        if col >= self.ncols {
            return None;
        }
        self.children.get(row * self.ncols + col)
    }
}
