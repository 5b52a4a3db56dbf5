/// this module contains data structures shared by the algorithm implementations

/// stores a square 2d table inside a single 1d array
pub struct SquareMatrix<T: Clone + Copy> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Clone + Copy> SquareMatrix<T> {

    pub fn new(dim: usize, initial_value: T) -> Self {
        SquareMatrix {
            data: vec![initial_value; dim * dim],
            dim,
        }
    }

    pub fn empty() -> Self {
        SquareMatrix {
            data: Vec::new(),
            dim: 0,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.dim + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.dim + col] = value;
    }

    /// enlarges the table to the given dimension, existing entries keep their
    /// row and column while all new cells are set to the given fill value
    pub fn grow(&mut self, new_dim: usize, fill: T) {
        if new_dim <= self.dim {
            return;
        }

        let mut grown = vec![fill; new_dim * new_dim];

        for row in 0..self.dim {
            for col in 0..self.dim {
                grown[row * new_dim + col] = self.data[row * self.dim + col];
            }
        }

        self.data = grown;
        self.dim = new_dim;
    }
}
