/// Row-major pixel grid, origin top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    #[cfg(test)]
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value;
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.buffer.chunks(self.width)
    }
}
