/// Generational handle: `(index, generation)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u32, u32);

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Handle(index, generation)
    }

    pub fn index(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn handle_orders_by_index_then_generation() {
        assert!(Handle::new(1, 0) < Handle::new(2, 0));
        assert!(Handle::new(1, 0) < Handle::new(1, 1));
        assert_eq!(Handle::new(7, 3).index(), 7);
    }
}
