//! Sequential container that drives both traversal orders

use std::collections::VecDeque;

/// Pop discipline of a [`Frontier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Last in, first out (depth-first)
    Lifo,
    /// First in, first out (breadth-first)
    Fifo,
}

#[derive(Debug, Clone)]
pub struct Frontier<T> {
    discipline: Discipline,
    items: VecDeque<T>,
}

impl<T> Frontier<T> {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            items: VecDeque::new(),
        }
    }

    pub fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the next item according to the discipline
    pub fn pop(&mut self) -> Option<T> {
        match self.discipline {
            Discipline::Lifo => self.items.pop_back(),
            Discipline::Fifo => self.items.pop_front(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
