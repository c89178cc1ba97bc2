use rand::Rng;

use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl Backtrack for MazeMaker {
    fn backtrack<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut stack = vec![self.start];

        while let Some(curr) = stack.pop() {
            // A cell can be pushed once per neighbor that saw it unvisited.
            if self.is_visited(curr) {
                continue;
            }

            self.visit_cell(curr);
            if let Some(parent) = self.parent_of(curr) {
                self.remove_wall_between(parent, curr);
            }

            for next in self.shuffled_neighbors(curr, rng) {
                if !self.is_visited(next) {
                    self.set_parent(next, curr);
                    stack.push(next);
                }
            }
        }
    }
}
