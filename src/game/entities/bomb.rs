//! Bomb entity and the schedule of pending explosions.
//!
//! Bombs never fire on their own: the schedule is an inspectable list of
//! deadlines that the tick procedure drains at a fixed point of every tick.

use serde::{Deserialize, Serialize};

use crate::game::types::{BombId, Direction, PlayerId, Point, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    pub id: BombId,
    pub owner: PlayerId,
    pub position: Point,
    /// Facing of the dropping player; the blast spares the cell behind it.
    pub facing: Direction,
    pub deadline: Tick,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BombSchedule {
    next_id: BombId,
    pending: Vec<Bomb>,
}

impl BombSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new bomb and return its record.
    pub fn schedule(
        &mut self,
        owner: PlayerId,
        position: Point,
        facing: Direction,
        deadline: Tick,
    ) -> Bomb {
        let bomb = Bomb {
            id: self.next_id,
            owner,
            position,
            facing,
            deadline,
        };
        self.next_id += 1;
        self.pending.push(bomb);
        bomb
    }

    pub fn pending(&self) -> &[Bomb] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn get(&self, id: BombId) -> Option<&Bomb> {
        self.pending.iter().find(|b| b.id == id)
    }

    /// Remove every bomb whose deadline is at or before `now`, earliest first.
    /// Bombs sharing a deadline come out in placement order.
    pub fn take_due(&mut self, now: Tick) -> Vec<Bomb> {
        let (mut due, pending): (Vec<Bomb>, Vec<Bomb>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|b| b.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|b| (b.deadline, b.id));
        due
    }

    /// Drop the pending bomb at `position`, if any.
    pub fn cancel_at(&mut self, position: Point) -> Option<Bomb> {
        let index = self.pending.iter().position(|b| b.position == position)?;
        Some(self.pending.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_orders_by_deadline_then_placement() {
        let mut schedule = BombSchedule::new();
        let late = schedule.schedule(0, Point::new(1, 2), Direction::Down, 7);
        let first = schedule.schedule(1, Point::new(3, 3), Direction::Up, 5);
        let second = schedule.schedule(0, Point::new(2, 1), Direction::Left, 5);

        assert!(schedule.take_due(4).is_empty());
        let due = schedule.take_due(6);
        assert_eq!(due, vec![first, second]);
        assert_eq!(schedule.pending(), &[late]);
        assert_eq!(schedule.take_due(100), vec![late]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut schedule = BombSchedule::new();
        let a = schedule.schedule(0, Point::new(1, 1), Direction::Down, 1);
        let b = schedule.schedule(0, Point::new(1, 1), Direction::Down, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_cancel_at() {
        let mut schedule = BombSchedule::new();
        let bomb = schedule.schedule(2, Point::new(4, 4), Direction::Right, 3);
        assert_eq!(schedule.cancel_at(Point::new(1, 1)), None);
        assert_eq!(schedule.cancel_at(Point::new(4, 4)), Some(bomb));
        assert!(schedule.get(bomb.id).is_none());
    }
}
