use std::collections::HashSet;
use std::io;
use std::ops::ControlFlow;

use log::{debug, info, trace};
use rand::Rng;

use crate::board::{Board, Cell, Direction};
use crate::food::Food;
use crate::input::{Input, InputEvent};
use crate::pacing::Pacer;
use crate::render::{Render, Snapshot};
use crate::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,   // Plain move, nothing else happened
    Nommed,    // Ate the food and grew by one
    Collision, // Ran into itself and was reset
    BoardFull, // Ate the food and now covers every cell, game over
}

/// Owns the snake and the food and is the only thing that mutates them.
#[derive(Debug)]
pub struct Simulation<R> {
    board: Board,
    snake: Snake,
    food: Food,
    rng: R,
    cleared: bool,
}

impl<R: Rng> Simulation<R> {
    pub fn new(board: Board, mut rng: R) -> Self {
        let snake = Snake::new(board);
        let food = Food::place_avoiding(board, &body_cells(&snake), &mut rng);
        Simulation {
            board,
            snake,
            food,
            rng,
            cleared: true,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    /// Advances the game by one tick, after forwarding `requested` to the snake.
    pub fn step(&mut self, requested: Option<Direction>) -> StepResult {
        if let Some(direction) = requested {
            self.snake.request_direction(direction);
        }

        self.snake.advance();
        let head = self.snake.head();

        if head == self.food.position {
            self.snake.grow();
            debug!("Nommed at {:?}, length now {}", head, self.snake.len());
            let occupied = body_cells(&self.snake);
            return match Food::try_place_avoiding(self.board, &occupied, &mut self.rng) {
                Some(food) => {
                    self.food = food;
                    StepResult::Nommed
                }
                None => {
                    info!("Snake covers the whole board at length {}", self.snake.len());
                    StepResult::BoardFull
                }
            };
        }

        if self.snake.occupies(head, true) {
            info!(
                "Snake ran into itself at {:?} with length {}, resetting",
                head,
                self.snake.len()
            );
            self.snake.reset();
            self.food = Food::place_avoiding(self.board, &body_cells(&self.snake), &mut self.rng);
            self.cleared = true;
            return StepResult::Collision;
        }

        StepResult::Ongoing
    }

    /// Copy of what the renderer needs right now.
    ///
    /// `clear` is take-once: it is true on the first snapshot after startup or
    /// a reset and false on every snapshot after that.
    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot {
            body: self.snake.body().iter().copied().collect(),
            food: self.food.position,
            erase: self.snake.last_tail(),
            clear: std::mem::take(&mut self.cleared),
        }
    }

    /// One full tick minus pacing: read input, step, draw.
    ///
    /// A quit request stops the loop before anything moves. A board-full step
    /// is still drawn, then stops the loop.
    pub fn tick(
        &mut self,
        input: &mut impl Input,
        render: &mut impl Render,
    ) -> io::Result<ControlFlow<()>> {
        let events = input.poll_events()?;
        if events.contains(&InputEvent::Quit) {
            info!("Quit requested");
            return Ok(ControlFlow::Break(()));
        }

        let requested = latest_direction(&events);
        let result = self.step(requested);
        trace!("Tick: {:?}, head at {:?}", result, self.snake.head());

        render.draw(&self.snapshot())?;
        if result == StepResult::BoardFull {
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn run(
        &mut self,
        input: &mut impl Input,
        render: &mut impl Render,
        pacer: &mut impl Pacer,
    ) -> io::Result<()> {
        render.draw(&self.snapshot())?;
        loop {
            pacer.wait();
            if self.tick(input, render)?.is_break() {
                return Ok(());
            }
        }
    }
}

fn body_cells(snake: &Snake) -> HashSet<Cell> {
    snake.body().iter().copied().collect()
}

fn latest_direction(events: &[InputEvent]) -> Option<Direction> {
    events.iter().rev().find_map(|event| match event {
        InputEvent::Move(direction) => Some(*direction),
        InputEvent::Quit => None,
    })
}
