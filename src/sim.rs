use std::{
    collections::{HashMap, VecDeque},
    io,
    sync::mpsc::{self, RecvTimeoutError},
    time::Duration,
};

use metrohash::MetroBuildHasher;
use tracing::{info, trace};

use crate::{pos, Cell, Pos, World};

/// Game of life rule: birth on exactly 3 live neighbors, survival on 2 or 3.
pub fn next_state(cell: Cell, live_neighbors: usize) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Current generation of a board together with the scratch buffer used to compute the next one.
#[derive(Debug)]
pub struct State<W>
where
    W: World,
{
    world: W,
    scratch: W,
    generation: u64,
}

impl<W> State<W>
where
    W: World,
{
    pub fn new(world: W) -> Self {
        let scratch = world.clone();
        Self {
            world,
            scratch,
            generation: 0,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.world.get(pos)
    }

    pub fn is_cell_alive(&self, pos: Pos) -> bool {
        self.get(pos).is_alive()
    }

    /// number of live cells among the 8 surrounding `pos`, each looked up with wraparound.
    pub fn get_neighbor_count(&self, pos: Pos) -> usize {
        let width = self.world.width() as i32;
        let height = self.world.height() as i32;
        pos.wrap(width, height)
            .neighbors()
            .filter(|&neighbor| self.is_cell_alive(neighbor))
            .count()
    }

    pub fn next_cell(&self, pos: Pos) -> Cell {
        next_state(self.get(pos), self.get_neighbor_count(pos))
    }

    /// computes every next cell into the scratch buffer from the settled board, then commits it.
    pub fn advance(&mut self) {
        let width = self.world.width() as i32;
        let height = self.world.height() as i32;
        for y in 0..height {
            for x in 0..width {
                let pos = pos!(x, y);
                let next = self.next_cell(pos);
                self.scratch.set(pos, next);
            }
        }
        self.world.copy_from(&self.scratch);
        self.generation += 1;
    }
}

const CYCLE_HISTORY: usize = 16;

/// Remembers the fingerprints of recent generations to spot a board that repeats itself.
#[derive(Debug, Default)]
pub struct CycleDetector {
    history: VecDeque<(u64, u64)>,
    seen: HashMap<u64, u64, MetroBuildHasher>,
}

impl CycleDetector {
    /// records `fingerprint` for `generation`, returns the period if it was seen recently.
    pub fn observe(&mut self, fingerprint: u64, generation: u64) -> Option<u64> {
        let period = self
            .seen
            .insert(fingerprint, generation)
            .map(|previous| generation - previous);

        self.history.push_back((fingerprint, generation));
        if self.history.len() > CYCLE_HISTORY {
            if let Some((old, old_generation)) = self.history.pop_front() {
                if self.seen.get(&old) == Some(&old_generation) {
                    self.seen.remove(&old);
                }
            }
        }
        period
    }
}

pub enum SimCmd {
    Stop,
}

#[derive(Debug, Clone)]
pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    /// asks the simulation to stop, a no-op once it has already finished.
    pub fn stop(&self) {
        let _ = self.sender.send(SimCmd::Stop);
    }
}

/// Drives a board: render, advance, wait, until stopped or out of generations.
#[derive(Debug)]
pub struct Sim<W>
where
    W: World,
{
    state: State<W>,
    interval: Duration,
    limit: Option<u64>,
    cycles: CycleDetector,
    sender: mpsc::Sender<SimCmd>,
    receiver: mpsc::Receiver<SimCmd>,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn new(world: W, interval: Duration, limit: Option<u64>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            state: State::new(world),
            interval,
            limit,
            cycles: CycleDetector::default(),
            sender,
            receiver,
        }
    }

    pub fn handle(&self) -> SimHandle {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    /// runs the loop, handing every generation to `show`, and returns the last state.
    pub fn run<F>(mut self, mut show: F) -> io::Result<State<W>>
    where
        F: FnMut(&W, u64) -> io::Result<()>,
    {
        let first = self.state.world().fingerprint();
        self.cycles.observe(first, 0);
        let mut cycle_reported = false;

        if let Ok(SimCmd::Stop) = self.receiver.try_recv() {
            info!(generation = 0, "simulation stopped before start");
            return Ok(self.state);
        }

        loop {
            show(self.state.world(), self.state.generation())?;
            if self.limit.is_some_and(|limit| self.state.generation() >= limit) {
                info!(generation = self.state.generation(), "generation limit reached");
                break;
            }

            match self.receiver.recv_timeout(self.interval) {
                Ok(SimCmd::Stop) => {
                    info!(generation = self.state.generation(), "simulation stopped");
                    break;
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => (),
            }

            self.state.advance();
            let generation = self.state.generation();
            let fingerprint = self.state.world().fingerprint();
            trace!(generation, fingerprint, "advanced");
            if let Some(period) = self.cycles.observe(fingerprint, generation) {
                if !cycle_reported {
                    info!(generation, period, "board entered a cycle");
                    cycle_reported = true;
                }
            }
        }
        Ok(self.state)
    }
}
