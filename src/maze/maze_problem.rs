use crate::maze::{MazeError, MazeMap, MazeState, Move, Position};
use crate::search::{Cost, StateSpace};
use serde::Deserialize;
use std::path::Path;
use std::rc::Rc;
use strum::IntoEnumIterator;
use tracing::info;

/// Cost of each kind of move.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoveCosts {
    pub forward: f64,
    pub side: f64,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            forward: 1.,
            side: 1.,
        }
    }
}

impl MoveCosts {
    pub fn of(&self, robot_move: Move) -> f64 {
        match robot_move {
            Move::Forward => self.forward,
            Move::Left | Move::Right => self.side,
        }
    }

    pub fn cheapest(&self) -> f64 {
        self.forward.min(self.side)
    }
}

/// On-disk layout of a problem file.
#[derive(Debug, Deserialize)]
struct MazeProblemFile {
    map: String,
    initial_head: Position,
    initial_tail: Position,
    head_goal: Position,
    tail_goal: Position,
    #[serde(default)]
    costs: MoveCosts,
}

/// A head/tail robot that has to reach a goal configuration in a maze.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    map: Rc<MazeMap>,
    initial_state: MazeState,
    goal: MazeState,
    costs: MoveCosts,
}

impl MazeProblem {
    pub fn new(
        map: Rc<MazeMap>,
        initial_state: MazeState,
        goal: MazeState,
        costs: MoveCosts,
    ) -> Result<Self, MazeError> {
        for cost in [costs.forward, costs.side] {
            if !cost.is_finite() || cost < 0. {
                return Err(MazeError::InvalidCost(cost));
            }
        }
        for state in [initial_state, goal] {
            if !state.is_straight() {
                return Err(MazeError::NotStraight(state));
            }
        }

        let problem = Self {
            map,
            initial_state,
            goal,
            costs,
        };
        for state in [initial_state, goal] {
            if !problem.fits(&state) {
                return Err(MazeError::Blocked(state));
            }
        }
        if initial_state.length() != goal.length() {
            return Err(MazeError::LengthMismatch {
                initial: initial_state.length(),
                goal: goal.length(),
            });
        }
        Ok(problem)
    }

    pub fn from_path(path: &Path) -> Result<Self, MazeError> {
        info!(problem = %path.display(), "loading maze problem");
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let file: MazeProblemFile = toml::from_str(text)?;
        let map: MazeMap = file.map.parse()?;
        Self::new(
            Rc::new(map),
            MazeState::new(file.initial_head, file.initial_tail),
            MazeState::new(file.head_goal, file.tail_goal),
            file.costs,
        )
    }

    /// The same maze with a different robot. Shares the map with `self`.
    pub fn with_configurations(
        &self,
        initial_state: MazeState,
        goal: MazeState,
    ) -> Result<Self, MazeError> {
        Self::new(self.map.clone(), initial_state, goal, self.costs)
    }

    /// Whether every cell of `state` is free.
    pub fn fits(&self, state: &MazeState) -> bool {
        // Both ends on the map bound the length before walking the body
        self.map.is_free(state.head)
            && self.map.is_free(state.tail)
            && state.cells().all(|cell| self.map.is_free(cell))
    }

    pub fn map(&self) -> &MazeMap {
        &self.map
    }

    pub fn head_goal(&self) -> Position {
        self.goal.head
    }

    pub fn tail_goal(&self) -> Position {
        self.goal.tail
    }

    pub fn goal(&self) -> MazeState {
        self.goal
    }

    pub fn costs(&self) -> MoveCosts {
        self.costs
    }

    /// Length of the robot in cells.
    pub fn length(&self) -> usize {
        self.initial_state.length()
    }
}

impl StateSpace for MazeProblem {
    type State = MazeState;

    fn initial_state(&self) -> MazeState {
        self.initial_state
    }

    fn is_goal(&self, state: &MazeState) -> bool {
        *state == self.goal
    }

    fn expand_state(&self, state: &MazeState) -> Vec<(MazeState, Cost)> {
        let heading = state.heading();
        Move::iter()
            .filter_map(|robot_move| {
                let successor = state.translated(robot_move.offset(heading));
                self.fits(&successor)
                    .then(|| (successor, Cost::from(self.costs.of(robot_move))))
            })
            .collect()
    }
}
