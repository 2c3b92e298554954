use crate::domain::Grid;

/// Whether the simulation is advancing. There is no third state; the
/// board either steps on the timer or holds still.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Paused,
    Running,
}

/// Control requests accepted by the session, whatever surface they
/// arrive from (button click, key press).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlEvent {
    /// Toggle between Paused and Running
    PausePlay,
    /// Throw the board away and reseed it randomly; the run state is kept
    Restart,
}

/// Session orchestrates the simulation.
/// This is the application layer that coordinates domain logic: it owns
/// the current generation, the run state machine, and the step timer.
pub struct Session {
    pub grid: Grid,
    pub run_state: RunState,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    /// When set, an extinct board is reseeded at the next step instead
    /// of sitting dead on screen
    pub restart_on_death: bool,
}

impl Session {
    /// Create a session around an already-seeded board. The session
    /// starts paused; drivers decide when time begins to pass.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            run_state: RunState::Paused,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            restart_on_death: false,
        }
    }

    /// Set the run state (builder pattern)
    pub fn with_run_state(mut self, run_state: RunState) -> Self {
        self.run_state = run_state;
        self
    }

    /// Set the step rate (builder pattern)
    pub fn with_updates_per_second(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = updates_per_second;
        self
    }

    /// Enable or disable reseeding on extinction (builder pattern)
    pub fn with_restart_on_death(mut self, enabled: bool) -> Self {
        self.restart_on_death = enabled;
        self
    }

    /// Apply a control event. This is the whole transition table: pause
    /// and play swap the run state, restart reseeds the board in place
    /// without touching the run state.
    pub fn handle(mut self, event: ControlEvent) -> Self {
        match event {
            ControlEvent::PausePlay => {
                self.run_state = match self.run_state {
                    RunState::Paused => RunState::Running,
                    RunState::Running => RunState::Paused,
                };
            }
            ControlEvent::Restart => {
                self.grid = self.grid.randomize();
                self.generation = 0;
                self.update_timer = 0.0;
            }
        }
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update the simulation by one frame.
    /// A paused session ignores time entirely; a running one accumulates
    /// it and steps the board each time the update interval is crossed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.run_state == RunState::Paused {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid = self.grid.next_generation();
            self.generation += 1;
            self.update_timer = 0.0;

            if self.restart_on_death && self.grid.is_extinct() {
                self.grid = self.grid.randomize();
                self.generation = 0;
            }
        }

        self
    }
}
