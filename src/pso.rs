use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// hyperparameters of a particle swarm run
///
/// the defaults mirror the one dimensional instructional setup: ten particles,
/// three iterations and the search interval [0, 5]
#[derive(Debug, Clone)]
pub struct PsoConfig {
    pub population: usize,
    pub iterations: usize,
    /// velocity carry over factor (w)
    pub inertia: f64,
    /// pull towards the particle's own best position (c1)
    pub cognitive: f64,
    /// pull towards the swarm wide best position (c2)
    pub social: f64,
    /// inclusive search interval, applied to every dimension
    pub bounds: (f64, f64),
}

impl Default for PsoConfig {

    fn default() -> Self {
        PsoConfig {
            population: 10,
            iterations: 3,
            inertia: 1.0,
            cognitive: 0.5,
            social: 1.0,
            bounds: (0.0, 5.0),
        }
    }
}

/// a single member of the swarm together with its movement history
///
/// the histories record the initial state plus one entry per iteration and are
/// what plot renderers consume after a run
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub best_position: Vec<f64>,
    pub best_fitness: f64,
    pub position_history: Vec<Vec<f64>>,
    pub fitness_history: Vec<f64>,
}

/// the swarm wide best solution found during a run, plus the final particles
pub struct SwarmResult {
    pub best_position: Vec<f64>,
    pub best_fitness: f64,
    pub particles: Vec<Particle>,
}

/// minimizes a black box objective with particle swarm optimization
pub struct ParticleSwarm {
    config: PsoConfig,
    rng: StdRng,
}

impl ParticleSwarm {

    pub fn new(config: PsoConfig) -> Self {
        ParticleSwarm {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// fixes the random number generator seed, runs with the same seed,
    /// objective and dimension produce identical results
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// runs the configured number of iterations over a swarm of the given
    /// dimension and returns the best position found
    pub fn optimize<F>(&mut self, objective: F, dim: usize) -> SwarmResult
    where
        F: Fn(&[f64]) -> f64,
    {
        let (lower, upper) = self.config.bounds;

        // spawn particles at random positions with zero velocity
        let mut particles: Vec<Particle> = (0..self.config.population)
            .map(|_| {
                let position: Vec<f64> = (0..dim).map(|_| self.rng.gen_range(lower..=upper)).collect();
                let fitness = objective(&position);

                Particle {
                    velocity: vec![0.0; dim],
                    best_position: position.clone(),
                    best_fitness: fitness,
                    position_history: vec![position.clone()],
                    fitness_history: vec![fitness],
                    position,
                }
            })
            .collect();

        let mut best_position: Vec<f64> = Vec::new();
        let mut best_fitness = f64::INFINITY;

        for particle in &particles {
            if particle.best_fitness < best_fitness {
                best_position = particle.best_position.clone();
                best_fitness = particle.best_fitness;
            }
        }

        for _ in 0..self.config.iterations {
            for particle in &mut particles {
                for dim_index in 0..dim {
                    let r_cognitive: f64 = self.rng.gen_range(0.0..=1.0);
                    let r_social: f64 = self.rng.gen_range(0.0..=1.0);

                    particle.velocity[dim_index] = self.config.inertia * particle.velocity[dim_index]
                        + self.config.cognitive * r_cognitive * (particle.best_position[dim_index] - particle.position[dim_index])
                        + self.config.social * r_social * (best_position[dim_index] - particle.position[dim_index]);

                    // keep the particle inside the search interval
                    particle.position[dim_index] =
                        (particle.position[dim_index] + particle.velocity[dim_index]).clamp(lower, upper);
                }

                let fitness = objective(&particle.position);
                particle.position_history.push(particle.position.clone());
                particle.fitness_history.push(fitness);

                if fitness < particle.best_fitness {
                    particle.best_position = particle.position.clone();
                    particle.best_fitness = fitness;

                    // the global best can only improve through a particle
                    // improving its personal best
                    if fitness < best_fitness {
                        best_position = particle.best_position.clone();
                        best_fitness = fitness;
                    }
                }
            }
        }

        SwarmResult {
            best_position,
            best_fitness,
            particles,
        }
    }
}
