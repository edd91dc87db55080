//! Team generation strategies
//!
//! Each generator returns exactly `num_teams` teams numbered 1..=K and places
//! every person exactly once. The RNG is passed in so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use shared::{GenerationType, Team};

use super::roster::ScoredPerson;

pub trait TeamGenerator {
    fn assign<R: Rng + ?Sized>(&self, people: Vec<ScoredPerson>, num_teams: usize, rng: &mut R) -> Vec<Team>;
}

fn empty_teams(num_teams: usize) -> Vec<Team> {
    (1..=num_teams as u32).map(|number| Team::new(number, Vec::new())).collect()
}

/// Highest score first; ties keep roster order
fn sort_descending(people: &mut [ScoredPerson]) {
    people.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Shuffle, then deal round-robin
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl TeamGenerator for RandomGenerator {
    fn assign<R: Rng + ?Sized>(&self, mut people: Vec<ScoredPerson>, num_teams: usize, rng: &mut R) -> Vec<Team> {
        let mut teams = empty_teams(num_teams);
        if num_teams == 0 {
            return teams;
        }
        people.shuffle(rng);
        for (position, person) in people.into_iter().enumerate() {
            teams[position % num_teams].members.push(person.name);
        }
        teams
    }
}

/// Balanced draft: best first, dealt 1..K then K..1
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeDraftGenerator;

impl TeamGenerator for SnakeDraftGenerator {
    fn assign<R: Rng + ?Sized>(&self, mut people: Vec<ScoredPerson>, num_teams: usize, _rng: &mut R) -> Vec<Team> {
        let mut teams = empty_teams(num_teams);
        if num_teams == 0 {
            return teams;
        }
        sort_descending(&mut people);
        for (position, person) in people.into_iter().enumerate() {
            let round = position / num_teams;
            let offset = position % num_teams;
            let slot = if round % 2 == 0 { offset } else { num_teams - 1 - offset };
            teams[slot].members.push(person.name);
        }
        teams
    }
}

/// Ranked by score, then each person lands on a uniformly random team
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRandomGenerator;

impl TeamGenerator for WeightedRandomGenerator {
    fn assign<R: Rng + ?Sized>(&self, mut people: Vec<ScoredPerson>, num_teams: usize, rng: &mut R) -> Vec<Team> {
        let mut teams = empty_teams(num_teams);
        if num_teams == 0 {
            return teams;
        }
        sort_descending(&mut people);
        for person in people {
            let slot = rng.gen_range(0..num_teams);
            teams[slot].members.push(person.name);
        }
        teams
    }
}

/// Run the generator for `generation_type`
pub fn generate<R: Rng + ?Sized>(
    generation_type: GenerationType,
    people: Vec<ScoredPerson>,
    num_teams: usize,
    rng: &mut R,
) -> Vec<Team> {
    match generation_type {
        GenerationType::Random => RandomGenerator.assign(people, num_teams, rng),
        GenerationType::Weighted => SnakeDraftGenerator.assign(people, num_teams, rng),
        GenerationType::WeightedRandom => WeightedRandomGenerator.assign(people, num_teams, rng),
    }
}
