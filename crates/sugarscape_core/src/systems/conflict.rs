use super::intent::MoveIntent;
use crate::config::ConflictPolicy;
use rand::Rng;
use std::collections::HashMap;

/// Awards each destination cell to at most one agent.
///
/// Returns a table indexed by cell; `Some(i)` means agent `i` (population
/// index) won that cell. Every intent, including "stay where I am", is a
/// claim.
///
/// Under [`ConflictPolicy::CoinFlip`] agents claim in population order and a
/// later claimant displaces the holder with probability 0.5. With three
/// contenders the first keeps the cell only a quarter of the time but the
/// last wins half of the time, so outcomes are biased by population order.
/// [`ConflictPolicy::Uniform`] removes that bias by drawing one winner
/// uniformly among all claimants of a cell.
pub fn resolve_conflicts<R: Rng + ?Sized>(
    intents: &[MoveIntent],
    cell_count: usize,
    policy: ConflictPolicy,
    rng: &mut R,
) -> Vec<Option<usize>> {
    match policy {
        ConflictPolicy::CoinFlip => resolve_coin_flip(intents, cell_count, rng),
        ConflictPolicy::Uniform => resolve_uniform(intents, cell_count, rng),
    }
}

fn resolve_coin_flip<R: Rng + ?Sized>(
    intents: &[MoveIntent],
    cell_count: usize,
    rng: &mut R,
) -> Vec<Option<usize>> {
    let mut winners = vec![None; cell_count];
    for (i, intent) in intents.iter().enumerate() {
        let slot = &mut winners[intent.destination];
        // The coin is only tossed for a cell that already has a holder.
        if slot.is_none() || rng.gen_bool(0.5) {
            *slot = Some(i);
        }
    }
    winners
}

fn resolve_uniform<R: Rng + ?Sized>(
    intents: &[MoveIntent],
    cell_count: usize,
    rng: &mut R,
) -> Vec<Option<usize>> {
    // Destinations in first-claim order keep the rng stream stable.
    let mut order = Vec::new();
    let mut claimants: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, intent) in intents.iter().enumerate() {
        claimants
            .entry(intent.destination)
            .or_insert_with(|| {
                order.push(intent.destination);
                Vec::new()
            })
            .push(i);
    }

    let mut winners = vec![None; cell_count];
    for destination in order {
        let contenders = &claimants[&destination];
        let pick = if contenders.len() == 1 {
            contenders[0]
        } else {
            contenders[rng.gen_range(0..contenders.len())]
        };
        winners[destination] = Some(pick);
    }
    winners
}

/// Number of destinations claimed by more than one agent.
#[must_use]
pub fn contested_cells(intents: &[MoveIntent], cell_count: usize) -> usize {
    let mut claims = vec![0u32; cell_count];
    for intent in intents {
        claims[intent.destination] += 1;
    }
    claims.iter().filter(|c| **c > 1).count()
}
