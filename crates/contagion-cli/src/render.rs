//! Text rendering of the simulation state.

use contagion_core::{Node, Presenter, RunOutcome, StateCounts, Topology};

/// Colour legend carried over from the original visualisation.
pub const LEGEND: &str = "(radicalised=red, citizen=lightblue, banned=green, immune=pink)";

/// Prints one line per node plus a counts footer.
pub fn print_roster(nodes: &[Node]) {
    for node in nodes {
        println!("  node {:>3}  {}", node.id, node.state.label());
    }
    let counts = StateCounts::tally(nodes);
    println!(
        "  -- {} citizens, {} radicalised, {} banned, {} immune",
        counts.citizen, counts.radicalised, counts.banned, counts.immune
    );
}

/// Presenter that prints the roster to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn render(&mut self, nodes: &[Node], _topology: &Topology) {
        println!("{}", LEGEND);
        print_roster(nodes);
    }
}

/// Closing line for a run outcome, phrased after the original model's
/// ending messages.
pub fn outcome_message(outcome: RunOutcome, bans: u64) -> String {
    match outcome {
        RunOutcome::RadicalsEliminated => {
            format!("There are no more radicals; it only cost you {} bans.", bans)
        }
        RunOutcome::FullPolarisation => "Everyone is now polarised.".to_string(),
        RunOutcome::TickBudgetExhausted => "Simulation complete.".to_string(),
    }
}

/// One-line progress summary printed after each executed tick.
pub fn progress_line(tick: u64, counts: StateCounts) -> String {
    format!(
        "[tick {:>4}] {} citizens, {} radicalised, {} banned, {} immune",
        tick, counts.citizen, counts.radicalised, counts.banned, counts.immune
    )
}
