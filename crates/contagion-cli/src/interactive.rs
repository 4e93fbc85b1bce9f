//! Interactive removal policy.
//!
//! Prompts a human to pick a node to ban each tick, replacing the
//! original's plot-and-input loop with a text roster. Invalid input is
//! treated as "no ban this tick" so a typo never aborts the run; the
//! engine's own validation still guards programmatic policies.

use std::io::{self, BufRead, Write};

use contagion_core::{Node, NodeId, RemovalPolicy, State};

use crate::render::{print_roster, LEGEND};

/// Policy that asks on stdin which node to ban.
#[derive(Debug, Default)]
pub struct InteractiveBan;

impl RemovalPolicy for InteractiveBan {
    fn choose(&mut self, nodes: &[Node]) -> Option<NodeId> {
        println!();
        println!("Input node you would like to ban {}", LEGEND);
        print_roster(nodes);
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            println!("No one got banned!");
            return None;
        }

        match trimmed.parse::<NodeId>() {
            Ok(id) if id < nodes.len() => {
                if nodes[id].state == State::Banned {
                    println!("Node {} is already banned; skipping.", id);
                    None
                } else {
                    println!("Node {} has been banned!", id);
                    Some(id)
                }
            }
            Ok(id) => {
                println!("No node {} exists; no one got banned.", id);
                None
            }
            Err(_) => {
                println!("Not a node id; no one got banned.");
                None
            }
        }
    }
}
