//! Document Moderation Workflow
//!
//! A document moves through Draft -> Moderation -> Approved/Rejected ->
//! Published, with every move validated against a rule graph. Rejected
//! transitions leave the document where it was and surface a deterministic
//! error message.
//!
//! Run with: cargo run --example document_workflow

use serde::{Deserialize, Serialize};
use waypoint::builder::StateMachineBuilder;
use waypoint::core::{StateLabels, TransitionRules};
use waypoint::machine::{StateMachine, TransitionError};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
enum DocState {
    Draft,
    Moderation,
    Approved,
    Rejected,
    Published,
}

struct Document {
    title: String,
    state: StateMachine<DocState>,
}

impl Document {
    fn new(title: &str, initial: DocState) -> Self {
        let rules: TransitionRules<DocState> = [
            (DocState::Draft, vec![DocState::Moderation]),
            (DocState::Moderation, vec![DocState::Approved, DocState::Rejected]),
            (DocState::Rejected, vec![DocState::Draft]),
            (DocState::Approved, vec![DocState::Published]),
        ]
        .into_iter()
        .collect();

        let labels: StateLabels<DocState> = [
            (DocState::Draft, "Draft"),
            (DocState::Moderation, "Moderation"),
            (DocState::Approved, "Approved"),
            (DocState::Rejected, "Rejected"),
            (DocState::Published, "Published"),
        ]
        .into_iter()
        .collect();

        let state = StateMachineBuilder::new()
            .initial(initial)
            .rules(rules)
            .labels(labels)
            .build()
            .expect("initial state is set");

        Self {
            title: title.to_string(),
            state,
        }
    }

    fn moderate(&mut self, approved: bool) -> Result<(), TransitionError> {
        if approved {
            self.state.transition(DocState::Approved)
        } else {
            self.state.transition(DocState::Rejected)
        }
    }
}

fn main() {
    println!("=== Document Moderation Workflow ===\n");

    let mut document = Document::new("Launch announcement", DocState::Draft);
    println!("'{}' starts in state: {}", document.title, document.state);

    document
        .state
        .transition(DocState::Moderation)
        .expect("Draft -> Moderation is permitted");
    println!("Submitted for moderation: {}", document.state);

    document.moderate(true).expect("Moderation -> Approved is permitted");
    println!("Moderation passed: {}", document.state);

    // Approved documents cannot go back to Draft.
    match document.state.transition(DocState::Draft) {
        Ok(()) => unreachable!("rule graph forbids this move"),
        Err(err) => println!("Rewind refused: {err}"),
    }

    document
        .state
        .transition(DocState::Published)
        .expect("Approved -> Published is permitted");
    println!("Final state: {} (terminal: {})", document.state, document.state.is_terminal());
}
